//! Recorded landmark traces for offline replay.
//!
//! A trace file is JSON Lines: one [`LandmarkFrame`] object per line, in
//! frame order, exactly as an external detector emitted them. Blank lines
//! are skipped. Replaying a trace drives the full pipeline without a live
//! camera or detector.

use crate::landmarks::LandmarkFrame;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// An ordered sequence of recorded detector frames
#[derive(Debug, Clone, Default)]
pub struct LandmarkTrace {
    pub frames: Vec<LandmarkFrame>,
}

impl LandmarkTrace {
    /// Read a trace from a JSON Lines file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is not a
    /// valid landmark frame.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut frames = Vec::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let frame: LandmarkFrame = serde_json::from_str(&line)
                .map_err(|e| Error::TraceError(format!("Line {}: {e}", line_number + 1)))?;
            frames.push(frame);
        }

        Ok(Self { frames })
    }

    /// Write the trace as JSON Lines
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        for frame in &self.frames {
            let line = serde_json::to_string(frame).map_err(|e| Error::TraceError(e.to_string()))?;
            writeln!(writer, "{line}")?;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
