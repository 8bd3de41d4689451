//! Replay application: drives a session from a recorded landmark trace.

use crate::assets::Accessory;
use crate::config::Config;
use crate::error::Result;
use crate::session::TryOnSession;
use crate::trace::LandmarkTrace;
use log::{info, warn};
use std::path::PathBuf;

/// Replay application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Landmark trace to replay
    pub trace_path: PathBuf,
    /// Directory receiving one overlay PNG per frame
    pub out_dir: PathBuf,
    /// Category active at the start of the replay
    pub initial_mode: Accessory,
    /// Library configuration (surface, smoothing, assets)
    pub config: Config,
}

/// Replays a landmark trace and writes the composited overlay frames
pub struct TryOnApp {
    config: AppConfig,
    session: TryOnSession,
}

impl TryOnApp {
    /// Create the application and its session
    ///
    /// # Errors
    ///
    /// Returns an error if the library configuration fails validation.
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut session = TryOnSession::new(&config.config)?;
        session.select_mode(config.initial_mode);

        Ok(Self { config, session })
    }

    /// Replay the trace, writing `frame_NNNN.png` files to the output
    /// directory.
    ///
    /// A frame the detector emitted malformed is logged and skipped; the
    /// replay continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the trace cannot be read, the output directory
    /// cannot be created, or an overlay fails to encode.
    pub fn run(&mut self) -> Result<()> {
        let trace = LandmarkTrace::from_file(&self.config.trace_path)?;
        info!(
            "Replaying {} frames from {}",
            trace.len(),
            self.config.trace_path.display()
        );

        std::fs::create_dir_all(&self.config.out_dir)?;

        let mut written = 0usize;
        for (index, frame) in trace.frames.iter().enumerate() {
            if let Err(e) = self.session.on_frame(frame) {
                warn!("Skipping frame {index}: {e}");
                continue;
            }

            let path = self.config.out_dir.join(format!("frame_{index:04}.png"));
            self.session.overlay().save(&path)?;
            written += 1;
        }

        info!("Wrote {written} overlay frames to {}", self.config.out_dir.display());
        Ok(())
    }

    pub fn session(&self) -> &TryOnSession {
        &self.session
    }
}
