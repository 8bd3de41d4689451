//! Temporal smoothing of anchor positions.
//!
//! Raw landmark positions jitter frame to frame; each anchor keeps a
//! bounded history of recent samples and the compositor places accessories
//! at the unweighted mean. Response lag on step changes equals half the
//! window.

use crate::landmarks::{Anchor, AnchorPoints, Point2D};
use std::collections::VecDeque;

/// Bounded FIFO history of raw position samples for a single anchor
#[derive(Debug, Clone)]
pub struct SmoothingWindow {
    window_size: usize,
    samples: VecDeque<Point2D>,
}

impl SmoothingWindow {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            samples: VecDeque::with_capacity(window_size),
        }
    }

    /// Append a raw sample, evicting the oldest once the bound is reached
    pub fn push(&mut self, point: Point2D) {
        if self.samples.len() >= self.window_size {
            self.samples.pop_front();
        }
        self.samples.push_back(point);
    }

    /// Unweighted arithmetic mean of the stored samples.
    ///
    /// Returns `None` only while the history is empty, i.e. before the
    /// first detection. Recomputed from scratch each call; no running sum.
    pub fn average(&self) -> Option<Point2D> {
        if self.samples.is_empty() {
            return None;
        }

        let sum = self
            .samples
            .iter()
            .fold(Point2D::default(), |acc, p| Point2D::new(acc.x + p.x, acc.y + p.y));
        let n = self.samples.len() as f32;

        Some(Point2D::new(sum.x / n, sum.y / n))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Stored samples in arrival order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Point2D> {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Per-anchor smoothing windows for the whole face
#[derive(Debug, Clone)]
pub struct AnchorSmoother {
    windows: [SmoothingWindow; 4],
}

impl AnchorSmoother {
    pub fn new(window_size: usize) -> Self {
        Self {
            windows: std::array::from_fn(|_| SmoothingWindow::new(window_size)),
        }
    }

    fn index(anchor: Anchor) -> usize {
        match anchor {
            Anchor::LeftEar => 0,
            Anchor::RightEar => 1,
            Anchor::Chin => 2,
            Anchor::NoseTip => 3,
        }
    }

    /// Record one frame's raw anchor points into every history
    pub fn observe(&mut self, anchors: &AnchorPoints) {
        for anchor in Anchor::ALL {
            self.windows[Self::index(anchor)].push(anchors.get(anchor));
        }
    }

    /// Smoothed position of one anchor, or `None` before the first detection
    pub fn average(&self, anchor: Anchor) -> Option<Point2D> {
        self.windows[Self::index(anchor)].average()
    }

    pub fn window(&self, anchor: Anchor) -> &SmoothingWindow {
        &self.windows[Self::index(anchor)]
    }

    /// Clear every history
    pub fn reset(&mut self) {
        for window in &mut self.windows {
            window.clear();
        }
    }
}
