//! Virtual jewelry try-on core.
//!
//! This library anchors accessory images (earrings, necklace, ring,
//! bracelet) to facial landmarks and composites them onto an RGBA overlay
//! surface. The pipeline per detector frame:
//! 1. Anchor extraction from the external face mesh model's landmark list
//!    (fixed indices, scaled to pixels, fixed per-anchor bias)
//! 2. Temporal smoothing of each anchor through a bounded moving-average
//!    window to suppress jitter
//! 3. Mode-dispatched compositing of the active category's image at its
//!    anchor-relative rectangle
//!
//! Face detection itself, camera capture, and the presentation layer are
//! external collaborators; this crate consumes per-frame landmark lists
//! and produces overlay images.
//!
//! # Examples
//!
//! ```no_run
//! use jewelry_tryon::{assets::Accessory, config::Config, landmarks::LandmarkFrame,
//!                     session::TryOnSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TryOnSession::new(&Config::default())?;
//!
//! // Once video metadata is known
//! session.resize_surface(1280, 720);
//!
//! // User picks a category and a catalog variant
//! session.select_mode(Accessory::Necklace);
//! session.change_accessory(Accessory::Necklace, "necklace3.png");
//!
//! // Per-frame detector callback
//! let frame = LandmarkFrame::empty();
//! session.on_frame(&frame)?;
//! let overlay = session.overlay();
//! # Ok(())
//! # }
//! ```

/// Accessory categories, catalog conventions, and the loaded-image store
pub mod assets;

/// Mode dispatch and accessory compositing onto the overlay surface
pub mod compositor;

/// Landmark frame types and anchor-point extraction
pub mod landmarks;

/// Asynchronous accessory image loading
pub mod loader;

/// Temporal smoothing of anchor positions
pub mod smoothing;

/// The try-on session owning all mutable state
pub mod session;

/// Recorded landmark traces for offline replay
pub mod trace;

/// Replay application module
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

/// Utility functions for coordinate conversions
pub mod utils;

pub use error::{Error, Result};
