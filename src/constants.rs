//! Constants used throughout the application

/// Number of landmarks emitted by the face mesh model
pub const NUM_FACE_MESH_LANDMARKS: usize = 468;

/// Face mesh landmark indices for the anchor points
pub const LANDMARK_LEFT_EAR: usize = 132;
pub const LANDMARK_RIGHT_EAR: usize = 361;
pub const LANDMARK_CHIN: usize = 152;
pub const LANDMARK_NOSE_TIP: usize = 1;

/// Smoothing window size (samples per anchor history)
pub const SMOOTHING_WINDOW: usize = 5;

/// Vertical bias applied to ear anchors, in pixels
pub const EAR_ANCHOR_Y_BIAS: f32 = -20.0;

/// Vertical bias applied to the chin anchor, in pixels
pub const CHIN_ANCHOR_Y_BIAS: f32 = 10.0;

/// Vertical bias applied to the nose-tip anchor, in pixels
pub const NOSE_TIP_ANCHOR_Y_BIAS: f32 = 10.0;

/// Earring footprint, in pixels
pub const EARRING_WIDTH: u32 = 100;
pub const EARRING_HEIGHT: u32 = 100;

/// Horizontal draw offsets for the left and right ear anchors. The same
/// image is drawn unmirrored on both sides, hence the asymmetry.
pub const EARRING_LEFT_X_OFFSET: f32 = -60.0;
pub const EARRING_RIGHT_X_OFFSET: f32 = -20.0;

/// Necklace footprint and horizontal centering offset, in pixels
pub const NECKLACE_WIDTH: u32 = 200;
pub const NECKLACE_HEIGHT: u32 = 100;
pub const NECKLACE_X_OFFSET: f32 = -100.0;

/// Ring footprint and horizontal centering offset, in pixels
pub const RING_WIDTH: u32 = 80;
pub const RING_HEIGHT: u32 = 80;
pub const RING_X_OFFSET: f32 = -40.0;

/// Bracelet footprint, in pixels
pub const BRACELET_WIDTH: u32 = 100;
pub const BRACELET_HEIGHT: u32 = 100;

/// Screen-edge margin for the two fixed bracelet positions, in pixels
pub const BRACELET_MARGIN: u32 = 40;

/// Number of catalog variants per accessory category
pub const CATALOG_VARIANTS: usize = 10;

/// Default overlay surface size, matching the camera capture resolution
pub const DEFAULT_SURFACE_WIDTH: u32 = 1280;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 720;
