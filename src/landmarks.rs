//! Landmark frame types and anchor-point extraction.
//!
//! The face mesh model itself is an external collaborator: it emits, per
//! processed video frame, the landmark list of zero or one face, with
//! coordinates normalized to [0, 1] relative to the frame dimensions. This
//! module turns that raw output into the four named anchor points the
//! compositor places accessories at.

use crate::constants::{
    CHIN_ANCHOR_Y_BIAS, EAR_ANCHOR_Y_BIAS, LANDMARK_CHIN, LANDMARK_LEFT_EAR, LANDMARK_NOSE_TIP,
    LANDMARK_RIGHT_EAR, NOSE_TIP_ANCHOR_Y_BIAS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A 2D point in overlay-surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single landmark as emitted by the face mesh model.
///
/// `x` and `y` are normalized to [0, 1]; `z` is the model's depth estimate,
/// carried through deserialization but unused by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// One frame of detector output: the landmark lists of zero or one face.
///
/// An empty `faces` vector means no face was detected that frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkFrame {
    pub faces: Vec<Vec<NormalizedLandmark>>,
}

impl LandmarkFrame {
    /// Frame with no detected face
    pub fn empty() -> Self {
        Self::default()
    }

    /// Frame with exactly one detected face
    pub fn single_face(landmarks: Vec<NormalizedLandmark>) -> Self {
        Self {
            faces: vec![landmarks],
        }
    }

    /// The first detected face's landmarks, if any.
    ///
    /// Only the first face is ever used; multi-face handling is out of scope.
    pub fn primary_face(&self) -> Option<&[NormalizedLandmark]> {
        self.faces.first().map(Vec::as_slice)
    }
}

/// Named anchor points derived from the face mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    LeftEar,
    RightEar,
    Chin,
    NoseTip,
}

impl Anchor {
    /// All anchors, in extraction order
    pub const ALL: [Anchor; 4] = [Anchor::LeftEar, Anchor::RightEar, Anchor::Chin, Anchor::NoseTip];

    /// Index of this anchor in the external model's landmark list
    pub fn landmark_index(self) -> usize {
        match self {
            Anchor::LeftEar => LANDMARK_LEFT_EAR,
            Anchor::RightEar => LANDMARK_RIGHT_EAR,
            Anchor::Chin => LANDMARK_CHIN,
            Anchor::NoseTip => LANDMARK_NOSE_TIP,
        }
    }

    /// Vertical pixel bias compensating for the landmark-to-accessory
    /// visual offset. Empirical, tied to the model's landmark placement.
    pub fn y_bias(self) -> f32 {
        match self {
            Anchor::LeftEar | Anchor::RightEar => EAR_ANCHOR_Y_BIAS,
            Anchor::Chin => CHIN_ANCHOR_Y_BIAS,
            Anchor::NoseTip => NOSE_TIP_ANCHOR_Y_BIAS,
        }
    }
}

/// The four raw anchor points of a single frame, in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoints {
    pub left_ear: Point2D,
    pub right_ear: Point2D,
    pub chin: Point2D,
    pub nose_tip: Point2D,
}

impl AnchorPoints {
    pub fn get(&self, anchor: Anchor) -> Point2D {
        match anchor {
            Anchor::LeftEar => self.left_ear,
            Anchor::RightEar => self.right_ear,
            Anchor::Chin => self.chin,
            Anchor::NoseTip => self.nose_tip,
        }
    }
}

/// Extract the four anchor points from one face's landmark list.
///
/// Normalized coordinates are scaled to absolute pixels using the overlay
/// surface dimensions, then shifted by each anchor's fixed bias.
///
/// # Errors
///
/// Returns an error if the landmark list is too short to contain every
/// anchor index.
pub fn extract_anchors(face: &[NormalizedLandmark], width: u32, height: u32) -> Result<AnchorPoints> {
    let anchor_point = |anchor: Anchor| -> Result<Point2D> {
        let index = anchor.landmark_index();
        let landmark = face.get(index).ok_or_else(|| {
            Error::LandmarkError(format!(
                "Landmark index {index} out of range for face with {} landmarks",
                face.len()
            ))
        })?;
        Ok(Point2D::new(
            landmark.x * width as f32,
            landmark.y * height as f32 + anchor.y_bias(),
        ))
    };

    Ok(AnchorPoints {
        left_ear: anchor_point(Anchor::LeftEar)?,
        right_ear: anchor_point(Anchor::RightEar)?,
        chin: anchor_point(Anchor::Chin)?,
        nose_tip: anchor_point(Anchor::NoseTip)?,
    })
}
