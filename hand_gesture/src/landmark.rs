//! Hand landmark model — the data the external detector hands us.
//!
//! One observation is 21 normalized keypoints in the fixed anatomical
//! order used by common hand-pose models (wrist, thumb joints, then
//! finger joints/tips), plus a Left/Right label. Coordinates are in
//! image space: x and y in [0,1], **y grows downward**.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keypoints per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// Fingertip landmark indices for index, middle, ring, pinky.
pub const FINGERTIPS: [usize; 4] = [8, 12, 16, 20];

/// Proximal-interphalangeal joint indices paired with [`FINGERTIPS`].
pub const PIP_JOINTS: [usize; 4] = [6, 10, 14, 18];

// ════════════════════════════════════════════════════════════════════════════
// Handedness
// ════════════════════════════════════════════════════════════════════════════

/// Which hand the detector says it saw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

// ════════════════════════════════════════════════════════════════════════════
// Landmark / HandObservation
// ════════════════════════════════════════════════════════════════════════════

/// A single normalized 2D keypoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

/// Everything the detector reports about one hand in one frame.
///
/// Observations are not owned across frames; the game consumes the
/// current frame's set and forgets it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub handedness: Handedness,
    points: Vec<Landmark>,
}

/// Rejection reasons for detector output we refuse to interpret.
///
/// A rejected observation is treated as an absent hand for that frame —
/// it never faults the frame.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ObservationError {
    #[error("expected 21 landmarks, got {0}")]
    WrongLandmarkCount(usize),
}

impl HandObservation {
    /// Build an observation, validating the landmark count.
    pub fn new(
        handedness: Handedness,
        points: Vec<Landmark>,
    ) -> Result<Self, ObservationError> {
        if points.len() != LANDMARK_COUNT {
            return Err(ObservationError::WrongLandmarkCount(points.len()));
        }
        Ok(HandObservation { handedness, points })
    }

    /// The full ordered keypoint slice (always `LANDMARK_COUNT` long).
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
