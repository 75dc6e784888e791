//! Open-hand vs. closed-fist classification.
//!
//! A fixed geometric heuristic, not a trained model: for the index,
//! middle, ring and pinky fingers, a fingertip sitting *below* its PIP
//! joint in image coordinates (larger y) means the finger is curled
//! toward the palm. Three or more curled fingers reads as a fist.
//!
//! The thumb is deliberately excluded — its tip-vs-joint vertical
//! ordering is unreliable across hand rotations. Consequence: a pose
//! with only the thumb curled still classifies as open. That is a known
//! limitation of the heuristic, not a bug.

use crate::landmark::{HandObservation, FINGERTIPS, PIP_JOINTS};

/// Minimum curled fingers (of 4 checked) for a fist verdict.
const FOLDED_THRESHOLD: usize = 3;

/// Classify one hand as fist (`true`) or open (`false`).
///
/// Pure and stateless — no hysteresis, no smoothing across frames.
pub fn is_fist(obs: &HandObservation) -> bool {
    let points = obs.points();
    let folded = FINGERTIPS
        .iter()
        .zip(PIP_JOINTS.iter())
        .filter(|(tip, pip)| points[**tip].y > points[**pip].y)
        .count();
    folded >= FOLDED_THRESHOLD
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
