//! # hand_gesture
//!
//! Turns per-frame hand landmark observations into discrete game controls.
//!
//! The external detector (camera + hand-pose model) is a black box that
//! produces up to two [`HandObservation`]s per frame — 21 normalized 2D
//! keypoints plus a Left/Right label. This crate owns everything after
//! that boundary:
//!
//! * [`fist::is_fist`] — the fixed geometric open-vs-fist heuristic.
//! * [`mapper::map_observations`] — observations → [`ControlCommand`].
//! * [`source`] — channel-based observation delivery, so consumers don't
//!   care whether frames came from live hardware or a scripted replay.
//!
//! ## Gesture → Control mapping
//!
//! | Hand  | Pose | Control |
//! |-------|------|---------|
//! | Right | open | speed tier **Fast** |
//! | Right | fist | speed tier **Slow** |
//! | Right | absent | speed tier **Normal** |
//! | Left  | open | **jump** requested |
//! | Left  | fist | **duck** held (when the duck capability is enabled) |
//! | Left  | absent | no jump, no duck |
//!
//! Commands are recomputed from scratch every frame — nothing latches.
//! A frame with no observations (detector hiccup, no camera) simply maps
//! to the baseline command.

pub mod fist;
pub mod landmark;
pub mod mapper;
pub mod source;

pub use fist::is_fist;
pub use landmark::{HandObservation, Handedness, Landmark, ObservationError, LANDMARK_COUNT};
pub use mapper::{map_observations, ControlCommand, MapperConfig, SpeedTier};
pub use source::{spawn_observation_source, ObservationSource, ScriptedSource};
