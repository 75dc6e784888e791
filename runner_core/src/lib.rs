//! # runner_core
//!
//! The deterministic simulation behind the gesture-controlled runner:
//! player vertical kinematics, time-driven obstacle/collectible
//! spawning, AABB collision with scoring and health, and the
//! Active/Terminal session state machine.
//!
//! One [`GameSession`] is one play-through. An external driver owns the
//! frame loop: each frame it gathers hand observations (see the
//! `hand_gesture` crate), maps them to a [`hand_gesture::ControlCommand`],
//! merges keyboard [`KeyEvent`]s, and calls [`GameSession::step`] with
//! the frame delta. Rendering reads [`GameSession::snapshot`] and is
//! entirely outside this crate.
//!
//! Determinism: all randomness lives in the seed-injected [`Spawner`],
//! and kinematics use fixed per-frame constants — the same seed and
//! command transcript always replay to the same final state.

pub mod collision;
pub mod config;
pub mod entity;
pub mod player;
pub mod session;
pub mod spawner;

pub use collision::{collectible_hitbox, obstacle_hitbox, player_hurtbox, Rect};
pub use config::SessionConfig;
pub use entity::{Collectible, Obstacle, ObstacleKind};
pub use player::Player;
pub use session::{
    CollectibleView, GameSession, KeyEvent, ObstacleView, PlayerView, SessionPhase,
    SessionSnapshot,
};
pub use spawner::Spawner;
