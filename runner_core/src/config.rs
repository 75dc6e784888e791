//! Session configuration — every tunable the simulation reads.
//!
//! The playable variants (jump-only single-hit vs. full duck+health)
//! are the same core behind different flag settings here, not separate
//! code paths. Kinematic values are pixels per simulated frame; the
//! spawn intervals and invulnerability window are wall-clock seconds
//! fed from the driver's frame delta.

use hand_gesture::SpeedTier;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    // ── viewport / ground ────────────────────────────────────────────────
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// Ground line: the y every grounded entity's bottom edge sits on.
    pub ground_y:   f32,

    // ── player geometry ──────────────────────────────────────────────────
    /// Fixed horizontal position; the world scrolls, the player doesn't.
    pub player_x: f32,
    pub player_w: f32,
    pub stand_h:  f32,
    pub duck_h:   f32,

    // ── player kinematics (px/frame, px/frame²) ──────────────────────────
    pub gravity:          f32,
    /// Negative = upward.
    pub jump_impulse:     f32,
    /// Downward velocity substituted when a duck cancels a jump mid-air.
    pub force_fall_speed: f32,

    // ── world speed tiers (px/frame) ─────────────────────────────────────
    pub speed_slow:   f32,
    pub speed_normal: f32,
    pub speed_fast:   f32,

    // ── spawning ─────────────────────────────────────────────────────────
    /// Seconds between obstacle spawns.
    pub obstacle_interval:    f32,
    /// Seconds between collectible spawns.
    pub collectible_interval: f32,
    /// Weighted obstacle-kind draw, ground : air.
    pub ground_weight: u32,
    pub air_weight:    u32,
    pub ground_obstacle_w:     f32,
    pub ground_obstacle_h_min: f32,
    pub ground_obstacle_h_max: f32,
    pub air_obstacle_w: f32,
    pub air_obstacle_h: f32,
    /// Bottom-edge lanes for hanging obstacles: low enough to clip a
    /// standing player, high enough to clear a ducking one.
    pub air_lanes: Vec<f32>,
    pub collectible_size:  f32,
    /// Top-edge lanes collectibles spawn on.
    pub collectible_lanes: Vec<f32>,
    /// Sinusoidal bob, display only — collision uses the lane y.
    pub bob_amplitude: f32,
    /// Radians per second of bob phase.
    pub bob_rate: f32,

    // ── collision insets (the preserved per-entity magic numbers) ────────
    pub hurtbox_inset_x:   f32,
    pub hurtbox_inset_y:   f32,
    pub obstacle_inset:    f32,
    pub collectible_inset: f32,

    // ── capabilities / scoring ───────────────────────────────────────────
    pub duck_enabled:      bool,
    pub duck_cancels_jump: bool,
    /// false = single-hit variant: any obstacle contact ends the session.
    pub health_enabled: bool,
    pub max_health:     u32,
    /// Invulnerability window after taking damage, seconds.
    pub invuln_secs: f32,
    pub score_per_collectible: u32,
}

impl Default for SessionConfig {
    /// The full variant: ducking, duck-cancels-jump, three hearts.
    fn default() -> Self {
        SessionConfig {
            viewport_w: 800.0,
            viewport_h: 400.0,
            ground_y:   300.0,

            player_x: 100.0,
            player_w: 40.0,
            stand_h:  60.0,
            duck_h:   30.0,

            gravity:          1.0,
            jump_impulse:     -15.0,
            force_fall_speed: 15.0,

            speed_slow:   4.0,
            speed_normal: 5.0,
            speed_fast:   10.0,

            obstacle_interval:    2.5,
            collectible_interval: 1.8,
            ground_weight: 2,
            air_weight:    1,
            ground_obstacle_w:     30.0,
            ground_obstacle_h_min: 30.0,
            ground_obstacle_h_max: 60.0,
            air_obstacle_w: 40.0,
            air_obstacle_h: 30.0,
            air_lanes: vec![255.0, 265.0],
            collectible_size:  20.0,
            collectible_lanes: vec![200.0, 240.0, 270.0],
            bob_amplitude: 6.0,
            bob_rate:      4.0,

            hurtbox_inset_x:   6.0,
            hurtbox_inset_y:   6.0,
            obstacle_inset:    4.0,
            collectible_inset: 2.0,

            duck_enabled:      true,
            duck_cancels_jump: true,
            health_enabled:    true,
            max_health:        3,
            invuln_secs:       1.5,
            score_per_collectible: 10,
        }
    }
}

impl SessionConfig {
    /// The jump-only single-hit variant: no ducking, one obstacle
    /// contact ends the run.
    pub fn jump_only() -> Self {
        SessionConfig {
            duck_enabled:      false,
            duck_cancels_jump: false,
            health_enabled:    false,
            ..SessionConfig::default()
        }
    }

    /// Pixels-per-frame world speed for a tier.
    pub fn speed_for(&self, tier: SpeedTier) -> f32 {
        match tier {
            SpeedTier::Slow   => self.speed_slow,
            SpeedTier::Normal => self.speed_normal,
            SpeedTier::Fast   => self.speed_fast,
        }
    }
}
