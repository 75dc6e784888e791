//! Player vertical kinematics.
//!
//! A small state machine over {Standing, Jumping, Ducking} with a float
//! velocity for the jump arc. Transitions are level-triggered — the
//! session re-applies the frame's command every step — except `jump` and
//! `force_fall`, which fire once and are held out by the `jumping` flag.
//! Invalid commands (jump mid-air, duck mid-jump) are guarded no-ops,
//! never errors.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top edge; the bottom rests on `cfg.ground_y` when grounded.
    pub y:      f32,
    /// Vertical velocity, px/frame, positive = down.
    pub vy:     f32,
    /// Current height: `stand_h` or `duck_h`, nothing in between.
    pub height: f32,
    pub jumping: bool,
    pub ducking: bool,
    pub health:  u32,
    /// Seconds of damage immunity remaining.
    invuln_secs_left: f32,
}

impl Player {
    pub fn new(cfg: &SessionConfig) -> Self {
        Player {
            y:      cfg.ground_y - cfg.stand_h,
            vy:     0.0,
            height: cfg.stand_h,
            jumping: false,
            ducking: false,
            // The single-hit variant is the health variant with one heart.
            health: if cfg.health_enabled { cfg.max_health } else { 1 },
            invuln_secs_left: 0.0,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_secs_left > 0.0
    }

    // ── commands ─────────────────────────────────────────────────────────

    /// Launch a jump. Only valid from Standing.
    pub fn jump(&mut self, cfg: &SessionConfig) {
        if self.jumping || self.ducking {
            return;
        }
        self.vy = cfg.jump_impulse;
        self.jumping = true;
    }

    /// Enter the duck pose. Only valid when not mid-jump.
    ///
    /// A grounded duck snaps the shorter body back onto the ground line.
    /// An airborne duck (reachable only after a force-fall) just shrinks
    /// the body and lets gravity finish the descent.
    pub fn duck(&mut self, cfg: &SessionConfig) {
        if self.jumping || self.ducking {
            return;
        }
        let grounded = self.bottom() >= cfg.ground_y;
        self.ducking = true;
        self.height = cfg.duck_h;
        if grounded {
            self.y = cfg.ground_y - cfg.duck_h;
        }
    }

    /// Leave the duck pose and restore standing height.
    pub fn stand(&mut self, cfg: &SessionConfig) {
        if self.jumping || !self.ducking {
            return;
        }
        let grounded = self.bottom() >= cfg.ground_y;
        self.ducking = false;
        self.height = cfg.stand_h;
        if grounded {
            self.y = cfg.ground_y - cfg.stand_h;
        }
    }

    /// Cancel an in-progress jump with a hard downward velocity, so a
    /// duck command can take effect as soon as the ground is reached.
    pub fn force_fall(&mut self, cfg: &SessionConfig) {
        if !self.jumping {
            return;
        }
        self.vy = cfg.force_fall_speed;
        self.jumping = false;
    }

    // ── per-frame integration ────────────────────────────────────────────

    /// One Euler step: gravity into velocity, velocity into position,
    /// then clamp to the ground line for the current height state.
    pub fn update(&mut self, cfg: &SessionConfig) {
        self.vy += cfg.gravity;
        self.y += self.vy;

        if self.bottom() >= cfg.ground_y {
            self.y = cfg.ground_y - self.height;
            self.vy = 0.0;
            self.jumping = false;
        }
    }

    // ── damage / invulnerability ─────────────────────────────────────────

    /// Apply one damage unit and open the invulnerability window.
    pub fn take_damage(&mut self, cfg: &SessionConfig) {
        self.health = self.health.saturating_sub(1);
        self.invuln_secs_left = cfg.invuln_secs;
    }

    /// Decay the invulnerability window by elapsed wall-clock time.
    pub fn tick_invulnerability(&mut self, dt: f32) {
        if self.invuln_secs_left > 0.0 {
            self.invuln_secs_left = (self.invuln_secs_left - dt).max(0.0);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
