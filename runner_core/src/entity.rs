//! The scrolling world entities: obstacles and collectibles.
//!
//! Both are created by the spawner at the right viewport edge and drift
//! left by the frame's world speed until collected, hit, or evicted past
//! the left edge.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground line; jumped over.
    Ground,
    /// Hangs from above; ducked under.
    Air,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    /// Top edge of the visible body.
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub kind: ObstacleKind,
    /// Set after the first player contact so one obstacle never deals
    /// damage twice.
    pub hit: bool,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    /// Lane top edge — what collision sees.
    pub y: f32,
    pub size: f32,
    /// Bob phase, radians. Display only.
    pub phase: f32,
    pub collected: bool,
}

impl Collectible {
    pub fn right(&self) -> f32 {
        self.x + self.size
    }

    pub fn advance(&mut self, speed: f32, dt: f32, cfg: &SessionConfig) {
        self.x -= speed;
        self.phase += dt * cfg.bob_rate;
    }

    /// Lane y plus the sinusoidal bob offset, for the renderer only.
    pub fn display_y(&self, cfg: &SessionConfig) -> f32 {
        self.y + self.phase.sin() * cfg.bob_amplitude
    }
}
