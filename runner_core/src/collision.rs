//! Axis-aligned collision rectangles.
//!
//! Every entity collides through a hurtbox/hitbox inset from its visual
//! bounds; the inset amounts are per-entity configured constants. Air
//! obstacles are special: they collide as a column from the ceiling down
//! to their bottom edge, so only a ducking player slips under them.

use crate::config::SessionConfig;
use crate::entity::{Collectible, Obstacle, ObstacleKind};
use crate::player::Player;

// ════════════════════════════════════════════════════════════════════════════
// Rect
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Strict AABB overlap — shared edges do not count as contact.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Shrink by `dx` on each side and `dy` on top and bottom.
    /// Degenerate insets collapse to a zero-size rect that overlaps nothing.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            w: (self.w - 2.0 * dx).max(0.0),
            h: (self.h - 2.0 * dy).max(0.0),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Entity boxes
// ════════════════════════════════════════════════════════════════════════════

pub fn player_hurtbox(player: &Player, cfg: &SessionConfig) -> Rect {
    Rect {
        x: cfg.player_x,
        y: player.y,
        w: cfg.player_w,
        h: player.height,
    }
    .inset(cfg.hurtbox_inset_x, cfg.hurtbox_inset_y)
}

pub fn obstacle_hitbox(obstacle: &Obstacle, cfg: &SessionConfig) -> Rect {
    match obstacle.kind {
        ObstacleKind::Ground => Rect {
            x: obstacle.x,
            y: obstacle.y,
            w: obstacle.w,
            h: obstacle.h,
        }
        .inset(cfg.obstacle_inset, cfg.obstacle_inset),
        // Hanging obstacles block everything from the ceiling down to
        // their bottom edge.
        ObstacleKind::Air => Rect {
            x: obstacle.x + cfg.obstacle_inset,
            y: 0.0,
            w: (obstacle.w - 2.0 * cfg.obstacle_inset).max(0.0),
            h: (obstacle.bottom() - cfg.obstacle_inset).max(0.0),
        },
    }
}

pub fn collectible_hitbox(c: &Collectible, cfg: &SessionConfig) -> Rect {
    Rect {
        x: c.x,
        y: c.y,
        w: c.size,
        h: c.size,
    }
    .inset(cfg.collectible_inset, cfg.collectible_inset)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
