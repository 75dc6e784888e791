//! Time-driven entity generation.
//!
//! Two independent timers accumulate the driver's frame deltas; when one
//! exceeds its configured interval it resets and emits one entity at the
//! right viewport edge. All randomized parameters (obstacle kind, height,
//! lane, bob phase) come from an owned, seed-injected generator, so a
//! given seed and dt sequence always reproduces the same spawn stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use crate::config::SessionConfig;
use crate::entity::{Collectible, Obstacle, ObstacleKind};

pub struct Spawner {
    rng: ChaCha8Rng,
    obstacle_timer:    f32,
    collectible_timer: f32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Spawner {
            rng: ChaCha8Rng::seed_from_u64(seed),
            obstacle_timer:    0.0,
            collectible_timer: 0.0,
        }
    }

    /// Advance both timers by `dt` seconds and emit whatever came due.
    pub fn tick(
        &mut self,
        dt: f32,
        cfg: &SessionConfig,
    ) -> (Option<Obstacle>, Option<Collectible>) {
        let mut obstacle = None;
        let mut collectible = None;

        self.obstacle_timer += dt;
        if self.obstacle_timer > cfg.obstacle_interval {
            self.obstacle_timer = 0.0;
            obstacle = Some(self.spawn_obstacle(cfg));
        }

        self.collectible_timer += dt;
        if self.collectible_timer > cfg.collectible_interval {
            self.collectible_timer = 0.0;
            collectible = Some(self.spawn_collectible(cfg));
        }

        (obstacle, collectible)
    }

    fn spawn_obstacle(&mut self, cfg: &SessionConfig) -> Obstacle {
        let total = cfg.ground_weight + cfg.air_weight;
        let roll = self.rng.gen_range(0..total);
        if roll < cfg.ground_weight {
            let h = self
                .rng
                .gen_range(cfg.ground_obstacle_h_min..=cfg.ground_obstacle_h_max);
            Obstacle {
                x: cfg.viewport_w,
                y: cfg.ground_y - h,
                w: cfg.ground_obstacle_w,
                h,
                kind: ObstacleKind::Ground,
                hit: false,
            }
        } else {
            let lane = self.rng.gen_range(0..cfg.air_lanes.len());
            let bottom = cfg.air_lanes[lane];
            Obstacle {
                x: cfg.viewport_w,
                y: bottom - cfg.air_obstacle_h,
                w: cfg.air_obstacle_w,
                h: cfg.air_obstacle_h,
                kind: ObstacleKind::Air,
                hit: false,
            }
        }
    }

    fn spawn_collectible(&mut self, cfg: &SessionConfig) -> Collectible {
        let lane = self.rng.gen_range(0..cfg.collectible_lanes.len());
        Collectible {
            x: cfg.viewport_w,
            y: cfg.collectible_lanes[lane],
            size: cfg.collectible_size,
            phase: self.rng.gen_range(0.0..TAU),
            collected: false,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 30.0;

    #[test]
    fn nothing_spawns_before_the_interval() {
        let cfg = SessionConfig::default();
        let mut s = Spawner::new(7);
        // Stay strictly under both intervals.
        let frames = (cfg.collectible_interval / DT) as u32 - 2;
        for _ in 0..frames {
            let (o, c) = s.tick(DT, &cfg);
            assert!(o.is_none());
            assert!(c.is_none());
        }
    }

    #[test]
    fn obstacle_spawns_at_right_edge_after_interval() {
        let cfg = SessionConfig::default();
        let mut s = Spawner::new(7);
        let mut spawned = None;
        for _ in 0..(cfg.obstacle_interval / DT) as u32 + 2 {
            if let (Some(o), _) = s.tick(DT, &cfg) {
                spawned = Some(o);
                break;
            }
        }
        let o = spawned.expect("obstacle due within one interval");
        assert_eq!(o.x, cfg.viewport_w);
        assert!(!o.hit);
    }

    #[test]
    fn ground_obstacle_heights_stay_in_bounds() {
        let cfg = SessionConfig::default();
        let mut s = Spawner::new(21);
        for _ in 0..200 {
            let o = s.spawn_obstacle(&cfg);
            match o.kind {
                ObstacleKind::Ground => {
                    assert!(o.h >= cfg.ground_obstacle_h_min);
                    assert!(o.h <= cfg.ground_obstacle_h_max);
                    assert_eq!(o.bottom(), cfg.ground_y);
                }
                ObstacleKind::Air => {
                    assert!(cfg.air_lanes.contains(&o.bottom()));
                }
            }
        }
    }

    #[test]
    fn both_kinds_eventually_appear() {
        let cfg = SessionConfig::default();
        let mut s = Spawner::new(3);
        let kinds: Vec<ObstacleKind> =
            (0..100).map(|_| s.spawn_obstacle(&cfg).kind).collect();
        assert!(kinds.contains(&ObstacleKind::Ground));
        assert!(kinds.contains(&ObstacleKind::Air));
    }

    #[test]
    fn collectible_lanes_come_from_the_configured_set() {
        let cfg = SessionConfig::default();
        let mut s = Spawner::new(11);
        for _ in 0..100 {
            let c = s.spawn_collectible(&cfg);
            assert!(cfg.collectible_lanes.contains(&c.y));
            assert!((0.0..TAU).contains(&c.phase));
            assert!(!c.collected);
        }
    }

    #[test]
    fn same_seed_same_spawn_stream() {
        let cfg = SessionConfig::default();
        let mut a = Spawner::new(99);
        let mut b = Spawner::new(99);
        for _ in 0..600 {
            assert_eq!(a.tick(DT, &cfg), b.tick(DT, &cfg));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let cfg = SessionConfig::default();
        let mut a = Spawner::new(1);
        let mut b = Spawner::new(2);
        let sa: Vec<_> = (0..50).map(|_| a.spawn_obstacle(&cfg)).collect();
        let sb: Vec<_> = (0..50).map(|_| b.spawn_obstacle(&cfg)).collect();
        assert_ne!(sa, sb);
    }
}
