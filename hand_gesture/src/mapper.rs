//! Per-frame mapping from hand observations to a control command.
//!
//! The mapper is stateless: every frame's command is derived only from
//! that frame's observations. "Hold" semantics (ducking while the left
//! fist stays closed) fall out of the physics re-checking the command
//! each frame, never from the mapper remembering anything.

use serde::{Deserialize, Serialize};

use crate::fist::is_fist;
use crate::landmark::{HandObservation, Handedness};

// ════════════════════════════════════════════════════════════════════════════
// SpeedTier / ControlCommand
// ════════════════════════════════════════════════════════════════════════════

/// World scroll speed selected by the right hand.
///
/// Each tier resolves to a configured pixels-per-frame scalar shared by
/// every moving entity that frame; the player never moves horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTier {
    Slow,
    Normal,
    Fast,
}

/// The discrete control set fed into one simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlCommand {
    pub speed: SpeedTier,
    pub jump:  bool,
    pub duck:  bool,
}

impl ControlCommand {
    /// The baseline command: Normal speed, no jump, no duck.
    ///
    /// Also what a frame with no detector output maps to.
    pub fn idle() -> Self {
        ControlCommand {
            speed: SpeedTier::Normal,
            jump:  false,
            duck:  false,
        }
    }
}

impl Default for ControlCommand {
    fn default() -> Self {
        Self::idle()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// MapperConfig
// ════════════════════════════════════════════════════════════════════════════

/// Which capability set the active game variant recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// When false (jump-only variants), a left fist maps to nothing at
    /// all rather than a duck hold.
    pub duck_enabled: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig { duck_enabled: true }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// map_observations
// ════════════════════════════════════════════════════════════════════════════

/// Map this frame's 0..=2 observations to a [`ControlCommand`].
///
/// Each handedness contributes independently; if the detector reports
/// the same handedness twice, observations are processed in order and
/// the last one wins for that side. An absent side falls back to the
/// baseline (Normal speed / no jump / no duck).
pub fn map_observations(
    cfg: &MapperConfig,
    observations: &[HandObservation],
) -> ControlCommand {
    let mut cmd = ControlCommand::idle();

    for obs in observations {
        let fist = is_fist(obs);
        match obs.handedness {
            Handedness::Right => {
                cmd.speed = if fist { SpeedTier::Slow } else { SpeedTier::Fast };
            }
            Handedness::Left => {
                if fist {
                    cmd.jump = false;
                    cmd.duck = cfg.duck_enabled;
                } else {
                    cmd.jump = true;
                    cmd.duck = false;
                }
            }
        }
    }

    cmd
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
