//! The frame loop: drain observations, map, step, report.
//!
//! One script frame is consumed per simulation frame; once the script
//! runs out the channel hangs up and every later frame maps the empty
//! observation set — exactly what a detector dropout looks like, and the
//! session keeps running on baseline commands either way.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use hand_gesture::{
    map_observations, spawn_observation_source, ControlCommand, HandObservation, Handedness,
    Landmark, MapperConfig, ScriptedSource,
};
use hand_gesture::landmark::{FINGERTIPS, LANDMARK_COUNT, PIP_JOINTS};
use hand_gesture::source::ObservationFrame;
use runner_core::{GameSession, SessionConfig, SessionPhase};

/// Simulation step, matching the original 30 fps frame clock.
const DT: f32 = 1.0 / 30.0;

/// Status line cadence, frames.
const REPORT_EVERY: u32 = 30;

pub fn run(cfg: SessionConfig, seed: u64, max_frames: u32) -> Result<(), String> {
    let mapper_cfg = MapperConfig { duck_enabled: cfg.duck_enabled };
    let rx = spawn_observation_source(ScriptedSource {
        frames:   demo_script(max_frames as usize),
        interval: Duration::ZERO,
    });

    let mut session = GameSession::new(cfg, seed);

    for frame in 0..max_frames {
        let observations = next_observations(&rx);
        let cmd = map_observations(&mapper_cfg, &observations);
        session.step(DT, cmd, &[]);

        if frame % REPORT_EVERY == 0 {
            report(frame, &cmd, &session);
        }

        if session.phase() == SessionPhase::Terminal {
            println!();
            println!("  ✗ Game over at frame {} — score {}", frame, session.score());
            break;
        }
    }

    let snapshot = session.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| format!("snapshot serialization failed: {}", e))?;
    println!();
    println!("  Final snapshot:");
    println!("{}", json);

    Ok(())
}

/// Drain the channel without blocking. Empty means the detector gave us
/// nothing this frame; the frame still runs on the baseline command.
fn next_observations(rx: &Receiver<ObservationFrame>) -> ObservationFrame {
    rx.try_recv().unwrap_or_default()
}

fn report(frame: u32, cmd: &ControlCommand, session: &GameSession) {
    let p = session.player();
    let pose = if p.jumping {
        "jump"
    } else if p.ducking {
        "duck"
    } else {
        "run"
    };
    println!(
        "  [frame {:>5}] speed={:?} pose={} score={} health={} obstacles={} collectibles={}",
        frame,
        cmd.speed,
        pose,
        session.score(),
        p.health,
        session.obstacles().len(),
        session.collectibles().len(),
    );
}

// ════════════════════════════════════════════════════════════════════════════
// Demo script
// ════════════════════════════════════════════════════════════════════════════

/// A canned play-through: mostly no hands, with bursts of an open left
/// hand (jump), a left fist (duck), and both right-hand poses (speed
/// changes).
fn demo_script(frames: usize) -> Vec<ObservationFrame> {
    (0..frames)
        .map(|i| match i % 240 {
            30..=32   => vec![pose(Handedness::Left, 0)],          // jump
            90..=130  => vec![pose(Handedness::Left, 4)],          // duck hold
            150..=180 => vec![pose(Handedness::Right, 0)],         // fast
            200..=220 => vec![pose(Handedness::Right, 4)],         // slow
            _ => vec![],
        })
        .collect()
}

/// Synthetic 21-landmark hand with `folded` of the four checked fingers
/// curled.
fn pose(handedness: Handedness, folded: usize) -> HandObservation {
    let mut points = vec![Landmark { x: 0.5, y: 0.5 }; LANDMARK_COUNT];
    for (i, (&tip, &pip)) in FINGERTIPS.iter().zip(PIP_JOINTS.iter()).enumerate() {
        points[pip] = Landmark { x: 0.5, y: 0.5 };
        points[tip] = Landmark {
            x: 0.5,
            y: if i < folded { 0.7 } else { 0.3 },
        };
    }
    HandObservation::new(handedness, points).expect("synthetic hand has 21 points")
}
