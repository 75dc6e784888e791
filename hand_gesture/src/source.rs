//! Observation delivery — live hardware or scripted replay.
//!
//! The public interface is a frame's worth of [`HandObservation`]s
//! delivered over an `mpsc` channel. Consumers drain the channel once
//! per simulation frame; an empty channel means the detector had nothing
//! this frame and the frame proceeds on the baseline command.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::landmark::HandObservation;

/// One frame of detector output: zero, one, or two hands.
pub type ObservationFrame = Vec<HandObservation>;

// ════════════════════════════════════════════════════════════════════════════
// ObservationSource trait — unified interface for hw and replay
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`ObservationFrame`]s over a channel.
///
/// A live camera + hand-pose detector implements this behind the same
/// seam as the scripted replay below; the simulation never knows the
/// difference.
pub trait ObservationSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<ObservationFrame>);
}

/// Spawn an observation source on its own thread and return the
/// receiving end.
pub fn spawn_observation_source<S: ObservationSource>(source: S) -> Receiver<ObservationFrame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// ScriptedSource — pre-recorded frames (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Replays a fixed sequence of observation frames at a fixed interval,
/// then hangs up. Used by the demo driver and in tests; the gap left by
/// the hang-up exercises the detector-unavailable path.
pub struct ScriptedSource {
    pub frames:   Vec<ObservationFrame>,
    /// Delay between frames; zero replays as fast as the channel drains.
    pub interval: Duration,
}

impl ObservationSource for ScriptedSource {
    fn run(self: Box<Self>, tx: Sender<ObservationFrame>) {
        for frame in self.frames {
            if tx.send(frame).is_err() {
                return;
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Handedness, Landmark, LANDMARK_COUNT};

    fn flat_hand(handedness: Handedness) -> HandObservation {
        let points = vec![Landmark { x: 0.5, y: 0.5 }; LANDMARK_COUNT];
        HandObservation::new(handedness, points).unwrap()
    }

    #[test]
    fn scripted_source_replays_all_frames_in_order() {
        let script = vec![
            vec![],
            vec![flat_hand(Handedness::Left)],
            vec![flat_hand(Handedness::Left), flat_hand(Handedness::Right)],
        ];
        let rx = spawn_observation_source(ScriptedSource {
            frames:   script.clone(),
            interval: Duration::ZERO,
        });

        let received: Vec<ObservationFrame> = rx.iter().collect();
        assert_eq!(received, script);
    }

    #[test]
    fn channel_closes_after_script_ends() {
        let rx = spawn_observation_source(ScriptedSource {
            frames:   vec![vec![]],
            interval: Duration::ZERO,
        });
        assert!(rx.recv().is_ok());
        assert!(rx.recv().is_err());
    }
}
