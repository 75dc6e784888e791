//! Interactive hand lab — poke the fist heuristic and the control mapper
//! with synthetic poses, without a camera attached.

use hand_gesture::{
    is_fist, map_observations, HandObservation, Handedness, Landmark, MapperConfig,
    LANDMARK_COUNT,
};
use hand_gesture::landmark::{FINGERTIPS, PIP_JOINTS};
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║        Hand Gesture Lab — synthetic pose tester      ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Builds a synthetic 21-landmark hand with N curled fingers");
    println!("  (index/middle/ring/pinky) and shows the classifier verdict");
    println!("  plus the control command it would produce.");
    println!();

    let cfg = MapperConfig::default();

    loop {
        let hand = match read_line("Hand (l = Left, r = Right, q = quit): ").trim() {
            "q" | "Q" => {
                println!("\nGoodbye!\n");
                break;
            }
            "l" | "L" => Handedness::Left,
            "r" | "R" => Handedness::Right,
            _ => {
                println!("  ⚠  Please enter l, r or q.\n");
                continue;
            }
        };

        let folded: usize = read_line("  Curled fingers 0–4 (default 0): ")
            .trim()
            .parse()
            .unwrap_or(0)
            .min(4);

        let obs = synthetic_hand(hand, folded);
        let verdict = if is_fist(&obs) { "FIST" } else { "OPEN" };
        let cmd = map_observations(&cfg, std::slice::from_ref(&obs));

        println!();
        println!("  ┌─ {:?} hand, {} finger(s) curled", hand, folded);
        println!("  │  Classifier : {}", verdict);
        println!(
            "  │  Command    : speed={:?}  jump={}  duck={}",
            cmd.speed, cmd.jump, cmd.duck
        );
        println!("  └─");
        println!();
    }
}

/// Synthetic pose: all landmarks at rest, with the first `folded` of the
/// four checked fingers curled (tip dropped below its PIP joint).
fn synthetic_hand(handedness: Handedness, folded: usize) -> HandObservation {
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

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
