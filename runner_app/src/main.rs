//! runner_app — headless demo driver for the gesture runner.
//!
//! Replays a scripted sequence of hand observations through the full
//! pipeline (classifier → mapper → session step) and prints the session
//! as it unfolds. Stands in for the camera/renderer shell, which is out
//! of scope here.

mod driver;

use runner_core::SessionConfig;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Gesture Runner — scripted simulation driver           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().collect();

    let cfg = if args.iter().any(|a| a == "--jump-only") {
        println!("  Variant: jump-only, single hit");
        SessionConfig::jump_only()
    } else {
        println!("  Variant: duck + health");
        SessionConfig::default()
    };

    let seed = flag_value(&args, "--seed").unwrap_or(42);
    let frames = flag_value(&args, "--frames").unwrap_or(1800);
    println!("  Seed: {}   Max frames: {}", seed, frames);
    println!();

    if let Err(e) = driver::run(cfg, seed, frames as u32) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `--flag N` → Some(N); missing or unparsable → None.
fn flag_value(args: &[String], flag: &str) -> Option<u64> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}
