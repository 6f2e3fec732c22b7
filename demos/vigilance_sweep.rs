//! Vigilance Sweep: how learned categories absorb new sequences.
//!
//! Four categories are learned (A:One, B:Two, C:Three, D:Four). Two incoming
//! sequences are then reconciled against them at vigilance 3 and 4:
//!
//! 1. `One Four Four Two`: every observation is within reach, so every
//!    position merges.
//! 2. `One Three Four One`: D jumps from Four to One. At vigilance 3 that is
//!    far enough to spawn `NewCat3`; at vigilance 4 it merges instead.
//!
//! For each run the three views are read out of the memory and the final
//! activation of every trace is printed.
//!
//! Run: RUST_LOG=resonance=debug cargo run --example vigilance_sweep --release

use resonance::figure::{FINAL_MAPPING, ORIGINAL_MAPPING, TRAINED_SEQUENCE};
use resonance::{Panel, Resonance, ResonanceConfig, Verdict};
use tracing_subscriber::EnvFilter;

const POSITIONS: [&str; 4] = ["A", "B", "C", "D"];
const VALUES: [&str; 4] = ["One", "Two", "Three", "Four"];

const SEQUENCES: [[&str; 4]; 2] = [
    ["One", "Four", "Four", "Two"],
    ["One", "Three", "Four", "One"],
];

// =============================================================================
// Helpers
// =============================================================================

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(70));
    println!("  {}", title);
    println!("{}", "=".repeat(70));
}

fn print_panel(panel: &Panel) {
    println!();
    println!("  --- {} ---", panel.title);
    for trace in &panel.series {
        println!(
            "    {:<28}  peak {:>6.3}  final {:>6.3}",
            trace.label,
            trace.peak(),
            trace.last()
        );
    }
}

fn main() -> resonance::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for vigilance in [3.0, 4.0] {
        let resonance = Resonance::new(ResonanceConfig {
            seed: 42,
            ..ResonanceConfig::default().with_vigilance(vigilance)
        })?;
        let baseline = resonance.create(&POSITIONS, &VALUES)?;

        for incoming in &SEQUENCES {
            print_header(&format!(
                "vigilance {}  |  incoming {}",
                vigilance,
                incoming.join(" ")
            ));

            let run = resonance.run(&baseline, incoming)?;

            println!();
            for decision in &run.result.decisions {
                println!(
                    "    {}  distance {}  {}",
                    decision.position,
                    decision.distance,
                    match decision.verdict {
                        Verdict::Merged => "merged",
                        Verdict::Novel => "NOVEL",
                    }
                );
            }

            for title in [ORIGINAL_MAPPING, TRAINED_SEQUENCE, FINAL_MAPPING] {
                if let Some(panel) = run.figure.panel_titled(title) {
                    print_panel(panel);
                }
            }

            let json = run.figure.to_json()?;
            println!();
            println!("  Figure JSON: {} bytes, {} panels", json.len(), run.figure.panels.len());
        }

        let memory = resonance.memory_for(&baseline)?;
        println!();
        println!("  --- Recall (cue each position) ---");
        for position in POSITIONS {
            if let Some((value, sim)) = memory.recall(position, resonance.vocabulary())? {
                println!("    {} → {:<6} ({:.3})", position, value, sim);
            }
        }
    }

    print_header("Summary");
    println!("  Raising vigilance from 3 to 4 absorbs the D:Four → One jump");
    println!("  instead of spawning a new category for it.");
    println!();
    Ok(())
}
