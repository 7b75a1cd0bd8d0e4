//! Compare constant temperature runs with annealed runs
//!
//! Run with: cargo run --release --example annealing_sweep
//!
//! Each run owns its own generator, seeded from its index so the sweep is
//! reproducible.

use hp_fold::{FoldingParams, FoldingSimulation};

const SEQUENCE: &str = "HHPPHPPHPPHPPHPPHPPHPPHH";

fn main() {
    let steps = 20_000;
    let temperatures = [0.3, 0.6, 1.0, 2.0];

    println!(
        "{:>6} {:>10} {:>12} {:>12} {:>12}",
        "T0", "annealing", "min energy", "final", "acceptance"
    );
    for (i, &t) in temperatures.iter().enumerate() {
        for annealing in [false, true] {
            let seed = 1000 + 2 * i as u64 + annealing as u64;
            let params = FoldingParams::new(SEQUENCE, steps, t, annealing).with_seed(seed);
            let mut sim = match FoldingSimulation::new(params) {
                Ok(sim) => sim,
                Err(e) => {
                    eprintln!("{}", e);
                    return;
                }
            };
            if let Err(e) = sim.run() {
                eprintln!("T0={} annealing={}: {}", t, annealing, e);
                continue;
            }
            let summary = sim.summary();
            println!(
                "{:>6.2} {:>10} {:>12.1} {:>12.1} {:>11.2}%",
                t,
                annealing,
                summary.min_energy,
                summary.final_energy,
                100.0 * summary.acceptance_rate
            );
        }
    }
}
