//! Fold the 20-mer benchmark sequence at constant temperature
//!
//! Run with: cargo run --release --example fold_hp20

use hp_fold::{FoldingParams, FoldingSimulation};

fn main() {
    let params = FoldingParams::new("HPHPPHHPHPPHPHHPPHPH", 20_000, 0.5, false).with_seed(42);
    let mut sim = match FoldingSimulation::new(params) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if let Err(e) = sim.run() {
        eprintln!("run aborted: {}", e);
    }

    let best = sim.best_energy();
    println!("Steps completed:  {}", sim.trajectory().len());
    println!("Final energy:     {:.1}", sim.energy());
    println!("Minimum energy:   {:.1} (step {:?})", best.value, best.step);
    println!("Acceptance rate:  {:.2}%", 100.0 * sim.acceptance_rate());
    println!();
    println!("Minimum-energy structure:");
    for (residue, site) in sim.sequence().residues().iter().zip(best.conformation.sites()) {
        println!("  {} {:>4} {:>4}", residue.symbol(), site.x, site.y);
    }
}
