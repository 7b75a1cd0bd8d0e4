//! HP lattice folding command-line interface
//!
//! Reads a YAML configuration, runs the Monte Carlo folding and writes the
//! trajectory table and structure report to the output directory.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use hp_fold::{write_structures, write_trajectory, FoldingConfig, FoldingSimulation};

#[derive(Parser, Debug)]
#[command(name = "hp-fold")]
#[command(
    version,
    about = "Metropolis Monte Carlo folding of HP lattice proteins",
    long_about = None
)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yml")]
    config: String,

    /// Output directory (overrides config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed (overrides config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of folding steps (overrides config file)
    #[arg(long)]
    steps: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    setup_logging(args.verbose);

    info!("Reading configuration from: {}", args.config);
    let mut config = FoldingConfig::from_file(&args.config)
        .wrap_err_with(|| format!("Unable to load configuration file: {}", args.config))?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(steps) = args.steps {
        config.simulation.folding_steps = steps;
    }
    let output_dir = args.output.clone().unwrap_or_else(|| config.output.directory.clone());

    let params = config.to_params().wrap_err("Invalid simulation parameters")?;
    let mut simulation =
        FoldingSimulation::new(params).wrap_err("Failed to set up the simulation")?;

    println!("HP Model Folding Simulation");
    println!("----------------------------------------");
    println!("Sequence:         {}", simulation.sequence());
    println!("Sequence length:  {}", simulation.sequence().len());
    println!("Hydrophobic:      {}", simulation.sequence().hydrophobic_count());
    println!(
        "Structure:        {}",
        if config.structure_options.use_structure { "User supplied" } else { "Linear" }
    );
    println!("Folding steps:    {}", simulation.folding_steps());
    println!("Annealing:        {}", simulation.schedule().is_annealing());
    println!("Temperature:      {}", simulation.schedule().initial());
    println!("Seed:             {}", simulation.seed());

    // reports are written for aborted runs too
    let outcome = simulation.run();

    fs::create_dir_all(&output_dir)
        .wrap_err_with(|| format!("Unable to create output directory: {}", output_dir.display()))?;
    if config.output.trajectory {
        let path = output_dir.join("trajectory.dat");
        write_trajectory(&path, simulation.trajectory())
            .wrap_err_with(|| format!("Unable to write {}", path.display()))?;
        info!("Trajectory written to {}", path.display());
    }
    let path = output_dir.join("structures.yml");
    write_structures(&path, &simulation)
        .wrap_err_with(|| format!("Unable to write {}", path.display()))?;
    info!("Structures written to {}", path.display());

    outcome.wrap_err("Folding run aborted")?;

    let summary = simulation.summary();
    println!();
    println!("Results");
    println!("----------------------------------------");
    println!("Steps completed:      {}", summary.steps_completed);
    println!("Initial energy:       {:.1}", summary.initial_energy);
    println!("Final energy:         {:.1}", summary.final_energy);
    println!("Minimum energy:       {:.1}", summary.min_energy);
    println!("Maximum compactness:  {:.4}", summary.max_compactness);
    println!("Mean energy:          {:.4} ± {:.4}", summary.mean_energy, summary.energy_error);
    println!("Autocorrelation time: {:.2} steps", summary.autocorrelation_time);
    println!("Acceptance rate:      {:.2}%", 100.0 * summary.acceptance_rate);

    Ok(())
}
