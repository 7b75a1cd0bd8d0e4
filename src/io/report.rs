//! Data files written after a run, for plotting and inspection.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::energy::{compactness, hp_energy};
use crate::error::FoldingError;
use crate::lattice::Conformation;
use crate::sampling::{BestState, FoldingSimulation, FoldingSummary, TrajectoryFrame};

/// One conformation with its scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureEntry {
    /// Step that produced it; absent for the starting structure.
    pub step: Option<usize>,
    pub energy: f64,
    pub compactness: f64,
    /// Width and height of the bounding box.
    pub extent: [i32; 2],
    pub coordinates: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureReport {
    pub sequence: String,
    pub hydrophobic_count: usize,
    pub seed: u64,
    pub steps_completed: usize,
    pub acceptance_rate: f64,
    pub mean_energy: f64,
    pub energy_error: f64,
    pub initial: StructureEntry,
    #[serde(rename = "final")]
    pub final_structure: StructureEntry,
    pub min_energy: StructureEntry,
    pub max_compactness: StructureEntry,
}

impl StructureReport {
    pub fn from_simulation(sim: &FoldingSimulation) -> Self {
        let sequence = sim.sequence();
        let entry = |step: Option<usize>, conformation: &Conformation| {
            let (width, height) = conformation.bounding_box();
            StructureEntry {
                step,
                energy: hp_energy(sequence, conformation),
                compactness: compactness(conformation),
                extent: [width, height],
                coordinates: conformation.to_pairs(),
            }
        };
        let best_entry = |best: &BestState| entry(best.step, &best.conformation);
        let summary: FoldingSummary = sim.summary();

        Self {
            sequence: sequence.to_string(),
            hydrophobic_count: sequence.hydrophobic_count(),
            seed: sim.seed(),
            steps_completed: summary.steps_completed,
            acceptance_rate: summary.acceptance_rate,
            mean_energy: summary.mean_energy,
            energy_error: summary.energy_error,
            initial: entry(None, sim.initial_conformation()),
            final_structure: entry(summary.steps_completed.checked_sub(1), sim.conformation()),
            min_energy: best_entry(sim.best_energy()),
            max_compactness: best_entry(sim.best_compactness()),
        }
    }

    pub fn to_yaml(&self) -> Result<String, FoldingError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Whitespace-separated table, one row per step:
/// `step energy compactness temperature accepted`.
pub fn write_trajectory(
    path: impl AsRef<Path>,
    frames: &[TrajectoryFrame],
) -> Result<(), FoldingError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "# step energy compactness temperature accepted")?;
    for f in frames {
        writeln!(
            writer,
            "{} {} {:.6} {:.6} {}",
            f.step,
            f.energy,
            f.compactness,
            f.temperature,
            u8::from(f.accepted)
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_structures(
    path: impl AsRef<Path>,
    sim: &FoldingSimulation,
) -> Result<(), FoldingError> {
    let report = StructureReport::from_simulation(sim);
    std::fs::write(path, report.to_yaml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::FoldingParams;

    fn finished() -> FoldingSimulation {
        let params = FoldingParams::new("HPHPPHHPHPPHPHHPPHPH", 300, 1.0, true).with_seed(42);
        let mut sim = FoldingSimulation::new(params).unwrap();
        sim.run().unwrap();
        sim
    }

    #[test]
    fn test_trajectory_table() {
        let sim = finished();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.dat");
        write_trajectory(&path, sim.trajectory()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows.len(), 300);
        let first: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0], "0");
        assert_eq!(first[1].parse::<f64>().unwrap(), sim.trajectory()[0].energy);
    }

    #[test]
    fn test_structure_report_round_trip() {
        let sim = finished();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structures.yml");
        write_structures(&path, &sim).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let report: StructureReport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(report, StructureReport::from_simulation(&sim));
        assert_eq!(report.seed, 42);
        assert_eq!(report.initial.step, None);
        assert_eq!(report.initial.energy, 0.0);
        assert_eq!(report.initial.extent, [20, 1]);
        assert_eq!(report.hydrophobic_count, 10);
        assert_eq!(report.final_structure.step, Some(299));
        assert_eq!(report.min_energy.energy, sim.best_energy().value);
        assert_eq!(
            report.max_compactness.coordinates,
            sim.best_compactness().conformation.to_pairs()
        );
        assert!(text.contains("final:"));
    }
}
