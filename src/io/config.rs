//! YAML configuration of a folding run.
//!
//! ```yaml
//! sequence: HPHPPHHPHPPHPHHPPHPH
//! structure_options:
//!   use_structure: false
//!   coordinates: [[0, 0], [1, 0]]
//! simulation:
//!   folding_steps: 10000
//!   temperature: 2.0
//!   annealing: true
//! output:
//!   directory: results
//! seed: 42
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FoldingError;
use crate::moves::DEFAULT_MAX_ATTEMPTS;
use crate::sampling::{FoldingParams, DEFAULT_MIN_TEMPERATURE};
use crate::sequence::HpSequence;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldingConfig {
    /// H/P string or a sequence of the 20 standard amino acids.
    pub sequence: String,

    #[serde(default)]
    pub structure_options: StructureOptions,

    pub simulation: SimulationOptions,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureOptions {
    #[serde(default)]
    pub use_structure: bool,

    #[serde(default)]
    pub coordinates: Option<Vec<[i32; 2]>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOptions {
    pub folding_steps: usize,

    pub temperature: f64,

    #[serde(default)]
    pub annealing: bool,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    #[serde(default = "default_min_temperature")]
    pub min_temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputOptions {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// Write the per-step table next to the structure report.
    #[serde(default = "default_true")]
    pub trajectory: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            trajectory: true,
        }
    }
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_min_temperature() -> f64 {
    DEFAULT_MIN_TEMPERATURE
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("results")
}

fn default_true() -> bool {
    true
}

impl FoldingConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FoldingError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, FoldingError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reduce the sequence to H/P and select the starting structure.
    pub fn to_params(&self) -> Result<FoldingParams, FoldingError> {
        let sequence = HpSequence::parse_or_reduce(self.sequence.trim())?;
        let sim = &self.simulation;
        let mut params = FoldingParams::new(
            sequence.to_string(),
            sim.folding_steps,
            sim.temperature,
            sim.annealing,
        )
        .with_max_attempts(sim.max_attempts)
        .with_min_temperature(sim.min_temperature);

        if self.structure_options.use_structure {
            let coordinates = self.structure_options.coordinates.clone().ok_or_else(|| {
                FoldingError::config("use_structure is set but no coordinates were given")
            })?;
            params = params.with_initial_structure(coordinates);
        }
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL: &str = "
sequence: HPPH
structure_options:
  use_structure: true
  coordinates: [[0, 0], [1, 0], [1, 1], [0, 1]]
simulation:
  folding_steps: 500
  temperature: 2.5
  annealing: true
  max_attempts: 50
  min_temperature: 0.01
output:
  directory: out
  trajectory: false
seed: 42
";

    #[test]
    fn test_full_config() {
        let config = FoldingConfig::from_yaml_str(FULL).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert!(!config.output.trajectory);

        let params = config.to_params().unwrap();
        assert_eq!(params.sequence, "HPPH");
        assert_eq!(params.folding_steps, 500);
        assert_eq!(params.temperature, 2.5);
        assert!(params.annealing);
        assert_eq!(params.max_attempts, 50);
        assert_eq!(params.min_temperature, 0.01);
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.initial_structure, Some(vec![[0, 0], [1, 0], [1, 1], [0, 1]]));
    }

    #[test]
    fn test_defaults_and_amino_acid_sequence() {
        let yaml = "
sequence: VFCNKASIR
simulation:
  folding_steps: 10
  temperature: 1.0
seed: null
";
        let config = FoldingConfig::from_yaml_str(yaml).unwrap();
        let params = config.to_params().unwrap();
        assert_eq!(params.sequence, "HHHPPHPHP");
        assert!(!params.annealing);
        assert_eq!(params.seed, None);
        assert_eq!(params.initial_structure, None);
        assert_eq!(params.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.output.directory, PathBuf::from("results"));
        assert!(config.output.trajectory);
    }

    #[test]
    fn test_coordinates_ignored_without_flag() {
        let yaml = "
sequence: HPH
structure_options:
  use_structure: false
  coordinates: [[0, 0], [0, 0], [0, 0]]
simulation:
  folding_steps: 10
  temperature: 1.0
";
        let params = FoldingConfig::from_yaml_str(yaml).unwrap().to_params().unwrap();
        assert_eq!(params.initial_structure, None);
    }

    #[test]
    fn test_missing_coordinates() {
        let yaml = "
sequence: HPH
structure_options:
  use_structure: true
simulation:
  folding_steps: 10
  temperature: 1.0
";
        let config = FoldingConfig::from_yaml_str(yaml).unwrap();
        assert!(matches!(config.to_params(), Err(FoldingError::Configuration(_))));
    }

    #[test]
    fn test_unknown_amino_acid() {
        let yaml = "
sequence: ASDHLKGFDKJHDCVNB
simulation:
  folding_steps: 10
  temperature: 1.0
";
        let config = FoldingConfig::from_yaml_str(yaml).unwrap();
        assert!(matches!(config.to_params(), Err(FoldingError::Configuration(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = FoldingConfig::from_yaml_str("sequence: [HP\nsimulation: 3");
        assert!(matches!(result, Err(FoldingError::Yaml { .. })));
        let result = FoldingConfig::from_yaml_str("sequence: HPH\n");
        assert!(matches!(result, Err(FoldingError::Yaml { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();
        let config = FoldingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sequence, "HPPH");

        let missing = FoldingConfig::from_file("/nonexistent/hp_fold/config.yml");
        assert!(matches!(missing, Err(FoldingError::Io { .. })));
    }
}
