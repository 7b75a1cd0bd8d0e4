//! IO module - configuration files and run reports.

mod config;
mod report;

pub use config::{FoldingConfig, OutputOptions, SimulationOptions, StructureOptions};
pub use report::{write_structures, write_trajectory, StructureEntry, StructureReport};
