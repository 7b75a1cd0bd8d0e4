//! HP Fold - Monte Carlo folding of HP lattice proteins in Rust
//!
//! This crate folds a chain of hydrophobic (H) and polar (P) monomers on the
//! 2D square lattice with a Metropolis Monte Carlo search over pivot moves,
//! optionally under linear simulated annealing.

pub mod error;
pub mod sequence;
pub mod lattice;
pub mod moves;
pub mod energy;
pub mod sampling;
pub mod io;

// Re-export commonly used types at crate root
pub use error::FoldingError;
pub use sequence::{HpSequence, Residue};
pub use lattice::{Conformation, Defect, Site, Symmetry};
pub use moves::{Move, MoveGenerator, Proposal};
pub use energy::{compactness, contact_count, hp_energy};
pub use sampling::{
    BestState, FoldingParams, FoldingSimulation, FoldingSummary, SimulationState,
    TemperatureSchedule, TrajectoryFrame,
};
pub use io::{FoldingConfig, StructureReport, write_structures, write_trajectory};
