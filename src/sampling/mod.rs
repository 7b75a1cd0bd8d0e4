//! Sampling module - Metropolis Monte Carlo over lattice conformations.

mod engine;
mod metropolis;
mod schedule;
pub mod statistics;

pub use engine::{
    BestState, FoldingParams, FoldingSimulation, FoldingSummary, SimulationState, TrajectoryFrame,
};
pub use metropolis::{acceptance_probability, metropolis_accept};
pub use schedule::{TemperatureSchedule, DEFAULT_MIN_TEMPERATURE};
