//! Metropolis Monte Carlo folding of an HP chain.
//!
//! Every step proposes a valid pivot move, scores it with the HP energy and
//! accepts or rejects it by the Metropolis criterion at the temperature of
//! the schedule. Each step is recorded in the trajectory, accepted or not.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::metropolis::metropolis_accept;
use super::schedule::{TemperatureSchedule, DEFAULT_MIN_TEMPERATURE};
use super::statistics;
use crate::energy::{compactness, hp_energy};
use crate::error::FoldingError;
use crate::lattice::Conformation;
use crate::moves::{MoveGenerator, DEFAULT_MAX_ATTEMPTS};
use crate::sequence::HpSequence;

/// Parameters of a folding run.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldingParams {
    /// H/P string, at least three monomers long.
    pub sequence: String,
    pub folding_steps: usize,
    /// Initial temperature (k_B = 1).
    pub temperature: f64,
    pub annealing: bool,
    /// Starting structure; the straight chain along x when `None`.
    pub initial_structure: Option<Vec<[i32; 2]>>,
    /// `None` draws a fresh seed, so the run is not reproducible unless the
    /// seed reported by [`FoldingSimulation::seed`] is fed back in.
    pub seed: Option<u64>,
    /// Bound on proposals per step before the run fails.
    pub max_attempts: usize,
    /// Temperature floor of linear annealing.
    pub min_temperature: f64,
}

impl FoldingParams {
    pub fn new(
        sequence: impl Into<String>,
        folding_steps: usize,
        temperature: f64,
        annealing: bool,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            folding_steps,
            temperature,
            annealing,
            initial_structure: None,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_structure(mut self, structure: Vec<[i32; 2]>) -> Self {
        self.initial_structure = Some(structure);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_min_temperature(mut self, min_temperature: f64) -> Self {
        self.min_temperature = min_temperature;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Ready,
    Stepping,
    Done,
}

/// One completed step.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryFrame {
    pub step: usize,
    /// Energy of the current conformation after the step.
    pub energy: f64,
    pub compactness: f64,
    pub temperature: f64,
    /// Energy of the proposed candidate, accepted or not.
    pub candidate_energy: f64,
    pub accepted: bool,
    /// Current conformation after the step. Rejected steps share the
    /// previous frame's conformation.
    pub conformation: Arc<Conformation>,
}

/// Running extremum over every valid candidate seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BestState {
    /// Step that produced it; `None` for the starting conformation.
    pub step: Option<usize>,
    pub value: f64,
    pub conformation: Conformation,
}

impl BestState {
    fn initial(value: f64, conformation: &Conformation) -> Self {
        Self { step: None, value, conformation: conformation.clone() }
    }

    // strict comparisons: ties keep the earliest occurrence
    fn offer_lower(&mut self, step: usize, value: f64, conformation: &Conformation) {
        if value < self.value {
            *self = Self { step: Some(step), value, conformation: conformation.clone() };
        }
    }

    fn offer_higher(&mut self, step: usize, value: f64, conformation: &Conformation) {
        if value > self.value {
            *self = Self { step: Some(step), value, conformation: conformation.clone() };
        }
    }
}

/// Scalar results of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldingSummary {
    pub steps_completed: usize,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub min_energy: f64,
    pub max_compactness: f64,
    pub mean_energy: f64,
    pub energy_error: f64,
    pub autocorrelation_time: f64,
    pub acceptance_rate: f64,
}

pub struct FoldingSimulation {
    sequence: HpSequence,
    folding_steps: usize,
    schedule: TemperatureSchedule,
    generator: MoveGenerator,
    seed: u64,
    rng: StdRng,
    state: SimulationState,
    initial: Arc<Conformation>,
    initial_energy: f64,
    current: Arc<Conformation>,
    current_energy: f64,
    current_compactness: f64,
    temperature: f64,
    trajectory: Vec<TrajectoryFrame>,
    best_energy: BestState,
    best_compactness: BestState,
    accepted_count: usize,
}

impl FoldingSimulation {
    pub fn new(params: FoldingParams) -> Result<Self, FoldingError> {
        let sequence: HpSequence = params.sequence.parse()?;
        if sequence.len() < 3 {
            return Err(FoldingError::config(format!(
                "sequence must have at least 3 monomers, got {}",
                sequence.len()
            )));
        }
        if params.folding_steps == 0 {
            return Err(FoldingError::config("folding_steps must be positive"));
        }
        if !(params.temperature > 0.0 && params.temperature.is_finite()) {
            return Err(FoldingError::config(format!(
                "temperature must be positive and finite, got {}",
                params.temperature
            )));
        }
        let floor_ok = params.min_temperature > 0.0 && params.min_temperature.is_finite();
        if params.annealing && !floor_ok {
            return Err(FoldingError::config(format!(
                "min_temperature must be positive and finite, got {}",
                params.min_temperature
            )));
        }
        if params.max_attempts == 0 {
            return Err(FoldingError::config("max_attempts must be positive"));
        }

        let initial = match &params.initial_structure {
            Some(pairs) => {
                if pairs.len() != sequence.len() {
                    return Err(FoldingError::config(format!(
                        "initial structure has {} sites but the sequence has {} monomers",
                        pairs.len(),
                        sequence.len()
                    )));
                }
                let conformation = Conformation::from_pairs(pairs);
                conformation.validate().map_err(|defect| {
                    FoldingError::config(format!(
                        "initial structure is not a self-avoiding walk: {}",
                        defect
                    ))
                })?;
                conformation
            }
            None => Conformation::linear(sequence.len()),
        };

        let seed = match params.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                warn!(
                    seed,
                    "no seed given; drew one from entropy, the run is not reproducible without it"
                );
                seed
            }
        };

        let schedule = TemperatureSchedule::new(
            params.temperature,
            params.annealing,
            params.min_temperature,
            params.folding_steps,
        );
        let initial_energy = hp_energy(&sequence, &initial);
        let initial_compactness = compactness(&initial);
        let initial = Arc::new(initial);

        Ok(Self {
            folding_steps: params.folding_steps,
            generator: MoveGenerator::new(params.max_attempts),
            seed,
            rng: StdRng::seed_from_u64(seed),
            state: SimulationState::Ready,
            best_energy: BestState::initial(initial_energy, &initial),
            best_compactness: BestState::initial(initial_compactness, &initial),
            current: Arc::clone(&initial),
            current_energy: initial_energy,
            current_compactness: initial_compactness,
            temperature: schedule.initial(),
            initial,
            initial_energy,
            schedule,
            sequence,
            trajectory: Vec::new(),
            accepted_count: 0,
        })
    }

    /// Run every step of the schedule. Calling it again once the run has
    /// finished, or failed, does nothing.
    ///
    /// On `NoValidMove` the trajectory stops at the last completed step and
    /// stays readable.
    pub fn run(&mut self) -> Result<(), FoldingError> {
        if self.state == SimulationState::Done {
            return Ok(());
        }
        self.state = SimulationState::Stepping;
        info!(
            sequence = %self.sequence,
            steps = self.folding_steps,
            temperature = self.schedule.initial(),
            annealing = self.schedule.is_annealing(),
            seed = self.seed,
            "starting folding run"
        );

        let report_every = (self.folding_steps / 10).max(1);
        for step in 0..self.folding_steps {
            if let Err(e) = self.step(step) {
                self.state = SimulationState::Done;
                return Err(e);
            }
            if step % report_every == 0 {
                info!(
                    step,
                    energy = self.current_energy,
                    temperature = self.temperature,
                    acceptance = self.acceptance_rate(),
                    "progress"
                );
            }
        }

        self.state = SimulationState::Done;
        info!(
            final_energy = self.current_energy,
            min_energy = self.best_energy.value,
            max_compactness = self.best_compactness.value,
            acceptance = self.acceptance_rate(),
            "folding run finished"
        );
        Ok(())
    }

    fn step(&mut self, step: usize) -> Result<(), FoldingError> {
        let temperature = self.schedule.temperature_at(step);
        self.temperature = temperature;

        let proposal = self
            .generator
            .propose(&self.current, &mut self.rng)
            .ok_or(FoldingError::NoValidMove {
                step,
                attempts: self.generator.max_attempts,
            })?;
        if proposal.attempts > 1 {
            debug!(step, attempts = proposal.attempts, "retried invalid proposals");
        }

        let candidate = proposal.conformation;
        let candidate_energy = hp_energy(&self.sequence, &candidate);
        let candidate_compactness = compactness(&candidate);
        let delta = candidate_energy - self.current_energy;
        let accepted = metropolis_accept(delta, temperature, &mut self.rng);

        self.best_energy.offer_lower(step, candidate_energy, &candidate);
        self.best_compactness.offer_higher(step, candidate_compactness, &candidate);

        if accepted {
            self.current = Arc::new(candidate);
            self.current_energy = candidate_energy;
            self.current_compactness = candidate_compactness;
            self.accepted_count += 1;
        }

        self.trajectory.push(TrajectoryFrame {
            step,
            energy: self.current_energy,
            compactness: self.current_compactness,
            temperature,
            candidate_energy,
            accepted,
            conformation: Arc::clone(&self.current),
        });
        Ok(())
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn sequence(&self) -> &HpSequence {
        &self.sequence
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn folding_steps(&self) -> usize {
        self.folding_steps
    }

    pub fn schedule(&self) -> &TemperatureSchedule {
        &self.schedule
    }

    /// Temperature of the latest step, or the initial one before the run.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn conformation(&self) -> &Conformation {
        &self.current
    }

    pub fn energy(&self) -> f64 {
        self.current_energy
    }

    pub fn compactness(&self) -> f64 {
        self.current_compactness
    }

    pub fn initial_conformation(&self) -> &Conformation {
        &self.initial
    }

    pub fn initial_energy(&self) -> f64 {
        self.initial_energy
    }

    pub fn trajectory(&self) -> &[TrajectoryFrame] {
        &self.trajectory
    }

    pub fn energies(&self) -> Vec<f64> {
        self.trajectory.iter().map(|f| f.energy).collect()
    }

    pub fn compactnesses(&self) -> Vec<f64> {
        self.trajectory.iter().map(|f| f.compactness).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.trajectory.iter().map(|f| f.temperature).collect()
    }

    pub fn best_energy(&self) -> &BestState {
        &self.best_energy
    }

    pub fn best_compactness(&self) -> &BestState {
        &self.best_compactness
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.trajectory.is_empty() {
            0.0
        } else {
            self.accepted_count as f64 / self.trajectory.len() as f64
        }
    }

    pub fn summary(&self) -> FoldingSummary {
        let energies = self.energies();
        let autocorrelation_time = statistics::autocorrelation_time(&energies);
        FoldingSummary {
            steps_completed: self.trajectory.len(),
            initial_energy: self.initial_energy,
            final_energy: self.current_energy,
            min_energy: self.best_energy.value,
            max_compactness: self.best_compactness.value,
            mean_energy: statistics::mean(&energies),
            energy_error: statistics::blocking_error(&energies, autocorrelation_time),
            autocorrelation_time,
            acceptance_rate: self.acceptance_rate(),
        }
    }
}
