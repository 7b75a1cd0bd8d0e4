/// Lowest temperature reached by linear annealing unless configured otherwise.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 0.002;

/// Temperature as a function of the step index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureSchedule {
    Constant(f64),
    /// T(s) = max(initial * (1 - s / steps), floor), with floor <= initial
    Linear { initial: f64, floor: f64, steps: usize },
}

impl TemperatureSchedule {
    /// A `floor` above `initial` is lowered to `initial`: annealing never heats.
    pub fn new(initial: f64, annealing: bool, floor: f64, steps: usize) -> Self {
        if annealing {
            TemperatureSchedule::Linear { initial, floor: floor.min(initial), steps }
        } else {
            TemperatureSchedule::Constant(initial)
        }
    }

    pub fn initial(&self) -> f64 {
        match *self {
            TemperatureSchedule::Constant(t) => t,
            TemperatureSchedule::Linear { initial, .. } => initial,
        }
    }

    pub fn temperature_at(&self, step: usize) -> f64 {
        match *self {
            TemperatureSchedule::Constant(t) => t,
            TemperatureSchedule::Linear { initial, floor, steps } => {
                let fraction = step as f64 / steps.max(1) as f64;
                (initial * (1.0 - fraction)).max(floor)
            }
        }
    }

    pub fn is_annealing(&self) -> bool {
        matches!(self, TemperatureSchedule::Linear { .. })
    }
}
