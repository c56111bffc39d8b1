use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    // OBP is undefined for an empty season; refuse to divide by zero.
    #[error("season contains no plate appearance records")]
    EmptySeason,

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("trial count must be positive, got {trials}")]
    InvalidTrialCount { trials: usize },
}
