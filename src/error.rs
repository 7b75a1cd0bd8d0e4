//! Error type shared by the whole crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoldingError {
    /// Rejected input: bad sequence, bad starting structure or bad parameters.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Monomer index {index} out of range for a chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No valid move found at step {step} after {attempts} attempts")]
    NoValidMove { step: usize, attempts: usize },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Malformed YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}

impl FoldingError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        FoldingError::Configuration(message.into())
    }
}
