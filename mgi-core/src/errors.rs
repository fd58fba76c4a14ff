use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MGIError {
    /// Empty series, mismatched lengths or non-finite samples
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Out of range or unrecognised model parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{quantity} is outside its numeric domain at step {step} (value={value})")]
    NumericDomainError {
        step: usize,
        quantity: String,
        value: f64,
    },
    #[error("Could not read configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MGIError {
    fn from(err: toml::de::Error) -> Self {
        MGIError::Config(err.to_string())
    }
}

/// Convenience type for `Result<T, MGIError>`.
pub type MGIResult<T> = Result<T, MGIError>;
