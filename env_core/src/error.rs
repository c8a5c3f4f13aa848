use thiserror::Error;

/// Invalid construction parameters. Raised before any step is taken.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{param} must be non-zero")]
    ZeroDivisor { param: &'static str },
    #[error("{param} = {index} is out of range for an observation of length {len}")]
    IndexOutOfRange {
        param: &'static str,
        index: usize,
        len: usize,
    },
    #[error("{param} = {value} is not a probability in [0, 1]")]
    InvalidProbability { param: &'static str, value: f64 },
    #[error("{param} = {value} must be finite and non-negative")]
    InvalidScale { param: &'static str, value: f64 },
    #[error("{param} = {value} must be finite and at least {min}")]
    BelowMinimum {
        param: &'static str,
        value: f64,
        min: f64,
    },
    #[error("{param} must be at least 1")]
    InvalidCount { param: &'static str },
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("base environment failed: {0}")]
    Base(#[source] Box<dyn std::error::Error + Send + Sync>),
}
