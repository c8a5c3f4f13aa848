use env_core::{ConfigError, Dims};

pub fn nonzero(param: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value == 0.0 {
        Err(ConfigError::ZeroDivisor { param })
    } else if !value.is_finite() {
        Err(ConfigError::InvalidScale { param, value })
    } else {
        Ok(value)
    }
}

pub fn positive(param: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = nonzero(param, value)?;
    if value < 0.0 {
        Err(ConfigError::InvalidScale { param, value })
    } else {
        Ok(value)
    }
}

pub fn scale(param: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale { param, value })
    }
}

/// A scale used as the half-width of a uniform range `[-value, value]`.
pub fn half_width(param: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = scale(param, value)?;
    // the sampler divides the full width by a number just below 1
    if value <= f64::MAX / 4.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale { param, value })
    }
}

pub fn probability(param: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidProbability { param, value })
    }
}

pub fn at_least(param: &'static str, value: f64, min: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= min {
        Ok(value)
    } else {
        Err(ConfigError::BelowMinimum { param, value, min })
    }
}

pub fn observation_index(param: &'static str, index: usize, dims: Dims) -> Result<(), ConfigError> {
    if index < dims.observation {
        Ok(())
    } else {
        Err(ConfigError::IndexOutOfRange {
            param,
            index,
            len: dims.observation,
        })
    }
}
