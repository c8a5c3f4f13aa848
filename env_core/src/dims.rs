use super::EnvError;
use serde::{Deserialize, Serialize};

/// Observation and action lengths an environment commits to at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dims {
    pub observation: usize,
    pub action: usize,
}

impl Dims {
    pub fn new(observation: usize, action: usize) -> Self {
        Self {
            observation,
            action,
        }
    }
    pub fn check_observation(&self, observation: &[f64]) -> Result<(), EnvError> {
        check_len("observation", self.observation, observation.len())
    }
    pub fn check_action(&self, action: &[f64]) -> Result<(), EnvError> {
        check_len("action", self.action, action.len())
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), EnvError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EnvError::ShapeMismatch {
            what,
            expected,
            actual,
        })
    }
}
