use super::Stage;
use env_core::{ConfigError, EnvError};
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionMaskingConfig {
    pub mask_prob: f64,
}

impl Default for ActionMaskingConfig {
    fn default() -> Self {
        Self { mask_prob: 0.1 }
    }
}

/// With probability `mask_prob` per step, replaces the whole action with
/// zeros before it reaches the inner environment.
pub struct ActionMasking<R = StdRng> {
    masked: Bernoulli,
    rng: R,
}

impl<R: Rng> ActionMasking<R> {
    pub fn new(config: ActionMaskingConfig, rng: R) -> Result<Self, ConfigError> {
        let masked = Bernoulli::new(config.mask_prob).map_err(|_| {
            ConfigError::InvalidProbability {
                param: "mask_prob",
                value: config.mask_prob,
            }
        })?;
        Ok(Self { masked, rng })
    }
}

impl<R: Rng + 'static> Stage for ActionMasking<R> {
    fn name(&self) -> &'static str {
        "action_masking"
    }
    fn transform_action(&mut self, action: Vec<f64>) -> Result<Vec<f64>, EnvError> {
        if self.masked.sample(&mut self.rng) {
            Ok(vec![0.0; action.len()])
        } else {
            Ok(action)
        }
    }
}
