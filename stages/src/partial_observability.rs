use super::Stage;
use env_core::{ConfigError, EnvError, Info, Transition};
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialObservabilityConfig {
    pub observable_ratio: f64,
}

impl Default for PartialObservabilityConfig {
    fn default() -> Self {
        Self {
            observable_ratio: 0.5,
        }
    }
}

/// Hides each observation component independently with probability
/// `1 - observable_ratio`, replacing it with 0.
pub struct PartialObservability<R = StdRng> {
    observed: Bernoulli,
    rng: R,
}

impl<R: Rng> PartialObservability<R> {
    pub fn new(config: PartialObservabilityConfig, rng: R) -> Result<Self, ConfigError> {
        let observed =
            Bernoulli::new(config.observable_ratio).map_err(|_| ConfigError::InvalidProbability {
                param: "observable_ratio",
                value: config.observable_ratio,
            })?;
        Ok(Self { observed, rng })
    }
    fn observation(&mut self, observation: Vec<f64>) -> Vec<f64> {
        observation
            .into_iter()
            .map(|x| if self.observed.sample(&mut self.rng) { x } else { 0.0 })
            .collect()
    }
}

impl<R: Rng + 'static> Stage for PartialObservability<R> {
    fn name(&self) -> &'static str {
        "partial_observability"
    }
    fn transform_reset(
        &mut self,
        observation: Vec<f64>,
        info: Info,
    ) -> Result<(Vec<f64>, Info), EnvError> {
        Ok((self.observation(observation), info))
    }
    fn transform_step(&mut self, mut transition: Transition) -> Result<Transition, EnvError> {
        transition.observation = self.observation(transition.observation);
        Ok(transition)
    }
}
