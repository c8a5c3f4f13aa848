use super::validate;
use super::Stage;
use env_core::{ConfigError, EnvError, Info, Transition};
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoisyObservationConfig {
    pub noise_scale: f64,
}

impl Default for NoisyObservationConfig {
    fn default() -> Self {
        Self { noise_scale: 0.05 }
    }
}

/// Adds independent zero-mean Gaussian noise to every observation
/// component, on reset as well as on step. No clipping.
pub struct NoisyObservation<R = StdRng> {
    noise: Normal<f64>,
    rng: R,
}

impl<R: Rng> NoisyObservation<R> {
    pub fn new(config: NoisyObservationConfig, rng: R) -> Result<Self, ConfigError> {
        let noise_scale = validate::scale("noise_scale", config.noise_scale)?;
        let noise = Normal::new(0.0, noise_scale).map_err(|_| ConfigError::InvalidScale {
            param: "noise_scale",
            value: noise_scale,
        })?;
        Ok(Self { noise, rng })
    }
    fn observation(&mut self, observation: Vec<f64>) -> Vec<f64> {
        observation
            .into_iter()
            .map(|x| x + self.noise.sample(&mut self.rng))
            .collect()
    }
}

impl<R: Rng + 'static> Stage for NoisyObservation<R> {
    fn name(&self) -> &'static str {
        "noisy_observation"
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
