use super::Stage;
use env_core::{ConfigError, EnvError, Info};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

const FACTOR_MIN: f64 = 1.2;
const FACTOR_MAX: f64 = 2.0;

/// How long the step counter lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterScope {
    /// Counts every step the stage ever sees; resets do not touch it.
    #[default]
    Lifetime,
    /// Restarts from 0 on every reset.
    Episode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonlinearDynamicsConfig {
    pub dynamic_change_threshold: u64,
    pub counter_scope: CounterScope,
}

impl Default for NonlinearDynamicsConfig {
    fn default() -> Self {
        Self {
            dynamic_change_threshold: 100,
            counter_scope: CounterScope::Lifetime,
        }
    }
}

/// Once more than `dynamic_change_threshold` steps have been taken, scales
/// every action by a factor drawn from U[1.2, 2.0], multiplying or dividing
/// on a fair coin flip.
pub struct NonlinearDynamics<R = StdRng> {
    config: NonlinearDynamicsConfig,
    factor: Uniform<f64>,
    step_count: u64,
    rng: R,
}

impl<R: Rng> NonlinearDynamics<R> {
    pub fn new(config: NonlinearDynamicsConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self {
            config,
            factor: Uniform::new_inclusive(FACTOR_MIN, FACTOR_MAX),
            step_count: 0,
            rng,
        })
    }
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
    pub fn is_active(&self) -> bool {
        self.step_count > self.config.dynamic_change_threshold
    }
}

impl<R: Rng + 'static> Stage for NonlinearDynamics<R> {
    fn name(&self) -> &'static str {
        "nonlinear_dynamics"
    }
    fn transform_reset(
        &mut self,
        observation: Vec<f64>,
        info: Info,
    ) -> Result<(Vec<f64>, Info), EnvError> {
        if self.config.counter_scope == CounterScope::Episode {
            self.step_count = 0;
        }
        Ok((observation, info))
    }
    fn transform_action(&mut self, action: Vec<f64>) -> Result<Vec<f64>, EnvError> {
        self.step_count += 1;
        if !self.is_active() {
            return Ok(action);
        }
        if self.step_count == self.config.dynamic_change_threshold + 1 {
            debug!(step = self.step_count, "nonlinear action dynamics engaged");
        }
        let factor = self.factor.sample(&mut self.rng);
        let action: Vec<f64> = if self.rng.gen_bool(0.5) {
            action.into_iter().map(|a| a * factor).collect()
        } else {
            action.into_iter().map(|a| a / factor).collect()
        };
        Ok(action)
    }
}
