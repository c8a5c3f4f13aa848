use super::stage::component;
use super::validate;
use super::Stage;
use env_core::{ConfigError, Dims, EnvError, Transition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetVelocityConfig {
    pub target_velocity: f64,
    pub tolerance: f64,
    pub velocity_index: usize,
}

impl Default for TargetVelocityConfig {
    fn default() -> Self {
        Self {
            target_velocity: 2.0,
            tolerance: 0.5,
            velocity_index: 8,
        }
    }
}

/// Replaces the reward with how close the velocity component is to the
/// target: 1 at the target, falling linearly to 0 at `tolerance` away.
pub struct TargetVelocity {
    config: TargetVelocityConfig,
}

impl TargetVelocity {
    pub fn new(config: TargetVelocityConfig) -> Result<Self, ConfigError> {
        validate::positive("tolerance", config.tolerance)?;
        Ok(Self { config })
    }
    pub fn reward(&self, velocity: f64) -> f64 {
        let error = (self.config.target_velocity - velocity).abs();
        // max before min so that a NaN velocity saturates at 0
        (1.0 - error / self.config.tolerance).max(0.0).min(1.0)
    }
}

impl Stage for TargetVelocity {
    fn name(&self) -> &'static str {
        "target_velocity"
    }
    fn validate(&self, dims: Dims) -> Result<(), ConfigError> {
        validate::observation_index("velocity_index", self.config.velocity_index, dims)
    }
    fn transform_step(&mut self, mut transition: Transition) -> Result<Transition, EnvError> {
        let velocity = component(&transition.observation, self.config.velocity_index)?;
        transition.reward = self.reward(velocity);
        Ok(transition)
    }
}
