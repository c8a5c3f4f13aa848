use super::stage::component;
use super::validate;
use super::Stage;
use env_core::{ConfigError, Dims, EnvError, Transition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpHeightConfig {
    pub jump_target_height: f64,
    pub height_index: usize,
}

impl Default for JumpHeightConfig {
    fn default() -> Self {
        Self {
            jump_target_height: 1.0,
            height_index: 0,
        }
    }
}

/// Replaces the reward with the torso height as a fraction of the target.
/// Unclamped: below the ground reference it goes negative, above the target
/// it exceeds 1.
pub struct JumpHeight {
    config: JumpHeightConfig,
}

impl JumpHeight {
    pub fn new(config: JumpHeightConfig) -> Result<Self, ConfigError> {
        validate::nonzero("jump_target_height", config.jump_target_height)?;
        Ok(Self { config })
    }
}

impl Stage for JumpHeight {
    fn name(&self) -> &'static str {
        "jump_height"
    }
    fn validate(&self, dims: Dims) -> Result<(), ConfigError> {
        validate::observation_index("height_index", self.config.height_index, dims)
    }
    fn transform_step(&mut self, mut transition: Transition) -> Result<Transition, EnvError> {
        let height = component(&transition.observation, self.config.height_index)?;
        transition.reward = height / self.config.jump_target_height;
        Ok(transition)
    }
}
