use super::Pipeline;
use env_core::{ConfigError, Env};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use stages::{
    ActionMasking, ActionMaskingConfig, DelayedReward, DelayedRewardConfig, JumpHeight,
    JumpHeightConfig, MultiStepGoal, MultiStepGoalConfig, MultiTimescale, MultiTimescaleConfig,
    NoisyObservation, NoisyObservationConfig, NonlinearDynamics, NonlinearDynamicsConfig,
    PartialObservability, PartialObservabilityConfig, Stage, TargetVelocity, TargetVelocityConfig,
};

/// One stage of a [`PipelineConfig`], tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageConfig {
    TargetVelocity(TargetVelocityConfig),
    JumpHeight(JumpHeightConfig),
    DelayedReward(DelayedRewardConfig),
    MultiTimescale(MultiTimescaleConfig),
    NoisyObservation(NoisyObservationConfig),
    MultiStepGoal(MultiStepGoalConfig),
    PartialObservability(PartialObservabilityConfig),
    ActionMasking(ActionMaskingConfig),
    NonlinearDynamics(NonlinearDynamicsConfig),
}

impl StageConfig {
    /// Builds the stage. Stages without randomness drop `rng`.
    pub fn build(&self, rng: StdRng) -> Result<Box<dyn Stage>, ConfigError> {
        let stage: Box<dyn Stage> = match self {
            Self::TargetVelocity(config) => Box::new(TargetVelocity::new(config.clone())?),
            Self::JumpHeight(config) => Box::new(JumpHeight::new(config.clone())?),
            Self::DelayedReward(config) => Box::new(DelayedReward::new(config.clone())?),
            Self::MultiTimescale(config) => Box::new(MultiTimescale::new(config.clone(), rng)?),
            Self::NoisyObservation(config) => {
                Box::new(NoisyObservation::new(config.clone(), rng)?)
            }
            Self::MultiStepGoal(config) => Box::new(MultiStepGoal::new(config.clone())?),
            Self::PartialObservability(config) => {
                Box::new(PartialObservability::new(config.clone(), rng)?)
            }
            Self::ActionMasking(config) => Box::new(ActionMasking::new(config.clone(), rng)?),
            Self::NonlinearDynamics(config) => {
                Box::new(NonlinearDynamics::new(config.clone(), rng)?)
            }
        };
        Ok(stage)
    }
}

/// A serializable description of a pipeline. `stages` are listed
/// innermost-first, the same order they are pushed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub seed: u64,
    pub stages: Vec<StageConfig>,
}

impl<E: Env> Pipeline<E> {
    /// Builds every stage of `config` on top of `base`. Each stage gets its
    /// own generator derived from `config.seed`, so equal configs give
    /// identical runs.
    pub fn from_config(base: E, config: &PipelineConfig) -> Result<Self, ConfigError> {
        let mut seeder = StdRng::seed_from_u64(config.seed);
        let mut pipeline = Self::new(base);
        for stage_config in &config.stages {
            let rng = StdRng::seed_from_u64(seeder.gen());
            pipeline.push(stage_config.build(rng)?)?;
        }
        Ok(pipeline)
    }
}
