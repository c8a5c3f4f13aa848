mod goal_condition;

pub use goal_condition::{GoalCondition, InfoFlag};

use super::Stage;
use env_core::{ConfigError, EnvError, Info, Transition};
use serde::{Deserialize, Serialize};
use tracing::trace;

const GOAL_REWARD: f64 = 1.0;
const TIMEOUT_PENALTY: f64 = -0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiStepGoalConfig {
    pub reward_goal_steps: u32,
    pub penalize_non_goal: bool,
    pub goal_info_key: String,
}

impl Default for MultiStepGoalConfig {
    fn default() -> Self {
        Self {
            reward_goal_steps: 10,
            penalize_non_goal: true,
            goal_info_key: InfoFlag::DEFAULT_KEY.to_owned(),
        }
    }
}

/// Sparse goal reward: 1 on a step where the goal condition holds, a
/// timeout outcome once `reward_goal_steps` steps pass without the goal,
/// 0 otherwise. Both goal and timeout restart the step window.
pub struct MultiStepGoal {
    reward_goal_steps: u32,
    penalize_non_goal: bool,
    current_steps: u32,
    goal: Box<dyn GoalCondition>,
}

impl MultiStepGoal {
    /// Uses an [`InfoFlag`] on `goal_info_key` as the goal condition.
    pub fn new(config: MultiStepGoalConfig) -> Result<Self, ConfigError> {
        let goal = InfoFlag::new(config.goal_info_key.as_str());
        Self::with_goal_condition(config, goal)
    }
    pub fn with_goal_condition<G>(config: MultiStepGoalConfig, goal: G) -> Result<Self, ConfigError>
    where
        G: GoalCondition + 'static,
    {
        if config.reward_goal_steps == 0 {
            return Err(ConfigError::InvalidCount {
                param: "reward_goal_steps",
            });
        }
        Ok(Self {
            reward_goal_steps: config.reward_goal_steps,
            penalize_non_goal: config.penalize_non_goal,
            current_steps: 0,
            goal: Box::new(goal),
        })
    }
    pub fn current_steps(&self) -> u32 {
        self.current_steps
    }
}

impl Stage for MultiStepGoal {
    fn name(&self) -> &'static str {
        "multi_step_goal"
    }
    fn transform_reset(
        &mut self,
        observation: Vec<f64>,
        info: Info,
    ) -> Result<(Vec<f64>, Info), EnvError> {
        self.current_steps = 0;
        Ok((observation, info))
    }
    fn transform_step(&mut self, mut transition: Transition) -> Result<Transition, EnvError> {
        self.current_steps += 1;
        transition.reward = if self.goal.is_reached(&transition.observation, &transition.info) {
            trace!(steps = self.current_steps, "goal reached");
            self.current_steps = 0;
            GOAL_REWARD
        } else if self.current_steps >= self.reward_goal_steps {
            trace!(steps = self.current_steps, "goal window timed out");
            self.current_steps = 0;
            if self.penalize_non_goal {
                TIMEOUT_PENALTY
            } else {
                0.0
            }
        } else {
            0.0
        };
        Ok(transition)
    }
}
