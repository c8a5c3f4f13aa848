mod reward_queue;

pub use reward_queue::RewardQueue;

use super::Stage;
use env_core::{ConfigError, EnvError, Info, Transition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What happens to rewards still queued when an episode ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeEndPolicy {
    /// Leave them queued; the next `reset` discards them. Every episode
    /// that runs at least `delay_steps` steps loses its last `delay_steps`
    /// rewards, all of them, not `delay_steps - 1`.
    #[default]
    Drop,
    /// Add them all to the reward of the final step.
    Flush,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayedRewardConfig {
    pub delay_steps: usize,
    pub episode_end: EpisodeEndPolicy,
}

impl Default for DelayedRewardConfig {
    fn default() -> Self {
        Self {
            delay_steps: 10,
            episode_end: EpisodeEndPolicy::Drop,
        }
    }
}

/// Holds every reward back by `delay_steps` steps. The first `delay_steps`
/// steps of an episode emit 0.
pub struct DelayedReward {
    queue: RewardQueue,
    episode_end: EpisodeEndPolicy,
}

impl DelayedReward {
    pub fn new(config: DelayedRewardConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            queue: RewardQueue::with_max_size(config.delay_steps),
            episode_end: config.episode_end,
        })
    }
    /// Number of rewards waiting to be emitted.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Stage for DelayedReward {
    fn name(&self) -> &'static str {
        "delayed_reward"
    }
    fn transform_reset(
        &mut self,
        observation: Vec<f64>,
        info: Info,
    ) -> Result<(Vec<f64>, Info), EnvError> {
        self.queue.clear();
        Ok((observation, info))
    }
    fn transform_step(&mut self, mut transition: Transition) -> Result<Transition, EnvError> {
        let released = self.queue.push(transition.reward).unwrap_or(0.0);
        transition.reward = if transition.is_done() {
            match self.episode_end {
                EpisodeEndPolicy::Drop => {
                    if !self.queue.is_empty() {
                        debug!(
                            dropped = self.queue.len(),
                            "episode ended with delayed rewards still queued"
                        );
                    }
                    released
                }
                EpisodeEndPolicy::Flush => {
                    let flushed: f64 = self.queue.iter().sum();
                    self.queue.clear();
                    released + flushed
                }
            }
        } else {
            released
        };
        Ok(transition)
    }
}
