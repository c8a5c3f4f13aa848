mod action_masking;
mod delayed_reward;
mod jump_height;
mod multi_step_goal;
mod multi_timescale;
mod noisy_observation;
mod nonlinear_dynamics;
mod partial_observability;
mod stage;
mod target_velocity;
#[cfg(test)]
mod test_util;
mod validate;

pub use action_masking::{ActionMasking, ActionMaskingConfig};
pub use delayed_reward::{DelayedReward, DelayedRewardConfig, EpisodeEndPolicy, RewardQueue};
pub use jump_height::{JumpHeight, JumpHeightConfig};
pub use multi_step_goal::{GoalCondition, InfoFlag, MultiStepGoal, MultiStepGoalConfig};
pub use multi_timescale::{MultiTimescale, MultiTimescaleConfig};
pub use noisy_observation::{NoisyObservation, NoisyObservationConfig};
pub use nonlinear_dynamics::{CounterScope, NonlinearDynamics, NonlinearDynamicsConfig};
pub use partial_observability::{PartialObservability, PartialObservabilityConfig};
pub use stage::{AsAny, Stage};
pub use target_velocity::{TargetVelocity, TargetVelocityConfig};
