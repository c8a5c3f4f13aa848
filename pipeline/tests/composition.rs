use env_core::{ConfigError, Dims, Env, EnvError, Info, ResetOptions, Transition};
use pipeline::Pipeline;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use stages::{
    ActionMasking, ActionMaskingConfig, DelayedReward, DelayedRewardConfig, JumpHeight,
    JumpHeightConfig, MultiStepGoal, MultiStepGoalConfig, MultiTimescale, MultiTimescaleConfig,
    NoisyObservation, NoisyObservationConfig, PartialObservability, PartialObservabilityConfig,
    TargetVelocity, TargetVelocityConfig,
};
use toy_env::ScriptedEnv;

const DIMS: Dims = Dims {
    observation: 9,
    action: 2,
};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn moving_at(velocity: f64) -> ScriptedEnv {
    let mut observation = vec![0.0; DIMS.observation];
    observation[0] = 0.5;
    observation[8] = velocity;
    ScriptedEnv::from_observations(DIMS, &[observation])
}

fn target_velocity() -> TargetVelocity {
    TargetVelocity::new(TargetVelocityConfig {
        target_velocity: 2.0,
        tolerance: 0.5,
        velocity_index: 8,
    })
    .unwrap()
}

fn noisy(seed: u64) -> NoisyObservation {
    NoisyObservation::new(NoisyObservationConfig { noise_scale: 0.2 }, rng(seed)).unwrap()
}

#[test]
fn outer_reward_stage_sees_inner_noisy_observation() {
    let mut pipeline = Pipeline::new(moving_at(2.0))
        .with_stage(noisy(1))
        .unwrap()
        .with_stage(target_velocity())
        .unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    let reference = target_velocity();
    for _ in 0..50 {
        let transition = pipeline.step(&[0.0, 0.0]).unwrap();
        let noisy_velocity = transition.observation[8];
        assert_ne!(noisy_velocity, 2.0);
        assert_eq!(transition.reward, reference.reward(noisy_velocity));
    }
}

#[test]
fn inner_reward_stage_sees_raw_observation() {
    let mut pipeline = Pipeline::new(moving_at(2.0))
        .with_stage(target_velocity())
        .unwrap()
        .with_stage(noisy(1))
        .unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    for _ in 0..50 {
        let transition = pipeline.step(&[0.0, 0.0]).unwrap();
        assert_ne!(transition.observation[8], 2.0);
        assert_eq!(transition.reward, 1.0);
    }
}

#[test]
fn outer_reward_overwrite_wins() {
    let jump = JumpHeight::new(JumpHeightConfig {
        jump_target_height: 0.25,
        height_index: 0,
    })
    .unwrap();
    let mut jump_outer = Pipeline::new(moving_at(2.0))
        .with_stage(target_velocity())
        .unwrap()
        .with_stage(jump)
        .unwrap();
    jump_outer.reset(&ResetOptions::default()).unwrap();
    assert_eq!(jump_outer.step(&[0.0, 0.0]).unwrap().reward, 2.0);

    let jump = JumpHeight::new(JumpHeightConfig {
        jump_target_height: 0.25,
        height_index: 0,
    })
    .unwrap();
    let mut velocity_outer = Pipeline::new(moving_at(2.0))
        .with_stage(jump)
        .unwrap()
        .with_stage(target_velocity())
        .unwrap();
    velocity_outer.reset(&ResetOptions::default()).unwrap();
    assert_eq!(velocity_outer.step(&[0.0, 0.0]).unwrap().reward, 1.0);
}

#[test]
fn delayed_rewards_do_not_leak_across_episodes() {
    let env = ScriptedEnv::from_rewards(DIMS, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let delayed = DelayedReward::new(DelayedRewardConfig {
        delay_steps: 3,
        ..Default::default()
    })
    .unwrap();
    let mut pipeline = Pipeline::new(env).with_stage(delayed).unwrap();
    for _ in 0..2 {
        pipeline.reset(&ResetOptions::default()).unwrap();
        let rewards: Vec<f64> = (0..5)
            .map(|_| pipeline.step(&[0.0, 0.0]).unwrap().reward)
            .collect();
        assert_eq!(rewards, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    }
    assert_eq!(pipeline.stage::<DelayedReward>().unwrap().pending(), 3);
}

#[test]
fn masked_actions_reach_the_base_as_zeros() {
    let masking =
        ActionMasking::new(ActionMaskingConfig { mask_prob: 1.0 }, rng(2)).unwrap();
    let timescale = MultiTimescale::new(MultiTimescaleConfig::default(), rng(3)).unwrap();
    // masking runs first on the way down, the perturbation of zeros is zero
    let mut pipeline = Pipeline::new(ScriptedEnv::new(DIMS))
        .with_stage(timescale)
        .unwrap()
        .with_stage(masking)
        .unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    for _ in 0..20 {
        pipeline.step(&[0.7, -0.3]).unwrap();
    }
    assert!(pipeline
        .base()
        .actions()
        .iter()
        .all(|action| action == &[0.0, 0.0]));
}

#[test]
fn unmasked_actions_pass_through_untouched() {
    let masking =
        ActionMasking::new(ActionMaskingConfig { mask_prob: 0.0 }, rng(2)).unwrap();
    let mut pipeline = Pipeline::new(ScriptedEnv::new(DIMS))
        .with_stage(masking)
        .unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    for _ in 0..1000 {
        pipeline.step(&[0.7, -0.3]).unwrap();
    }
    assert!(pipeline
        .base()
        .actions()
        .iter()
        .all(|action| action == &[0.7, -0.3]));
}

#[test]
fn timescale_factors_are_reachable_through_the_pipeline() {
    let timescale = MultiTimescale::new(
        MultiTimescaleConfig {
            slow_scale: 0.25,
            fast_scale: 0.0,
            max_slow_factor: 1.5,
        },
        rng(4),
    )
    .unwrap();
    let env = ScriptedEnv::from_rewards(DIMS, &[2.0]);
    let mut pipeline = Pipeline::new(env).with_stage(timescale).unwrap();
    for _ in 0..3 {
        pipeline.reset(&ResetOptions::default()).unwrap();
    }
    let stage = pipeline.stage::<MultiTimescale>().unwrap();
    assert_eq!(stage.factors(), (1.5, 1.0));
    assert_eq!(stage.episode_count(), 3);
    assert_eq!(pipeline.step(&[1.0, 1.0]).unwrap().reward, 3.0);
    assert!(pipeline.stage::<DelayedReward>().is_none());
}

#[test]
fn goal_flag_from_base_info_drives_goal_reward() {
    let mut goal_info = Info::new();
    goal_info.insert("is_goal_reached".to_owned(), json!(true));
    let env = ScriptedEnv::new(DIMS)
        .with_step(Transition::running(vec![0.0; 9], 0.1))
        .with_step(Transition {
            info: goal_info,
            ..Transition::running(vec![0.0; 9], 0.1)
        })
        .with_step(Transition::running(vec![0.0; 9], 0.1));
    let goal = MultiStepGoal::new(MultiStepGoalConfig {
        reward_goal_steps: 2,
        penalize_non_goal: true,
        ..Default::default()
    })
    .unwrap();
    let mut pipeline = Pipeline::new(env).with_stage(goal).unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    let rewards: Vec<f64> = (0..4)
        .map(|_| pipeline.step(&[0.0, 0.0]).unwrap().reward)
        .collect();
    assert_eq!(rewards, vec![0.0, 1.0, 0.0, -0.5]);
}

#[test]
fn reset_observation_is_transformed_and_reset_info_passes_through() {
    let mut reset_info = Info::new();
    reset_info.insert("x_position".to_owned(), json!(0.25));
    let env = ScriptedEnv::new(DIMS)
        .with_reset_observation(vec![1.0; DIMS.observation])
        .with_reset_info(reset_info.clone());
    let hide_all = PartialObservability::new(
        PartialObservabilityConfig {
            observable_ratio: 0.0,
        },
        rng(8),
    )
    .unwrap();
    let mut pipeline = Pipeline::new(env).with_stage(hide_all).unwrap();
    let (observation, info) = pipeline.reset(&ResetOptions::default()).unwrap();
    assert_eq!(observation, vec![0.0; DIMS.observation]);
    assert_eq!(info, reset_info);
}

struct Disconnected;

impl Env for Disconnected {
    fn dims(&self) -> Dims {
        DIMS
    }
    fn reset(&mut self, _options: &ResetOptions) -> Result<(Vec<f64>, Info), EnvError> {
        Ok((vec![0.0; DIMS.observation], Info::new()))
    }
    fn step(&mut self, _action: &[f64]) -> Result<Transition, EnvError> {
        Err(EnvError::Base("simulator disconnected".into()))
    }
}

#[test]
fn base_failure_propagates_through_stages() {
    let mut pipeline = Pipeline::new(Disconnected)
        .with_stage(target_velocity())
        .unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    let err = pipeline.step(&[0.0, 0.0]).unwrap_err();
    assert!(matches!(err, EnvError::Base(_)));
    assert_eq!(err.to_string(), "base environment failed: simulator disconnected");
}

#[test]
fn out_of_range_index_fails_when_stacking() {
    let small = Dims {
        observation: 4,
        action: 1,
    };
    let result = Pipeline::new(ScriptedEnv::new(small)).with_stage(target_velocity());
    assert_eq!(
        result.err(),
        Some(ConfigError::IndexOutOfRange {
            param: "velocity_index",
            index: 8,
            len: 4
        })
    );
}

#[test]
fn wrong_action_length_is_a_shape_error() {
    let mut pipeline = Pipeline::new(ScriptedEnv::new(DIMS));
    pipeline.reset(&ResetOptions::default()).unwrap();
    let err = pipeline.step(&[0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        EnvError::ShapeMismatch {
            what: "action",
            expected: 2,
            actual: 3
        }
    ));
    assert!(pipeline.base().actions().is_empty());
}

#[test]
fn malformed_base_observation_is_a_shape_error() {
    let env = ScriptedEnv::from_observations(DIMS, &[vec![1.0, 2.0]]);
    let mut pipeline = Pipeline::new(env).with_stage(noisy(5)).unwrap();
    pipeline.reset(&ResetOptions::default()).unwrap();
    assert!(matches!(
        pipeline.step(&[0.0, 0.0]),
        Err(EnvError::ShapeMismatch {
            what: "observation",
            ..
        })
    ));
}

#[test]
fn pipeline_nests_as_a_base_environment() {
    let inner = Pipeline::new(moving_at(2.0)).with_stage(noisy(6)).unwrap();
    let mut outer = Pipeline::new(inner).with_stage(target_velocity()).unwrap();
    assert_eq!(outer.dims(), DIMS);
    outer.reset(&ResetOptions::default()).unwrap();
    let transition = outer.step(&[0.0, 0.0]).unwrap();
    assert_eq!(
        transition.reward,
        target_velocity().reward(transition.observation[8])
    );
    assert_eq!(outer.base().base().resets(), 1);
    assert_eq!(outer.stage_names().collect::<Vec<_>>(), vec!["target_velocity"]);
}
