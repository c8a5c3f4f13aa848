use super::TimeLimit;
use env_core::{Dims, Env, EnvError, Info, ResetOptions, Transition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::json;

const OBSERVATION_DIM: usize = 11;
const ACTION_DIM: usize = 3;

const DT: f64 = 0.02;
const GRAVITY: f64 = 9.81;
const REST_HEIGHT: f64 = 1.25;
const GROUND_TOLERANCE: f64 = 0.01;
const THRUST: f64 = 4.0;
const DRAG: f64 = 0.5;
const JUMP_SPEED: f64 = 3.0;
const JOINT_RESPONSE: f64 = 0.2;
const FALL_ANGLE: f64 = 0.9;
const HEALTHY_REWARD: f64 = 1.0;
const CTRL_COST_WEIGHT: f64 = 1e-3;
const RESET_NOISE: f64 = 5e-3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideJumpConfig {
    pub max_episode_steps: u32,
    /// Distance between consecutive goal lines.
    pub goal_distance: f64,
    pub seed: u64,
}

impl Default for SlideJumpConfig {
    fn default() -> Self {
        Self {
            max_episode_steps: 1000,
            goal_distance: 5.0,
            seed: 0,
        }
    }
}

/// A small continuous hopper: a body that slides forward under thrust,
/// jumps off the ground and balances on three joints.
///
/// Actions are three values in [-1, 1] (thrust, jump, joint drive) and are
/// clipped to that range. The observation has 11 components:
///
/// | index | meaning            |
/// |-------|--------------------|
/// | 0     | torso height       |
/// | 1..=3 | joint angles       |
/// | 4..=6 | joint velocities   |
/// | 7     | vertical velocity  |
/// | 8     | forward velocity   |
/// | 9     | forward position   |
/// | 10    | episode time spent |
///
/// The episode terminates once the last joint tips past its fall angle and
/// is truncated after `max_episode_steps`. `info` carries `x_position` and
/// `is_goal_reached`, set on the step that crosses the next goal line.
pub struct SlideJump {
    config: SlideJumpConfig,
    limit: TimeLimit,
    rng: StdRng,
    height: f64,
    vertical_velocity: f64,
    position: f64,
    velocity: f64,
    joints: [f64; 3],
    joint_velocities: [f64; 3],
    next_goal: f64,
}

impl SlideJump {
    pub fn new(config: SlideJumpConfig) -> Self {
        let mut env = Self {
            limit: TimeLimit::new(config.max_episode_steps),
            rng: StdRng::seed_from_u64(config.seed),
            height: REST_HEIGHT,
            vertical_velocity: 0.0,
            position: 0.0,
            velocity: 0.0,
            joints: [0.0; 3],
            joint_velocities: [0.0; 3],
            next_goal: config.goal_distance,
            config,
        };
        env.reset_state();
        env
    }
    fn reset_state(&mut self) {
        let mut noise = || self.rng.gen_range(-RESET_NOISE..=RESET_NOISE);
        let height = REST_HEIGHT + noise().abs();
        let joints = [noise(), noise(), noise()];
        self.height = height;
        self.joints = joints;
        self.vertical_velocity = 0.0;
        self.position = 0.0;
        self.velocity = 0.0;
        self.joint_velocities = [0.0; 3];
        self.next_goal = self.config.goal_distance;
        self.limit.reset();
    }
    fn observation(&self) -> Vec<f64> {
        let mut observation = Vec::with_capacity(OBSERVATION_DIM);
        observation.push(self.height);
        observation.extend_from_slice(&self.joints);
        observation.extend_from_slice(&self.joint_velocities);
        observation.push(self.vertical_velocity);
        observation.push(self.velocity);
        observation.push(self.position);
        observation.push(f64::from(self.limit.elapsed()) / f64::from(self.limit.max_steps().max(1)));
        observation
    }
    fn info(&self, is_goal_reached: bool) -> Info {
        let mut info = Info::new();
        info.insert("x_position".to_owned(), json!(self.position));
        info.insert("is_goal_reached".to_owned(), json!(is_goal_reached));
        info
    }
    fn advance(&mut self, action: [f64; ACTION_DIM]) {
        let [thrust, jump, drive] = action;
        for (joint, (velocity, target)) in self
            .joints
            .iter_mut()
            .zip(self.joint_velocities.iter_mut().zip([thrust, jump, drive]))
        {
            let previous = *joint;
            *joint += JOINT_RESPONSE * (target - *joint);
            *velocity = (*joint - previous) / DT;
        }
        self.velocity += (THRUST * thrust - DRAG * self.velocity) * DT;
        self.position += self.velocity * DT;
        if self.height <= REST_HEIGHT + GROUND_TOLERANCE && jump > 0.0 {
            self.vertical_velocity = JUMP_SPEED * jump;
        }
        self.vertical_velocity -= GRAVITY * DT;
        self.height += self.vertical_velocity * DT;
        if self.height < REST_HEIGHT {
            self.height = REST_HEIGHT;
            self.vertical_velocity = 0.0;
        }
    }
}

impl Env for SlideJump {
    fn dims(&self) -> Dims {
        Dims::new(OBSERVATION_DIM, ACTION_DIM)
    }
    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f64>, Info), EnvError> {
        if let Some(seed) = options.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.reset_state();
        Ok((self.observation(), self.info(false)))
    }
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError> {
        self.dims().check_action(action)?;
        let mut clipped = [0.0; ACTION_DIM];
        for (dst, src) in clipped.iter_mut().zip(action) {
            *dst = src.clamp(-1.0, 1.0);
        }
        self.advance(clipped);
        let terminated = !self.joints[2].is_finite() || self.joints[2].abs() > FALL_ANGLE;
        let truncated = self.limit.step();
        let is_goal_reached = self.position >= self.next_goal;
        if is_goal_reached {
            self.next_goal += self.config.goal_distance;
        }
        let ctrl_cost = CTRL_COST_WEIGHT * clipped.iter().map(|a| a * a).sum::<f64>();
        let healthy_reward = if terminated { 0.0 } else { HEALTHY_REWARD };
        Ok(Transition {
            observation: self.observation(),
            reward: self.velocity + healthy_reward - ctrl_cost,
            terminated,
            truncated,
            info: self.info(is_goal_reached),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(max_episode_steps: u32) -> SlideJump {
        SlideJump::new(SlideJumpConfig {
            max_episode_steps,
            ..Default::default()
        })
    }

    #[test]
    fn observation_layout_matches_dims() {
        let mut env = env(10);
        let (observation, info) = env.reset(&ResetOptions::seeded(3)).unwrap();
        assert_eq!(observation.len(), env.dims().observation);
        assert!(observation[0] >= REST_HEIGHT);
        assert_eq!(info["is_goal_reached"], json!(false));
    }

    #[test]
    fn thrust_builds_forward_velocity() {
        let mut env = env(100);
        env.reset(&ResetOptions::default()).unwrap();
        let mut transition = env.step(&[1.0, 0.0, 0.0]).unwrap();
        for _ in 0..20 {
            transition = env.step(&[1.0, 0.0, 0.0]).unwrap();
        }
        assert!(transition.observation[8] > 0.5);
        assert!(transition.observation[9] > 0.0);
    }

    #[test]
    fn jump_lifts_torso_then_lands() {
        let mut env = env(200);
        env.reset(&ResetOptions::default()).unwrap();
        let airborne = env.step(&[0.0, 1.0, 0.0]).unwrap();
        assert!(airborne.observation[0] > REST_HEIGHT);
        let mut landed = airborne;
        for _ in 0..100 {
            landed = env.step(&[0.0, 0.0, 0.0]).unwrap();
        }
        assert_eq!(landed.observation[0], REST_HEIGHT);
    }

    #[test]
    fn tipping_the_last_joint_terminates() {
        let mut env = env(1000);
        env.reset(&ResetOptions::default()).unwrap();
        let terminated = (0..100).any(|_| env.step(&[0.0, 0.0, 1.0]).unwrap().terminated);
        assert!(terminated);
    }

    #[test]
    fn truncates_after_step_budget() {
        let mut env = env(5);
        env.reset(&ResetOptions::default()).unwrap();
        let flags: Vec<bool> = (0..5)
            .map(|_| env.step(&[0.0; 3]).unwrap().truncated)
            .collect();
        assert_eq!(flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn equal_seeds_reset_identically() {
        let mut a = env(10);
        let mut b = env(10);
        assert_eq!(
            a.reset(&ResetOptions::seeded(11)).unwrap(),
            b.reset(&ResetOptions::seeded(11)).unwrap()
        );
    }

    #[test]
    fn wrong_action_length_is_rejected() {
        let mut env = env(10);
        env.reset(&ResetOptions::default()).unwrap();
        assert!(matches!(
            env.step(&[0.0]),
            Err(EnvError::ShapeMismatch { what: "action", .. })
        ));
    }
}
