use env_core::{Info, Transition};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub fn with_reward(reward: f64) -> Transition {
    Transition::running(vec![0.0; 4], reward)
}

pub fn with_observation(observation: Vec<f64>) -> Transition {
    Transition::running(observation, 0.0)
}

pub fn done_with_reward(reward: f64) -> Transition {
    Transition {
        terminated: true,
        ..with_reward(reward)
    }
}

pub fn reset_info() -> Info {
    Info::new()
}
