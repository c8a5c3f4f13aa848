use env_core::{Dims, Env, EnvError, Info, ResetOptions, Transition};

/// Replays a fixed list of transitions, restarting from the top on every
/// reset, and records every action it receives. Once the script runs out
/// the last transition repeats.
///
/// Observations are not checked against `dims`, so a script can be used to
/// feed malformed transitions into a pipeline.
#[derive(Debug, Clone)]
pub struct ScriptedEnv {
    dims: Dims,
    reset_observation: Vec<f64>,
    reset_info: Info,
    script: Vec<Transition>,
    cursor: usize,
    actions: Vec<Vec<f64>>,
    resets: usize,
}

impl ScriptedEnv {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            reset_observation: vec![0.0; dims.observation],
            reset_info: Info::new(),
            script: Vec::new(),
            cursor: 0,
            actions: Vec::new(),
            resets: 0,
        }
    }
    /// One running step per reward, all with zero observations.
    pub fn from_rewards(dims: Dims, rewards: &[f64]) -> Self {
        rewards.iter().fold(Self::new(dims), |env, &reward| {
            env.with_step(Transition::running(vec![0.0; dims.observation], reward))
        })
    }
    /// One running step per observation, all with zero reward.
    pub fn from_observations(dims: Dims, observations: &[Vec<f64>]) -> Self {
        observations.iter().fold(Self::new(dims), |env, observation| {
            env.with_step(Transition::running(observation.clone(), 0.0))
        })
    }
    pub fn with_reset_observation(mut self, observation: Vec<f64>) -> Self {
        self.reset_observation = observation;
        self
    }
    pub fn with_reset_info(mut self, info: Info) -> Self {
        self.reset_info = info;
        self
    }
    pub fn with_step(mut self, transition: Transition) -> Self {
        self.script.push(transition);
        self
    }
    /// Every action passed to `step`, oldest first.
    pub fn actions(&self) -> &[Vec<f64>] {
        &self.actions
    }
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Env for ScriptedEnv {
    fn dims(&self) -> Dims {
        self.dims
    }
    fn reset(&mut self, _options: &ResetOptions) -> Result<(Vec<f64>, Info), EnvError> {
        self.cursor = 0;
        self.resets += 1;
        Ok((self.reset_observation.clone(), self.reset_info.clone()))
    }
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError> {
        self.actions.push(action.to_vec());
        let transition = match self.script.get(self.cursor).or(self.script.last()) {
            Some(transition) => transition.clone(),
            None => Transition::running(vec![0.0; self.dims.observation], 0.0),
        };
        self.cursor += 1;
        Ok(transition)
    }
}
