use env_core::{ConfigError, Dims, Env, EnvError, Info, ResetOptions, Transition};
use stages::{AsAny, Stage};
use tracing::debug;

/// An ordered stack of stages on top of a base environment.
///
/// Stages are kept innermost-first: `stages[0]` sits directly on the base
/// and the last stage is what the caller talks to. The pipeline is itself an
/// [`Env`], so it can stand in for the base environment anywhere, including
/// as the base of another pipeline.
///
/// Calls run in wrapper order:
///
/// - `reset`: base reset, then every stage innermost to outermost.
/// - `step`: action transforms outermost to innermost, base step, then
///   transition transforms innermost to outermost.
///
/// A stage therefore only ever sees a transition already reshaped by the
/// stages inside it. Stacking two reward-overwriting stages leaves only the
/// outer one's reward.
pub struct Pipeline<E> {
    base: E,
    stages: Vec<Box<dyn Stage>>,
}

impl<E: Env> Pipeline<E> {
    pub fn new(base: E) -> Self {
        Self {
            base,
            stages: Vec::new(),
        }
    }
    /// Adds `stage` as the new outermost stage.
    pub fn with_stage<S>(mut self, stage: S) -> Result<Self, ConfigError>
    where
        S: Stage + 'static,
    {
        self.push(Box::new(stage))?;
        Ok(self)
    }
    /// Adds `stage` as the new outermost stage after checking it against the
    /// base environment's dimensions.
    pub fn push(&mut self, stage: Box<dyn Stage>) -> Result<(), ConfigError> {
        stage.validate(self.base.dims())?;
        debug!(
            stage = stage.name(),
            depth = self.stages.len(),
            "stage added to pipeline"
        );
        self.stages.push(stage);
        Ok(())
    }
    /// The outermost stage of type `T`, if any.
    pub fn stage<T>(&self) -> Option<&T>
    where
        T: Stage + 'static,
    {
        self.stages
            .iter()
            .rev()
            .find_map(|stage| AsAny::as_any(&**stage).downcast_ref::<T>())
    }
    /// Stage names, innermost first.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }
    pub fn base(&self) -> &E {
        &self.base
    }
}

impl<E: Env> Env for Pipeline<E> {
    fn dims(&self) -> Dims {
        self.base.dims()
    }
    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f64>, Info), EnvError> {
        let dims = self.base.dims();
        let (mut observation, mut info) = self.base.reset(options)?;
        dims.check_observation(&observation)?;
        for stage in &mut self.stages {
            (observation, info) = stage.transform_reset(observation, info)?;
        }
        Ok((observation, info))
    }
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError> {
        let dims = self.base.dims();
        dims.check_action(action)?;
        let mut action = action.to_vec();
        for stage in self.stages.iter_mut().rev() {
            action = stage.transform_action(action)?;
        }
        dims.check_action(&action)?;
        let mut transition = self.base.step(&action)?;
        dims.check_observation(&transition.observation)?;
        for stage in &mut self.stages {
            transition = stage.transform_step(transition)?;
        }
        Ok(transition)
    }
}
