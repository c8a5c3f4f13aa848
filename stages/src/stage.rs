use env_core::{ConfigError, Dims, EnvError, Info, Transition};
use std::any::Any;

/// A single composable transformation of the step/reset contract.
///
/// A stage never calls its inner environment itself. The owning pipeline
/// hands it the inner result instead, which keeps every stage a plain
/// function of (inner result, own state, own config):
///
/// - `transform_reset` runs on the way back up from the base `reset`. It is
///   where a stage starts a new episode (clearing queues, zeroing counters)
///   and optionally reshapes the first observation.
/// - `transform_action` runs on the way down, before any stage closer to the
///   base sees the action.
/// - `transform_step` runs on the way back up from the base `step`, after
///   every stage closer to the base has already transformed the transition.
pub trait Stage: AsAny {
    fn name(&self) -> &'static str;

    /// Checked once when the stage is added on top of an environment.
    fn validate(&self, _dims: Dims) -> Result<(), ConfigError> {
        Ok(())
    }

    fn transform_reset(
        &mut self,
        observation: Vec<f64>,
        info: Info,
    ) -> Result<(Vec<f64>, Info), EnvError> {
        Ok((observation, info))
    }

    fn transform_action(&mut self, action: Vec<f64>) -> Result<Vec<f64>, EnvError> {
        Ok(action)
    }

    fn transform_step(&mut self, transition: Transition) -> Result<Transition, EnvError> {
        Ok(transition)
    }
}

// Lets a pipeline hand out `&T` for a concrete stage type without every
// stage spelling out its own downcast. Call it as `AsAny::as_any(&*boxed)`
// on a `Box<dyn Stage>`, otherwise the blanket impl picks up the box itself.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reads a single observation component, failing on a short observation.
pub(crate) fn component(observation: &[f64], index: usize) -> Result<f64, EnvError> {
    observation
        .get(index)
        .copied()
        .ok_or(EnvError::ShapeMismatch {
            what: "observation",
            expected: index + 1,
            actual: observation.len(),
        })
}
