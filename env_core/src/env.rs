use super::{Dims, EnvError, Info, Transition};
use serde::{Deserialize, Serialize};

/// Options forwarded untouched to the base environment on `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOptions {
    pub seed: Option<u64>,
}

impl ResetOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

/// The step/reset contract shared by base environments and pipelines.
///
/// `reset` must be called before the first `step` of every episode. An
/// episode ends on the first transition with `terminated` or `truncated`
/// set.
pub trait Env {
    fn dims(&self) -> Dims;
    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f64>, Info), EnvError>;
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError>;
}

impl<E> Env for Box<E>
where
    E: Env + ?Sized,
{
    fn dims(&self) -> Dims {
        (**self).dims()
    }
    fn reset(&mut self, options: &ResetOptions) -> Result<(Vec<f64>, Info), EnvError> {
        (**self).reset(options)
    }
    fn step(&mut self, action: &[f64]) -> Result<Transition, EnvError> {
        (**self).step(action)
    }
}
