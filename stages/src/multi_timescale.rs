use super::validate;
use super::Stage;
use env_core::{ConfigError, EnvError, Info, Transition};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiTimescaleConfig {
    pub slow_scale: f64,
    pub fast_scale: f64,
    pub max_slow_factor: f64,
}

impl Default for MultiTimescaleConfig {
    fn default() -> Self {
        Self {
            slow_scale: 0.001,
            fast_scale: 0.1,
            max_slow_factor: 2.0,
        }
    }
}

/// Combines an episode-scale difficulty ramp with step-scale actuation
/// noise.
///
/// The slow factor survives resets: it starts at 1, grows by `slow_scale`
/// on every reset and is capped at `max_slow_factor`. Rewards are scaled by
/// it. Each action component is independently perturbed as
/// `a * (1 + u)` with `u ~ U[-fast_scale, fast_scale]`.
///
/// The fast factor is reset to 1 every episode and currently only reported
/// through [`MultiTimescale::factors`].
pub struct MultiTimescale<R = StdRng> {
    config: MultiTimescaleConfig,
    perturbation: Uniform<f64>,
    episode_count: u64,
    slow_factor: f64,
    fast_factor: f64,
    rng: R,
}

impl<R: Rng> MultiTimescale<R> {
    pub fn new(config: MultiTimescaleConfig, rng: R) -> Result<Self, ConfigError> {
        validate::scale("slow_scale", config.slow_scale)?;
        let fast_scale = validate::half_width("fast_scale", config.fast_scale)?;
        validate::at_least("max_slow_factor", config.max_slow_factor, 1.0)?;
        Ok(Self {
            perturbation: Uniform::new_inclusive(-fast_scale, fast_scale),
            config,
            episode_count: 0,
            slow_factor: 1.0,
            fast_factor: 1.0,
            rng,
        })
    }
    /// `(slow_factor, fast_factor)`.
    pub fn factors(&self) -> (f64, f64) {
        (self.slow_factor, self.fast_factor)
    }
    /// Resets seen over the stage's lifetime.
    pub fn episode_count(&self) -> u64 {
        self.episode_count
    }
}

impl<R: Rng + 'static> Stage for MultiTimescale<R> {
    fn name(&self) -> &'static str {
        "multi_timescale"
    }
    fn transform_reset(
        &mut self,
        observation: Vec<f64>,
        info: Info,
    ) -> Result<(Vec<f64>, Info), EnvError> {
        self.episode_count += 1;
        // derived from the count rather than accumulated so that the ramp
        // does not drift through repeated rounding
        self.slow_factor = (self.config.slow_scale * self.episode_count as f64 + 1.0)
            .min(self.config.max_slow_factor);
        self.fast_factor = 1.0;
        debug!(
            episode = self.episode_count,
            slow_factor = self.slow_factor,
            "multi-timescale episode start"
        );
        Ok((observation, info))
    }
    fn transform_action(&mut self, action: Vec<f64>) -> Result<Vec<f64>, EnvError> {
        Ok(action
            .into_iter()
            .map(|a| a * (1.0 + self.perturbation.sample(&mut self.rng)))
            .collect())
    }
    fn transform_step(&mut self, mut transition: Transition) -> Result<Transition, EnvError> {
        transition.reward *= self.slow_factor;
        Ok(transition)
    }
}
