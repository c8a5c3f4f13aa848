mod args;
mod policy;
mod summary;

use args::Args;
use clap::Parser;
use env_core::{ConfigError, Env, EnvError, ResetOptions};
use pipeline::{Pipeline, PipelineConfig, StageConfig};
use policy::Policy;
use stages::MultiTimescale;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toy_env::{SlideJump, SlideJumpConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PROGRESS_INTERVAL_STEPS: u32 = 100;

#[derive(Debug, Error)]
enum RolloutError {
    #[error("could not read {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Env(#[from] EnvError),
}

fn default_config() -> PipelineConfig {
    PipelineConfig {
        seed: 0,
        stages: vec![
            StageConfig::NoisyObservation(Default::default()),
            StageConfig::TargetVelocity(Default::default()),
            StageConfig::MultiTimescale(Default::default()),
        ],
    }
}

fn load_config(path: &Path) -> Result<PipelineConfig, RolloutError> {
    let json = std::fs::read_to_string(path).map_err(|source| RolloutError::ReadConfig {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| RolloutError::ParseConfig {
        path: path.to_owned(),
        source,
    })
}

fn run_episode<E: Env>(
    env: &mut E,
    policy: &mut Policy,
    seed: u64,
) -> Result<(f64, u32), RolloutError> {
    let action_dim = env.dims().action;
    env.reset(&ResetOptions::seeded(seed))?;
    let mut episode_return = 0.0;
    let mut n_step = 0;
    loop {
        let transition = env.step(&policy.action(action_dim))?;
        episode_return += transition.reward;
        n_step += 1;
        if n_step % PROGRESS_INTERVAL_STEPS == 0 {
            info!(step = n_step, episode_return, "episode in progress");
        }
        if transition.is_done() {
            return Ok((episode_return, n_step));
        }
    }
}

fn main() -> Result<(), RolloutError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => default_config(),
    };
    let base = SlideJump::new(SlideJumpConfig {
        max_episode_steps: args.max_episode_steps,
        seed: args.seed,
        ..Default::default()
    });
    let mut env = Pipeline::from_config(base, &config)?;
    info!(
        stages = ?env.stage_names().collect::<Vec<_>>(),
        "pipeline assembled"
    );
    let mut policy = Policy::new(args.policy, args.seed);
    let mut returns = Vec::with_capacity(args.episodes as usize);
    for episode in 0..args.episodes {
        let (episode_return, n_steps) =
            run_episode(&mut env, &mut policy, args.seed.wrapping_add(u64::from(episode)))?;
        info!(
            episode = episode + 1,
            episodes = args.episodes,
            steps = n_steps,
            episode_return,
            "episode completed"
        );
        returns.push(episode_return);
    }
    let (mean, std_dev) = summary::mean_std(&returns);
    info!(mean, std_dev, "all episodes completed");
    if let Some(stage) = env.stage::<MultiTimescale>() {
        let (slow_factor, fast_factor) = stage.factors();
        info!(slow_factor, fast_factor, "multi-timescale factors");
    }
    Ok(())
}
