use super::policy::PolicyKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON pipeline config (stages listed innermost first).
    ///
    /// If unset, runs noisy observations under target-velocity shaping under
    /// a multi-timescale ramp
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of episodes to run.
    #[arg(short, long, default_value_t = 5)]
    pub episodes: u32,

    /// Seed for the environment resets and the policy. The stage seed comes
    /// from the config.
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Policy used to pick actions.
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Random)]
    pub policy: PolicyKind,

    /// Step budget per episode of the base environment.
    #[arg(short, long, default_value_t = 1000)]
    pub max_episode_steps: u32,
}
