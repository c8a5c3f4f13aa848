use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniform actions in [-1, 1].
    Random,
    /// All-zero actions.
    Zero,
}

pub struct Policy {
    kind: PolicyKind,
    rng: StdRng,
}

impl Policy {
    pub fn new(kind: PolicyKind, seed: u64) -> Self {
        Self {
            kind,
            rng: StdRng::seed_from_u64(seed),
        }
    }
    pub fn action(&mut self, action_dim: usize) -> Vec<f64> {
        match self.kind {
            PolicyKind::Random => (0..action_dim)
                .map(|_| self.rng.gen_range(-1.0..=1.0))
                .collect(),
            PolicyKind::Zero => vec![0.0; action_dim],
        }
    }
}
