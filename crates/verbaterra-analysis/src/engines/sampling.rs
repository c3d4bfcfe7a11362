//! Seeded column sampling.
//!
//! Each simulation owns one `Sampler`; nothing is shared across calls, so a
//! given seed always replays the same sequence of draws.

use rand::distributions::Distribution;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use statrs::distribution::{Beta, Normal};
use verbaterra_core::errors::ConfigError;

/// Per-call random source.
pub struct Sampler {
    rng: StdRng,
    standard: Normal,
    seed: u64,
}

impl Sampler {
    /// A sampler seeded with `seed`, or with fresh OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            rng: StdRng::seed_from_u64(seed),
            standard: Normal::standard(),
            seed,
        }
    }

    /// The seed actually used.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `n` draws from N(mean, std). `std` must be finite and non-negative;
    /// a zero `std` still consumes `n` draws and returns `mean` for each.
    pub fn normal(&mut self, n: usize, mean: f64, std: f64) -> Vec<f64> {
        let Self { rng, standard, .. } = self;
        (0..n).map(|_| mean + std * standard.sample(&mut *rng)).collect()
    }

    /// `n` draws from Beta(alpha, beta).
    pub fn beta(
        &mut self,
        n: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<Vec<f64>, ConfigError> {
        let dist = Beta::new(alpha, beta).map_err(|e| ConfigError::InvalidValue {
            field: "beta".to_string(),
            message: e.to_string(),
        })?;
        Ok((0..n).map(|_| dist.sample(&mut self.rng)).collect())
    }
}
