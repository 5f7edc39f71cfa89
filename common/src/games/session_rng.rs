use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::SnakeError;

/// Seeded randomness for one session. Same seed and same inputs replay the same game.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `min..=max`.
    pub fn random_int(&mut self, min: i32, max: i32) -> Result<i32, SnakeError> {
        if min > max {
            return Err(SnakeError::InvalidRange { min, max });
        }
        Ok(self.rng.random_range(min..=max))
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}
