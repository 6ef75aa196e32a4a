//! Random sample source.
//!
//! Values are drawn from a normal distribution, mean 0 and standard
//! deviation 0.5 by default, independently per call. With a seed the stream
//! is reproducible, which the deterministic tests rely on; without one the
//! generator is seeded from OS entropy.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, NormalError};

/// Default distribution parameters.
pub const DEFAULT_MEAN: f64 = 0.0;
pub const DEFAULT_STD_DEV: f64 = 0.5;

/// Gaussian scalar source; one value per `next()` call.
pub struct GaussianSource {
    dist: Normal<f64>,
    rng: StdRng,
}

impl GaussianSource {
    /// Create a source with explicit distribution parameters.
    /// Fails when `std_dev` is not a finite non-negative number.
    pub fn new(mean: f64, std_dev: f64, seed: Option<u64>) -> Result<Self, NormalError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            dist: Normal::new(mean, std_dev)?,
            rng,
        })
    }

    /// Draw the next value.
    pub fn next(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }

    pub fn mean(&self) -> f64 {
        self.dist.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.dist.std_dev()
    }
}

impl Default for GaussianSource {
    fn default() -> Self {
        // Parameters are compile-time constants, construction cannot fail.
        Self::new(DEFAULT_MEAN, DEFAULT_STD_DEV, None).expect("default distribution parameters")
    }
}
