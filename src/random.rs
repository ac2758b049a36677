//! Random number generation for the model.
//!
//! Drivers never touch a process-wide generator. Instead they are handed a
//! [`UniformSource`], a capability that produces uniform draws in `[0, 1)`.
//! [`RandomSource`] is the real implementation, seeded explicitly for
//! reproducible runs or from OS entropy; [`ConstantSource`] returns a fixed
//! value on every draw, which makes every trial succeed (`0.0`) or fail
//! (`1.0`) and is the tool for deterministic scenario tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`. One draw corresponds to one
/// Bernoulli trial in the transmission model.
pub trait UniformSource {
    fn next_draw(&mut self) -> f64;
}

/// A `UniformSource` backed by a seedable pseudorandom generator.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a source with an explicit seed. Two sources created with the
    /// same seed produce identical draw sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from OS entropy. Runs driven by this source
    /// are not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl UniformSource for RandomSource {
    fn next_draw(&mut self) -> f64 {
        self.rng.random()
    }
}

/// A `UniformSource` that returns the same value on every draw.
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn next_draw(&mut self) -> f64 {
        self.0
    }
}
