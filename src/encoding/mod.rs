// src/encoding/mod.rs

//! Raw data generation and the mapping from scalar samples to rotation
//! angles.
//!
//! Samples enter the circuit as rotation angles via `angle = raw * TAU`,
//! which assumes raw values normalized to `[0, 1]`. Scaling arbitrary data
//! ranges into `[0, 1]` is the caller's responsibility (typically via the
//! bounds handed to `UniformSource`); out-of-range inputs produce angles
//! outside `[0, 2π]` without error.

use crate::core::TAU;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A replaceable source of raw scalar samples.
///
/// The default implementation is `UniformSource`; deterministic or
/// real-world sources (sensor readings, recorded datasets) slot in by
/// implementing this trait.
pub trait DataSource {
    /// Produces `count` raw samples.
    fn draw(&mut self, count: usize) -> Vec<f64>;
}

/// Draws independent uniform samples from `[low, high)`.
///
/// The default constructor seeds from process entropy, so draws are not
/// reproducible; `with_seed` fixes the stream. Bounds are passed to the
/// random number generator unvalidated, so `low > high` follows the
/// generator's own contract rather than being checked here.
pub struct UniformSource {
    low: f64,
    high: f64,
    rng: StdRng,
}

impl UniformSource {
    /// Creates a source over `[low, high)` seeded from process entropy.
    pub fn new(low: f64, high: f64) -> Self {
        Self::with_seed(low, high, rand::rng().random::<u64>())
    }

    /// Creates a source over `[low, high)` with a fixed seed, making the
    /// sample stream reproducible.
    pub fn with_seed(low: f64, high: f64, seed: u64) -> Self {
        Self {
            low,
            high,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Lower bound of the sampled range (inclusive).
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound of the sampled range (exclusive).
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl DataSource for UniformSource {
    fn draw(&mut self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| self.rng.random_range(self.low..self.high))
            .collect()
    }
}

/// Maps raw samples to rotation angles: `angle = raw * 2π`.
///
/// Exact floating-point multiplication, no range validation.
pub fn to_angles(samples: &[f64]) -> Vec<f64> {
    to_angles_scaled(samples, TAU)
}

/// Maps raw samples to rotation angles with a caller-chosen full scale:
/// `angle = raw * full_scale`.
pub fn to_angles_scaled(samples: &[f64], full_scale: f64) -> Vec<f64> {
    samples.iter().map(|raw| raw * full_scale).collect()
}
