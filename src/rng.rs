// src/rng.rs
//! Random Sources for Path Generation
//!
//! # Design
//!
//! The path generators never touch global random state. Every call receives
//! its random source explicitly:
//! 1. **Reproducibility**: a seeded source replays the same increments
//! 2. **Parallel safety**: each ensemble row can own an independent stream
//! 3. **Testability**: prerecorded increments can stand in for real draws
//!
//! # Streams
//!
//! [`RngFactory`] derives one `StdRng` per stream id from a base seed. The
//! parallel generator assigns stream `k` to ensemble row `k`, so its output
//! does not depend on how rayon schedules the rows.

use crate::error::{PathError, PathResult};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// A source of independent normal samples.
///
/// Matrices are filled in row-major order (ensemble row by ensemble row).
pub trait NormalSource {
    fn normal_matrix(
        &mut self,
        mean: f64,
        std_dev: f64,
        shape: (usize, usize),
    ) -> PathResult<Array2<f64>>;
}

impl<R: Rng + ?Sized> NormalSource for R {
    fn normal_matrix(
        &mut self,
        mean: f64,
        std_dev: f64,
        shape: (usize, usize),
    ) -> PathResult<Array2<f64>> {
        let normal = normal_distribution(mean, std_dev)?;
        Ok(Array2::from_shape_simple_fn(shape, || normal.sample(&mut *self)))
    }
}

pub(crate) fn normal_distribution(mean: f64, std_dev: f64) -> PathResult<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|e| PathError::RandomGenerationError {
        reason: format!("N({}, {}): {}", mean, std_dev, e),
    })
}

/// Replays prerecorded increments verbatim.
///
/// `mean` and `std_dev` are ignored; the recorded values are returned as the
/// draws themselves. Fails once a request needs more values than remain.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl NormalSource for ReplaySource {
    fn normal_matrix(
        &mut self,
        _mean: f64,
        _std_dev: f64,
        shape: (usize, usize),
    ) -> PathResult<Array2<f64>> {
        let requested = shape.0 * shape.1;
        if requested > self.remaining() {
            return Err(PathError::RandomGenerationError {
                reason: format!(
                    "replay source exhausted: requested {} values, {} remaining",
                    requested,
                    self.remaining()
                ),
            });
        }

        let end = self.cursor + requested;
        let draws = self.values[self.cursor..end].to_vec();
        self.cursor = end;

        Array2::from_shape_vec(shape, draws).map_err(|e| PathError::RandomGenerationError {
            reason: e.to_string(),
        })
    }
}

/// Stream factory for reproducible parallel generation
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create the generator for one stream (one ensemble row)
    pub fn create_std_rng(&self, stream_id: u64) -> StdRng {
        StdRng::seed_from_u64(mix_seed(self.base_seed, stream_id))
    }
}

/// splitmix64 finalizer over `base_seed + stream_id`
///
/// Neighbouring stream ids land far apart in seed space.
fn mix_seed(base_seed: u64, stream_id: u64) -> u64 {
    let mut z = base_seed.wrapping_add(stream_id.wrapping_mul(0x9e3779b97f4a7c15u64));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9u64);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111ebu64);
    z ^ (z >> 31)
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
