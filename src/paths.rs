// src/paths.rs
//! Discretized Brownian Paths
//!
//! # Mathematical Framework
//!
//! A standard Wiener process on `[0, T]` is sampled on the uniform grid
//! `t_j = j * dt`, `dt = T / N`:
//! ```text
//! ΔW_j ~ N(0, dt)          independent for every row k and step j
//! W_0  = 0
//! W_j  = W_{j-1} + ΔW_{j-1}     j = 1..N
//! ```
//!
//! One call produces a whole ensemble: `dW` has shape `(N_ens, N)` and `W`
//! has shape `(N_ens, N + 1)`, one row per ensemble member.
//!
//! # Increments
//!
//! `dW` is returned alongside `W` so a downstream Euler-Maruyama stepper can
//! drive its own SDE with exactly the noise that produced `W`.

use crate::error::{validation::*, PathError, PathResult};
use crate::rng::{self, NormalSource, RngFactory};
use ndarray::{s, Array1, Array2, ArrayView1, ArrayViewMut1, Zip};
use rand_distr::Distribution;

/// One ensemble of Brownian paths together with the increments that built it
#[derive(Debug, Clone, PartialEq)]
pub struct BrownianPaths {
    horizon: f64,
    w: Array2<f64>,
    dw: Array2<f64>,
}

impl BrownianPaths {
    /// Path matrix `W`, shape `(N_ens, N + 1)`
    pub fn w(&self) -> &Array2<f64> {
        &self.w
    }

    /// Increment matrix `dW`, shape `(N_ens, N)`
    pub fn dw(&self) -> &Array2<f64> {
        &self.dw
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn steps(&self) -> usize {
        self.dw.ncols()
    }

    pub fn ensemble_size(&self) -> usize {
        self.dw.nrows()
    }

    pub fn dt(&self) -> f64 {
        self.horizon / self.steps() as f64
    }

    /// `N + 1` equally spaced points over `[0, T]`
    pub fn time_grid(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.horizon, self.steps() + 1)
    }

    /// `W[k, N]` for every ensemble member
    pub fn terminal_values(&self) -> ArrayView1<'_, f64> {
        self.w.column(self.steps())
    }

    /// Row `k` of `W`, or `None` when `k` is out of range
    pub fn path(&self, k: usize) -> Option<ArrayView1<'_, f64>> {
        (k < self.ensemble_size()).then(|| self.w.row(k))
    }

    /// Split into `(W, dW)`
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>) {
        (self.w, self.dw)
    }
}

/// Configuration for one batch of paths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    pub horizon: f64,
    pub steps: usize,
    pub ensemble: usize,
    pub seed: u64,
}

impl PathConfig {
    pub fn validate(&self) -> PathResult<()> {
        validate_path_request(self.horizon, self.steps, self.ensemble)
    }

    pub fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }

    /// Generate sequentially from a generator seeded with `self.seed`
    pub fn generate(&self) -> PathResult<BrownianPaths> {
        let mut rng = rng::seed_rng_from_u64(self.seed);
        generate_paths(self.horizon, self.steps, self.ensemble, &mut rng)
    }

    /// Generate in parallel, one stream per ensemble row derived from `self.seed`
    pub fn generate_par(&self) -> PathResult<BrownianPaths> {
        generate_paths_par(
            self.horizon,
            self.steps,
            self.ensemble,
            &RngFactory::new(self.seed),
        )
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            horizon: 1.0,
            steps: 500,
            ensemble: 100,
            seed: 0,
        }
    }
}

/// Generate `n_ens` discretized Brownian paths over `[0, horizon]`
///
/// # Algorithm
///
/// 1. `dt = horizon / n`, `sqrt_dt = √dt`
/// 2. Draw `dW ~ N(0, sqrt_dt)` with shape `(n_ens, n)` from `source`
/// 3. `W[:, 0] = 0`, then a running sum of each `dW` row into `W[:, 1..]`
///
/// # Errors
///
/// `PathError::InvalidArgument` when `horizon` is not a positive finite
/// number, `n` / `n_ens` is zero, `horizon / n` underflows to zero or the
/// matrices would not fit in memory. Checked before anything is drawn, so a
/// rejected call leaves `source` untouched.
pub fn generate_paths<S: NormalSource + ?Sized>(
    horizon: f64,
    n: usize,
    n_ens: usize,
    source: &mut S,
) -> PathResult<BrownianPaths> {
    validate_path_request(horizon, n, n_ens)?;

    let dt = horizon / n as f64;
    let sqrt_dt = dt.sqrt();

    let dw = source.normal_matrix(0.0, sqrt_dt, (n_ens, n))?;
    if dw.dim() != (n_ens, n) {
        return Err(PathError::RandomGenerationError {
            reason: format!(
                "source returned shape {:?}, expected {:?}",
                dw.dim(),
                (n_ens, n)
            ),
        });
    }

    let mut w = Array2::<f64>::zeros((n_ens, n + 1));
    Zip::from(w.rows_mut())
        .and(dw.rows())
        .for_each(|w_row, dw_row| accumulate(w_row, dw_row));

    Ok(BrownianPaths { horizon, w, dw })
}

/// Single-path form of [`generate_paths`] (`n_ens = 1`)
pub fn generate_paths_default<S: NormalSource + ?Sized>(
    horizon: f64,
    n: usize,
    source: &mut S,
) -> PathResult<BrownianPaths> {
    generate_paths(horizon, n, 1, source)
}

/// Parallel variant of [`generate_paths`]
///
/// Row `k` draws its increments from `factory.create_std_rng(k)`, so the
/// result depends only on the factory seed and the arguments, never on the
/// number of rayon threads. It does not reproduce the sequential generator's
/// output for the same seed.
pub fn generate_paths_par(
    horizon: f64,
    n: usize,
    n_ens: usize,
    factory: &RngFactory,
) -> PathResult<BrownianPaths> {
    validate_path_request(horizon, n, n_ens)?;

    let dt = horizon / n as f64;
    let normal = rng::normal_distribution(0.0, dt.sqrt())?;

    let mut w = Array2::<f64>::zeros((n_ens, n + 1));
    let mut dw = Array2::<f64>::zeros((n_ens, n));

    Zip::indexed(w.rows_mut())
        .and(dw.rows_mut())
        .par_for_each(|k, w_row, mut dw_row| {
            let mut rng = factory.create_std_rng(k as u64);
            dw_row.iter_mut().for_each(|x| *x = normal.sample(&mut rng));
            accumulate(w_row, dw_row.view());
        });

    Ok(BrownianPaths { horizon, w, dw })
}

/// Prefix sum of one increment row into `w_row[1..]`; `w_row[0]` stays zero
fn accumulate(mut w_row: ArrayViewMut1<'_, f64>, dw_row: ArrayView1<'_, f64>) {
    let mut current = 0.0;
    w_row[0] = 0.0;
    for (w_j, &dw_j) in w_row.slice_mut(s![1..]).iter_mut().zip(dw_row.iter()) {
        current += dw_j;
        *w_j = current;
    }
}
