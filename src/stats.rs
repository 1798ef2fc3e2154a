// src/stats.rs
//! Ensemble Summaries
//!
//! For a standard Wiener process `E[W(T)] = 0` and `E[W(T)²] = T`, so the
//! ensemble mean of squared terminal values is a Monte Carlo estimate of the
//! horizon itself. Its standard error is the sample standard deviation of
//! `W(T)²` over `√N_ens`.

use crate::math_utils::{two_sided_p_value, z_score};
use crate::paths::BrownianPaths;
use statrs::statistics::Statistics;

/// `Σ_k W[k, N]² / N_ens`
pub fn mean_square_terminal(paths: &BrownianPaths) -> f64 {
    let terminal = paths.terminal_values();
    terminal.iter().map(|w| w * w).sum::<f64>() / terminal.len() as f64
}

/// Moments of `W(T)` across the ensemble
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalSummary {
    pub ensemble: usize,
    pub mean: f64,
    pub variance: f64,
    pub mean_square: f64,
    /// Standard error of `mean_square`
    pub std_error: f64,
    /// Exact `E[W(T)²]`, i.e. the horizon
    pub expected_mean_square: f64,
}

impl TerminalSummary {
    pub fn from_paths(paths: &BrownianPaths) -> Self {
        let terminal = paths.terminal_values();
        let squares: Vec<f64> = terminal.iter().map(|w| w * w).collect();
        let n = terminal.len();

        let mean = terminal.iter().mean();
        let mean_square = squares.iter().mean();

        // Sample variances are undefined for a single path
        let (variance, std_error) = if n > 1 {
            let square_std = squares.iter().std_dev();
            (terminal.iter().variance(), square_std / (n as f64).sqrt())
        } else {
            (0.0, 0.0)
        };

        TerminalSummary {
            ensemble: n,
            mean,
            variance,
            mean_square,
            std_error,
            expected_mean_square: paths.horizon(),
        }
    }

    pub fn error(&self) -> f64 {
        self.mean_square - self.expected_mean_square
    }

    /// `|mean_square - T| <= k * std_error`
    pub fn within_sigma(&self, k: f64) -> bool {
        self.error().abs() <= k * self.std_error
    }

    /// Two-sided p-value of `mean_square` against `T` under the normal approximation
    pub fn p_value(&self) -> Option<f64> {
        z_score(self.mean_square, self.expected_mean_square, self.std_error)
            .map(two_sided_p_value)
    }
}
