// src/math_utils.rs
//! Normal-approximation helpers for the ensemble summaries and timing
//! helpers for the benchmark.

use statrs::function::erf;
use std::f64::consts::SQRT_2;
use std::time::Instant;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// `(estimate - expected) / std_error`, or `None` when there is no spread to
/// standardize by
pub fn z_score(estimate: f64, expected: f64, std_error: f64) -> Option<f64> {
    (std_error > 0.0 && std_error.is_finite()).then(|| (estimate - expected) / std_error)
}

/// `P(|Z| >= |z|)` for standard normal `Z`
pub fn two_sided_p_value(z: f64) -> f64 {
    // erfc keeps precision in the tails where 1 - cdf cancels
    erf::erfc(z.abs() / SQRT_2)
}

/// Run `f` once, returning its value and the wall-clock time in milliseconds
pub fn time_ms<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64() * 1000.0)
}

/// Items processed per second, `None` if `elapsed_ms` is not a positive duration
pub fn per_second(items: usize, elapsed_ms: f64) -> Option<f64> {
    (elapsed_ms > 0.0 && elapsed_ms.is_finite()).then(|| items as f64 / (elapsed_ms / 1000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((norm_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 1e-3);
    }

    #[test]
    fn test_two_sided_p_value() {
        assert!((two_sided_p_value(0.0) - 1.0).abs() < 1e-12);
        assert!((two_sided_p_value(1.96) - 0.05).abs() < 1e-3);
        assert_eq!(two_sided_p_value(-1.96), two_sided_p_value(1.96));
        // Agrees with the cdf form away from the tails
        let z = 0.75;
        assert!((two_sided_p_value(z) - 2.0 * (1.0 - norm_cdf(z))).abs() < 1e-10);
        // Far tail stays positive instead of cancelling to zero
        assert!(two_sided_p_value(10.0) > 0.0);
    }

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(5.0, 2.0, 4.0), Some(0.75));
        assert_eq!(z_score(-1.0, 1.0, 1.0), Some(-2.0));
        assert_eq!(z_score(5.0, 2.0, 0.0), None);
        assert_eq!(z_score(5.0, 2.0, f64::NAN), None);
    }

    #[test]
    fn test_time_ms_returns_value() {
        let (sum, elapsed) = time_ms(|| (1..=100u64).sum::<u64>());
        assert_eq!(sum, 5050);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_per_second() {
        assert_eq!(per_second(1_000, 500.0), Some(2_000.0));
        assert_eq!(per_second(1_000, 0.0), None);
        assert_eq!(per_second(1_000, -1.0), None);
    }
}
