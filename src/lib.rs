//! # wiener-paths: Discretized Brownian Motion Ensembles
//!
//! Generates sample paths of a standard Wiener process on `[0, T]` with a
//! fixed step `dt = T / N`, for a whole ensemble of independent paths at
//! once. Every call returns both the cumulative paths `W` and the Gaussian
//! increments `dW` that built them.
//!
//! ## Key Features
//!
//! - **Explicit randomness**: the random source is passed in, never global
//! - **Parallel ensembles**: one independent stream per path with Rayon
//! - **Validated inputs**: non-positive horizon, steps or ensemble size fail fast
//! - **Monte Carlo summaries**: `E[W(T)²] = T` estimate with standard error
//!
//! ## Quick Start
//!
//! ```rust
//! use wiener_paths::paths::generate_paths;
//! use wiener_paths::rng::seed_rng_from_u64;
//! use wiener_paths::stats::mean_square_terminal;
//!
//! let mut rng = seed_rng_from_u64(0);
//! let paths = generate_paths(1.0, 500, 100, &mut rng).expect("Valid arguments");
//!
//! assert_eq!(paths.w().dim(), (100, 501));
//! assert_eq!(paths.dw().dim(), (100, 500));
//!
//! let estimate = mean_square_terminal(&paths);
//! println!("E[W(1)^2] ~ {:.4}", estimate);
//! ```

// Module declarations
pub mod cli;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod paths;
pub mod rng;
pub mod stats;

// Re-export commonly used types for convenience
pub use error::{PathError, PathResult};
pub use paths::{
    generate_paths, generate_paths_default, generate_paths_par, BrownianPaths, PathConfig,
};
pub use rng::{NormalSource, RngFactory};
