// src/error.rs
use std::fmt;

/// Error types for the wiener-paths library
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Non-positive horizon, step count or ensemble size
    InvalidArgument {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Malformed driver input (unknown flag, unparsable value)
    InvalidConfiguration { field: String, reason: String },

    /// The random source could not produce the requested draws
    RandomGenerationError { reason: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidArgument {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PathError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PathError::RandomGenerationError { reason } => {
                write!(f, "Random number generation error: {}", reason)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Result type alias for wiener-paths operations
pub type PathResult<T> = Result<T, PathError>;

/// Validation utilities
pub mod validation {
    use super::{PathError, PathResult};

    /// Validate that a real parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PathResult<()> {
        if !value.is_finite() {
            Err(PathError::InvalidArgument {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else if value <= 0.0 {
            Err(PathError::InvalidArgument {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a count is at least one
    pub fn validate_count(name: &str, count: usize) -> PathResult<()> {
        if count == 0 {
            Err(PathError::InvalidArgument {
                parameter: name.to_string(),
                value: 0.0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the full `(T, N, N_ens)` triple accepted by the path generators
    pub fn validate_path_request(horizon: f64, steps: usize, ensemble: usize) -> PathResult<()> {
        validate_positive("horizon", horizon)?;
        validate_count("steps", steps)?;
        validate_count("ensemble", ensemble)?;

        // (N_ens, N + 1) must be addressable
        let max_cells = isize::MAX as usize / std::mem::size_of::<f64>();
        let columns = steps.saturating_add(1);
        if columns > max_cells {
            return Err(PathError::InvalidArgument {
                parameter: "steps".to_string(),
                value: steps as f64,
                constraint: format!("steps + 1 exceeds the maximum of {} columns", max_cells),
            });
        }
        if ensemble.checked_mul(columns).map_or(true, |c| c > max_cells) {
            return Err(PathError::InvalidArgument {
                parameter: "ensemble".to_string(),
                value: ensemble as f64,
                constraint: format!("ensemble x (steps + 1) overflows with steps = {}", steps),
            });
        }

        if horizon / steps as f64 <= 0.0 {
            return Err(PathError::InvalidArgument {
                parameter: "horizon".to_string(),
                value: horizon,
                constraint: format!("horizon / steps underflows to zero with steps = {}", steps),
            });
        }

        Ok(())
    }
}
