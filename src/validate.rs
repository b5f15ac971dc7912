//! Input validation helpers.
//!
//! Every boundary check in the crate funnels through these so that NaN, +Inf,
//! and -Inf are rejected uniformly via `!is_finite()` and error messages keep
//! one shape: `"<name> must be ..., got <value>"`.

use crate::error::FlyvalError;

/// Validate that a value is strictly positive and finite (rejects NaN, Inf, zero, negatives).
pub(crate) fn validate_positive(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FlyvalError::InvalidParameter {
            message: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that a value is non-negative and finite (rejects NaN, Inf, negatives).
pub(crate) fn validate_non_negative(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(FlyvalError::InvalidParameter {
            message: format!("{name} must be non-negative and finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validate that a value is finite (rejects NaN and Inf; allows zero and negatives).
pub(crate) fn validate_finite(value: f64, name: &str) -> crate::error::Result<f64> {
    if !value.is_finite() {
        return Err(FlyvalError::InvalidParameter {
            message: format!("{name} must be finite, got {value}"),
        });
    }
    Ok(value)
}
