//! Error types for the flyval engine.
//!
//! All fallible operations return `Result<T, FlyvalError>` rather than
//! panicking. The engine draws a hard line between rejected inputs (errors)
//! and valid-but-surprising numeric outputs: an entry cost that comes out a
//! few ulps negative in a theoretically zero-arbitrage configuration is a
//! legitimate result, not an error, and is returned as-is.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, FlyvalError>;

/// Errors that can occur while constructing parameters or evaluating a spread.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlyvalError {
    /// An input violates a precondition (non-positive spot, vol, or strike;
    /// negative expiry; non-positive or oversized wing width; NaN/Inf;
    /// too few grid points). Raised before any computation runs.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}
