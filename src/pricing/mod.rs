//! Option pricing kernels.
//!
//! One model lives here today:
//!
//! - [`black`] — Black-Scholes European call, scalar and curve entry points

pub mod black;

pub use black::{call_price, call_prices, EXPIRY_EPS};
