//! # flyval
//!
//! Valuation engine for the long call butterfly spread under Black-Scholes.
//!
//! Provides the numeric core behind an interactive P&L chart: given a market
//! snapshot and a butterfly definition, it computes the net entry cost and two
//! payoff curves over a spot-price sweep — the P&L at expiration and the P&L
//! at the current time — which a presentation layer renders as-is.
//!
//! ## Architecture
//!
//! - **`pricing`** — Black-Scholes European call kernel (scalar and curve)
//! - **`strategy`** — Butterfly construction and the P&L evaluator
//! - **`market`** — Validated market parameter snapshot and day-count helper
//! - **`grid`** — Spot-price sweep construction
//!
//! ## Design
//!
//! - **Validated constructors, bare `f64` kernels.** [`MarketParameters`] and
//!   [`ButterflyStrategy`] reject invalid values at construction (and on
//!   deserialization), so the pricing kernel itself carries no checks and
//!   stays a plain function of `f64` arguments.
//! - **No panics.** Every fallible operation returns [`Result`]. Library code
//!   never calls `unwrap()` or `expect()`.
//! - **Pure evaluation.** [`ButterflyStrategy::evaluate`] is a pure function
//!   of its inputs: a fresh [`ValuationResult`] per call, no caching, no
//!   interior mutability. Either a complete result is produced or an error is
//!   returned — never partial curves.
//! - **Thread-safe.** All public types are `Send + Sync`; a shell may
//!   evaluate from any thread.
//! - **Serializable.** Parameter types implement Serde `Serialize` /
//!   `Deserialize` with validation on deserialization; results implement
//!   `Serialize` for consumption by a rendering shell.
//!
//! ## Quick Start
//!
//! ```
//! use flyval::{ButterflyStrategy, MarketParameters};
//!
//! let market = MarketParameters::new(100.0, 0.25, 30.0 / 365.0, 0.04)?;
//! let fly = ButterflyStrategy::new(100.0, 5.0)?;
//! let result = fly.evaluate(&market)?;
//!
//! assert!(result.entry_cost > 0.0 && result.entry_cost < 5.0);
//! assert_eq!(result.spots.len(), result.current_pnl.len());
//! # Ok::<(), flyval::FlyvalError>(())
//! ```

pub mod error;
pub mod grid;
pub mod market;
pub mod pricing;
pub mod strategy;
mod validate;

#[doc(inline)]
pub use error::{FlyvalError, Result};
#[doc(inline)]
pub use grid::{price_grid, DEFAULT_GRID_POINTS};
#[doc(inline)]
pub use market::MarketParameters;
#[doc(inline)]
pub use pricing::black::{call_price, call_prices};
#[doc(inline)]
pub use strategy::{ButterflyStrategy, OptionLeg, ValuationResult};
