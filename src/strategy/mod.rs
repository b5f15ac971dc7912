//! Option spread strategies and their P&L evaluation.
//!
//! One strategy lives here: the symmetric long call butterfly,
//! long 1 / short 2 / long 1 at equally spaced strikes.

pub mod butterfly;

pub use butterfly::{ButterflyStrategy, OptionLeg, ValuationResult};
