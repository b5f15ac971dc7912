//! Black-Scholes European call pricing (no dividends).
//!
//! # Formula
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//! C  = S·Φ(d1) − K·e^(−rT)·Φ(d2)
//! ```
//!
//! Below [`EXPIRY_EPS`] the formula's time term degenerates, so both entry
//! points return intrinsic value `max(S − K, 0)` instead — the price of a
//! just-expired call. The shortcut is applied per element in [`call_prices`]
//! too, so a swept curve agrees with [`call_price`] at every point.
//!
//! The kernel is deliberately unchecked: callers guarantee `S > 0`, `K > 0`
//! and `σ > 0` (the validated [`MarketParameters`](crate::MarketParameters) /
//! [`ButterflyStrategy`](crate::ButterflyStrategy) constructors do this for
//! the public evaluation path). `σ = 0` with `T > EXPIRY_EPS` yields NaN.

/// Expiries at or below this many years are treated as expired.
pub const EXPIRY_EPS: f64 = 1e-5;

/// Standard normal cumulative distribution function.
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Price a European call at a single spot.
///
/// # Arguments
/// * `spot` — Underlying price S (must be > 0)
/// * `strike` — Strike price K (must be > 0)
/// * `expiry` — Time to expiry T in years (must be ≥ 0)
/// * `rate` — Continuously compounded risk-free rate r
/// * `vol` — Annualized volatility σ (must be > 0)
///
/// Returns `max(spot − strike, 0)` when `expiry <= EXPIRY_EPS`. For valid
/// inputs the result satisfies the no-arbitrage bound `0 ≤ C ≤ S`.
pub fn call_price(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> f64 {
    if expiry <= EXPIRY_EPS {
        return (spot - strike).max(0.0);
    }

    let vol_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    spot * norm_cdf(d1) - strike * (-rate * expiry).exp() * norm_cdf(d2)
}

/// Price a European call across a spot sweep, holding K, T, r, σ fixed.
///
/// Elementwise identical to [`call_price`], including the expiration
/// shortcut; output length equals `spots.len()`.
pub fn call_prices(spots: &[f64], strike: f64, expiry: f64, rate: f64, vol: f64) -> Vec<f64> {
    spots
        .iter()
        .map(|&s| call_price(s, strike, expiry, rate, vol))
        .collect()
}
