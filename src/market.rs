//! Market parameter snapshot and day-count helpers.
//!
//! A [`MarketParameters`] value is an immutable snapshot of the pricing
//! inputs a shell collects from the user (spot, implied vol, time to expiry,
//! risk-free rate). It is rebuilt from current UI state on every interaction
//! rather than mutated in place, so evaluation stays a pure function of the
//! snapshot it receives.

use serde::{Deserialize, Serialize};

use crate::error::{self, FlyvalError};
use crate::validate::{validate_finite, validate_non_negative, validate_positive};

/// Days per year for the Act/365 day count used by the expiry slider.
const DAYS_PER_YEAR: f64 = 365.0;

/// Immutable market snapshot for one valuation pass.
///
/// Construction validates every field, and the serde representation re-runs
/// the same validation on deserialization, so a held value always satisfies:
/// `spot > 0`, `vol > 0`, `expiry >= 0`, `rate` finite.
///
/// `expiry = 0` is legal and means the options expire right now; the pricing
/// kernel then returns intrinsic values and the current-P&L curve coincides
/// with the expiration curve. `vol = 0` is rejected here because the
/// Black-Scholes formula divides by σ√T.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MarketParametersRaw", into = "MarketParametersRaw")]
pub struct MarketParameters {
    spot: f64,
    vol: f64,
    expiry: f64,
    rate: f64,
}

#[derive(Serialize, Deserialize)]
struct MarketParametersRaw {
    spot: f64,
    vol: f64,
    expiry: f64,
    rate: f64,
}

impl TryFrom<MarketParametersRaw> for MarketParameters {
    type Error = FlyvalError;
    fn try_from(raw: MarketParametersRaw) -> Result<Self, Self::Error> {
        Self::new(raw.spot, raw.vol, raw.expiry, raw.rate)
    }
}

impl From<MarketParameters> for MarketParametersRaw {
    fn from(m: MarketParameters) -> Self {
        Self {
            spot: m.spot,
            vol: m.vol,
            expiry: m.expiry,
            rate: m.rate,
        }
    }
}

impl MarketParameters {
    /// Create a validated market snapshot.
    ///
    /// # Arguments
    /// * `spot` — Current underlying price S0 (must be > 0)
    /// * `vol` — Implied volatility σ as an annualized fraction (must be > 0)
    /// * `expiry` — Time to expiry T in years (must be ≥ 0)
    /// * `rate` — Continuously compounded risk-free rate r (must be finite)
    ///
    /// # Errors
    /// Returns [`FlyvalError::InvalidParameter`] if any field is NaN/Inf or
    /// violates its bound.
    pub fn new(spot: f64, vol: f64, expiry: f64, rate: f64) -> error::Result<Self> {
        validate_positive(spot, "spot")?;
        validate_positive(vol, "vol")?;
        validate_non_negative(expiry, "expiry")?;
        validate_finite(rate, "rate")?;
        Ok(Self {
            spot,
            vol,
            expiry,
            rate,
        })
    }

    /// Current underlying price S0.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Annualized implied volatility σ.
    pub fn vol(&self) -> f64 {
        self.vol
    }

    /// Time to expiry T in years.
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Continuously compounded risk-free rate r.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Convert calendar days to a year fraction on an Act/365 basis.
///
/// The interactive shell drives expiry from a days slider; 30 days maps to
/// `30/365 ≈ 0.0822` years.
pub fn expiry_from_days(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}
