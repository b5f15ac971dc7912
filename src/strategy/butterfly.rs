//! Long call butterfly spread: construction and P&L evaluation.
//!
//! A butterfly buys one call at `K_mid − w`, sells two calls at `K_mid`, and
//! buys one call at `K_mid + w`. Its payoff at expiration is a tent peaking
//! at `K_mid` with maximum height `w`; the position profits if the underlying
//! settles near the center strike.
//!
//! [`ButterflyStrategy::evaluate`] produces everything a chart needs in one
//! pass: the net entry cost and, over a spot sweep, the P&L at expiration and
//! the P&L at the current time (the "T+0 curve"). As expiry or vol shrinks
//! the current curve converges onto the expiration tent.

use serde::{Deserialize, Serialize};

use crate::error::{self, FlyvalError};
use crate::grid::{price_grid, DEFAULT_GRID_POINTS};
use crate::market::MarketParameters;
use crate::pricing::black::{call_price, call_prices};
use crate::validate::validate_positive;

/// One call leg of a spread: a strike and a signed contract quantity.
///
/// Positive quantity is long, negative is short. Exists so a shell can
/// display the leg breakdown ("buy 1 call @ 95, sell 2 calls @ 100, buy 1
/// call @ 105"); the evaluator also folds over these legs when combining
/// payoffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionLeg {
    /// Strike price K.
    pub strike: f64,
    /// Signed number of contracts (+1 long, −2 short, +1 long here).
    pub quantity: f64,
}

/// Symmetric long call butterfly: center strike and wing width.
///
/// Invariants enforced at construction and on deserialization:
/// `mid_strike > 0`, `width > 0`, and `width < mid_strike` (so the derived
/// low strike `K_mid − w` stays positive — the lognormal formula cannot
/// price a non-positive strike). Wings are symmetric by construction:
/// `low_strike` and `high_strike` are both exactly `width` away from center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ButterflyStrategyRaw", into = "ButterflyStrategyRaw")]
pub struct ButterflyStrategy {
    mid_strike: f64,
    width: f64,
}

#[derive(Serialize, Deserialize)]
struct ButterflyStrategyRaw {
    mid_strike: f64,
    width: f64,
}

impl TryFrom<ButterflyStrategyRaw> for ButterflyStrategy {
    type Error = FlyvalError;
    fn try_from(raw: ButterflyStrategyRaw) -> Result<Self, Self::Error> {
        Self::new(raw.mid_strike, raw.width)
    }
}

impl From<ButterflyStrategy> for ButterflyStrategyRaw {
    fn from(b: ButterflyStrategy) -> Self {
        Self {
            mid_strike: b.mid_strike,
            width: b.width,
        }
    }
}

/// Net entry cost plus the two P&L curves over a shared spot sweep.
///
/// All three vectors have the same length; `expiry_pnl[i]` and
/// `current_pnl[i]` belong to `spots[i]`. A fresh value is produced on every
/// evaluation and never mutated afterwards.
///
/// `entry_cost` is the net debit paid to open the spread. A symmetric
/// butterfly is theoretically never a credit, but floating-point rounding can
/// leave the cost a few ulps below zero; that is a valid output and is
/// reported as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Net premium paid to open the position.
    pub entry_cost: f64,
    /// Swept spot prices, strictly increasing over `[0.8·S0, 1.2·S0]`.
    pub spots: Vec<f64>,
    /// P&L if held to expiration, per swept spot.
    pub expiry_pnl: Vec<f64>,
    /// P&L if closed at the current time (T+0), per swept spot.
    pub current_pnl: Vec<f64>,
}

impl ButterflyStrategy {
    /// Create a validated butterfly from its center strike and wing width.
    ///
    /// # Errors
    /// Returns [`FlyvalError::InvalidParameter`] if `mid_strike <= 0`,
    /// `width <= 0`, `width >= mid_strike`, or either value is NaN/Inf.
    /// A non-positive width would collapse or cross the strikes
    /// (`K_low ≥ K_mid`), which is not a butterfly.
    pub fn new(mid_strike: f64, width: f64) -> error::Result<Self> {
        validate_positive(mid_strike, "mid_strike")?;
        validate_positive(width, "width")?;
        if width >= mid_strike {
            return Err(FlyvalError::InvalidParameter {
                message: format!(
                    "width must be less than mid_strike (low strike must stay positive), \
                     got width {width} with mid_strike {mid_strike}"
                ),
            });
        }
        Ok(Self { mid_strike, width })
    }

    /// Center strike K_mid.
    pub fn mid_strike(&self) -> f64 {
        self.mid_strike
    }

    /// Wing width w.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Lower wing strike `K_mid − w`.
    pub fn low_strike(&self) -> f64 {
        self.mid_strike - self.width
    }

    /// Upper wing strike `K_mid + w`.
    pub fn high_strike(&self) -> f64 {
        self.mid_strike + self.width
    }

    /// The three legs in strike order: long 1 low, short 2 mid, long 1 high.
    ///
    /// # Examples
    /// ```
    /// use flyval::ButterflyStrategy;
    ///
    /// let fly = ButterflyStrategy::new(100.0, 5.0)?;
    /// let [low, mid, high] = fly.legs();
    /// assert_eq!((low.strike, mid.strike, high.strike), (95.0, 100.0, 105.0));
    /// assert_eq!(mid.quantity, -2.0);
    /// # Ok::<(), flyval::FlyvalError>(())
    /// ```
    pub fn legs(&self) -> [OptionLeg; 3] {
        [
            OptionLeg {
                strike: self.low_strike(),
                quantity: 1.0,
            },
            OptionLeg {
                strike: self.mid_strike,
                quantity: -2.0,
            },
            OptionLeg {
                strike: self.high_strike(),
                quantity: 1.0,
            },
        ]
    }

    /// Evaluate the spread at the default sweep resolution.
    ///
    /// See [`evaluate_on_grid`](Self::evaluate_on_grid).
    pub fn evaluate(&self, market: &MarketParameters) -> error::Result<ValuationResult> {
        self.evaluate_on_grid(market, DEFAULT_GRID_POINTS)
    }

    /// Evaluate the spread over a `points`-long sweep of `[0.8·S0, 1.2·S0]`.
    ///
    /// Computes the net entry cost at the current spot, then both P&L curves:
    ///
    /// 1. entry cost: `C(S0, K_low) + C(S0, K_high) − 2·C(S0, K_mid)`;
    /// 2. expiration curve: intrinsic leg combination minus entry cost;
    /// 3. current curve: Black-Scholes leg combination minus entry cost.
    ///
    /// Pure and deterministic: same inputs, same result, nothing cached.
    /// At `expiry = 0` the two curves coincide (the pricing kernel returns
    /// intrinsic values on both the scalar and the sweep path).
    ///
    /// # Errors
    /// Returns [`FlyvalError::InvalidParameter`] if `points < 2`. Market and
    /// strategy invariants were already checked at construction.
    pub fn evaluate_on_grid(
        &self,
        market: &MarketParameters,
        points: usize,
    ) -> error::Result<ValuationResult> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            spot = market.spot(),
            vol = market.vol(),
            expiry = market.expiry(),
            rate = market.rate(),
            mid_strike = self.mid_strike,
            width = self.width,
            points,
            "butterfly valuation started"
        );

        let legs = self.legs();

        let entry_cost: f64 = legs
            .iter()
            .map(|leg| {
                leg.quantity
                    * call_price(
                        market.spot(),
                        leg.strike,
                        market.expiry(),
                        market.rate(),
                        market.vol(),
                    )
            })
            .sum();

        let spots = price_grid(market.spot(), points)?;

        let mut expiry_pnl = vec![-entry_cost; spots.len()];
        let mut current_pnl = vec![-entry_cost; spots.len()];
        for leg in &legs {
            for (pnl, &s) in expiry_pnl.iter_mut().zip(spots.iter()) {
                *pnl += leg.quantity * (s - leg.strike).max(0.0);
            }
            let leg_prices = call_prices(
                &spots,
                leg.strike,
                market.expiry(),
                market.rate(),
                market.vol(),
            );
            for (pnl, price) in current_pnl.iter_mut().zip(leg_prices) {
                *pnl += leg.quantity * price;
            }
        }

        #[cfg(feature = "logging")]
        tracing::debug!(entry_cost, "butterfly valuation complete");

        Ok(ValuationResult {
            entry_cost,
            spots,
            expiry_pnl,
            current_pnl,
        })
    }
}
