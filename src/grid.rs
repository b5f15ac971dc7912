//! Spot-price sweep construction.
//!
//! The P&L curves are evaluated over an evenly spaced grid spanning ±20%
//! around the current spot. The span is a chart-framing choice carried over
//! from the interactive shell; the resolution is a display-quality knob, not
//! a correctness contract, as long as the grid has at least two strictly
//! increasing points.

use crate::error::{self, FlyvalError};
use crate::validate::validate_positive;

/// Lower edge of the sweep as a fraction of spot.
const SWEEP_LO: f64 = 0.8;
/// Upper edge of the sweep as a fraction of spot.
const SWEEP_HI: f64 = 1.2;

/// Default sweep resolution; enough for a smooth curve at chart widths.
pub const DEFAULT_GRID_POINTS: usize = 300;

/// Build an evenly spaced spot grid over `[0.8·spot, 1.2·spot]`.
///
/// The grid is strictly increasing with exact endpoints (the last point is
/// pinned to `1.2·spot` rather than accumulated, so no rounding drift).
///
/// # Errors
/// Returns [`FlyvalError::InvalidParameter`] if `spot` is not positive and
/// finite or `points < 2`.
pub fn price_grid(spot: f64, points: usize) -> error::Result<Vec<f64>> {
    validate_positive(spot, "spot")?;
    if points < 2 {
        return Err(FlyvalError::InvalidParameter {
            message: format!("grid needs at least 2 points, got {points}"),
        });
    }

    let lo = SWEEP_LO * spot;
    let hi = SWEEP_HI * spot;
    let step = (hi - lo) / (points - 1) as f64;

    let mut grid: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
    grid[points - 1] = hi;
    Ok(grid)
}
