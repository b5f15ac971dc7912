//! Integration tests for the flyval engine.
//!
//! Exercises the full path from parameter snapshot through butterfly
//! construction, entry-cost computation, and both P&L curves, plus the
//! serde validation boundary and cross-thread evaluation.

use std::sync::Arc;
use std::thread;

use approx::assert_abs_diff_eq;
use flyval::{
    call_price, market::expiry_from_days, ButterflyStrategy, FlyvalError, MarketParameters,
    ValuationResult, DEFAULT_GRID_POINTS,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reference scenario: S0=100, σ=25%, T=30 days, r=4%, K_mid=100, w=5.
fn reference_valuation() -> ValuationResult {
    let market = MarketParameters::new(100.0, 0.25, expiry_from_days(30.0), 0.04).unwrap();
    let fly = ButterflyStrategy::new(100.0, 5.0).unwrap();
    fly.evaluate(&market).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: reference scenario entry cost
// ---------------------------------------------------------------------------

#[test]
fn reference_entry_cost_between_zero_and_width() {
    // A butterfly can never cost more than its maximum payoff (the width),
    // and a 30-day at-the-money fly always carries some positive premium.
    let result = reference_valuation();
    assert!(
        result.entry_cost > 0.0 && result.entry_cost < 5.0,
        "entry cost {} outside (0, 5)",
        result.entry_cost
    );
}

#[test]
fn reference_entry_cost_matches_leg_prices() {
    let result = reference_valuation();
    let t = expiry_from_days(30.0);
    let by_hand = call_price(100.0, 95.0, t, 0.04, 0.25)
        + call_price(100.0, 105.0, t, 0.04, 0.25)
        - 2.0 * call_price(100.0, 100.0, t, 0.04, 0.25);
    assert_abs_diff_eq!(result.entry_cost, by_hand, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// Test 2: curve shape
// ---------------------------------------------------------------------------

#[test]
fn sweep_spans_eighty_to_one_twenty_percent_of_spot() {
    let result = reference_valuation();
    assert_eq!(result.spots.len(), DEFAULT_GRID_POINTS);
    assert_abs_diff_eq!(result.spots[0], 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.spots[result.spots.len() - 1], 120.0, epsilon = 1e-9);
    assert!(result.spots.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn expiration_curve_peaks_at_mid_strike() {
    // The expiration tent has its maximum where the spot equals K_mid; every
    // swept point must sit at or below the peak value w − entry_cost.
    let result = reference_valuation();
    let peak = 5.0 - result.entry_cost;
    for (&s, &pnl) in result.spots.iter().zip(result.expiry_pnl.iter()) {
        assert!(
            pnl <= peak + 1e-9,
            "expiration P&L {pnl} at spot {s} exceeds peak {peak}"
        );
    }
    // The peak is actually attained near the center strike.
    let max_pnl = result.expiry_pnl.iter().cloned().fold(f64::MIN, f64::max);
    assert!((max_pnl - peak).abs() < 0.05);
}

#[test]
fn wings_lose_exactly_the_entry_cost_at_expiration() {
    // Outside [K_low, K_high] every leg combination cancels, leaving −cost.
    let result = reference_valuation();
    let first = result.expiry_pnl[0]; // spot 80, well below K_low=95
    let last = result.expiry_pnl[result.expiry_pnl.len() - 1]; // spot 120
    assert_abs_diff_eq!(first, -result.entry_cost, epsilon = 1e-9);
    assert_abs_diff_eq!(last, -result.entry_cost, epsilon = 1e-9);
}

#[test]
fn current_curve_lies_below_expiration_peak() {
    // With time left, the T+0 curve is a smoothed version of the tent: flatter
    // at the peak, above the tent in the wings (remaining time value).
    let result = reference_valuation();
    let tent_peak = 5.0 - result.entry_cost;
    let current_max = result.current_pnl.iter().cloned().fold(f64::MIN, f64::max);
    assert!(current_max < tent_peak);
    assert!(result.current_pnl[0] > result.expiry_pnl[0]);
}

// ---------------------------------------------------------------------------
// Test 3: convergence as expiry shrinks
// ---------------------------------------------------------------------------

#[test]
fn current_curve_converges_to_expiration_as_expiry_shrinks() {
    let fly = ButterflyStrategy::new(100.0, 5.0).unwrap();
    let mut worst_gap_prev = f64::INFINITY;
    for days in [30.0, 10.0, 2.0, 0.1] {
        let market = MarketParameters::new(100.0, 0.25, expiry_from_days(days), 0.04).unwrap();
        let result = fly.evaluate(&market).unwrap();
        let worst_gap = result
            .current_pnl
            .iter()
            .zip(result.expiry_pnl.iter())
            .map(|(c, e)| (c - e).abs())
            .fold(0.0, f64::max);
        assert!(
            worst_gap < worst_gap_prev,
            "gap should shrink with expiry: {worst_gap} vs {worst_gap_prev} at {days} days"
        );
        worst_gap_prev = worst_gap;
    }
}

#[test]
fn at_zero_expiry_both_curves_are_intrinsic_minus_cost() {
    let fly = ButterflyStrategy::new(100.0, 5.0).unwrap();
    let market = MarketParameters::new(100.0, 0.25, 0.0, 0.04).unwrap();
    let result = fly.evaluate(&market).unwrap();
    // Expired entry cost is the intrinsic combination at S0=100: 5 + 0 − 0.
    assert_abs_diff_eq!(result.entry_cost, 5.0, epsilon = 1e-12);
    for ((&s, &e), &c) in result
        .spots
        .iter()
        .zip(result.expiry_pnl.iter())
        .zip(result.current_pnl.iter())
    {
        let intrinsic = (s - 95.0_f64).max(0.0) + (s - 105.0_f64).max(0.0)
            - 2.0 * (s - 100.0_f64).max(0.0);
        assert_abs_diff_eq!(e, intrinsic - result.entry_cost, epsilon = 1e-12);
        assert_abs_diff_eq!(c, e, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// Test 4: rejected inputs
// ---------------------------------------------------------------------------

#[test]
fn rejections_carry_invalid_parameter_errors() {
    let cases = [
        MarketParameters::new(-1.0, 0.25, 0.1, 0.04),
        MarketParameters::new(100.0, 0.0, 0.1, 0.04),
        MarketParameters::new(100.0, 0.25, -0.1, 0.04),
    ];
    for case in cases {
        match case {
            Err(FlyvalError::InvalidParameter { message }) => {
                assert!(message.contains("got"), "message lacks value: {message}");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
    assert!(ButterflyStrategy::new(100.0, 0.0).is_err());
    assert!(ButterflyStrategy::new(100.0, -1.0).is_err());
}

// ---------------------------------------------------------------------------
// Test 5: serde boundary
// ---------------------------------------------------------------------------

#[test]
fn market_parameters_round_trip_json() {
    let market = MarketParameters::new(100.0, 0.25, 0.5, 0.04).unwrap();
    let json = serde_json::to_string(&market).unwrap();
    let back: MarketParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(market, back);
}

#[test]
fn deserialization_re_runs_validation() {
    // A shell (or a saved session file) cannot smuggle invalid parameters in.
    let err = serde_json::from_str::<MarketParameters>(
        r#"{"spot": 100.0, "vol": -0.25, "expiry": 0.5, "rate": 0.04}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("vol"));

    let err = serde_json::from_str::<ButterflyStrategy>(r#"{"mid_strike": 100.0, "width": 0.0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("width"));
}

#[test]
fn valuation_result_serializes_for_the_shell() {
    let result = reference_valuation();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["entry_cost"].is_number());
    assert_eq!(
        json["spots"].as_array().unwrap().len(),
        json["current_pnl"].as_array().unwrap().len()
    );
}

// ---------------------------------------------------------------------------
// Test 6: thread safety
// ---------------------------------------------------------------------------

#[test]
fn evaluation_works_across_threads() {
    let market = Arc::new(MarketParameters::new(100.0, 0.25, 0.25, 0.04).unwrap());
    let fly = Arc::new(ButterflyStrategy::new(100.0, 5.0).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let market = Arc::clone(&market);
            let fly = Arc::clone(&fly);
            thread::spawn(move || fly.evaluate(&market).unwrap().entry_cost)
        })
        .collect();

    let costs: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for &c in &costs[1..] {
        assert_eq!(c, costs[0]);
    }
}
