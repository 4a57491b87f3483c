//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation
//! - P&L against a cost basis
//!
//! Degenerate inputs (time or vol <= 0) price to exactly 0.0 with all-zero
//! Greeks; this is policy, not an error. Non-positive spot or strike is not
//! validated and propagates NaN through the log term.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{Greeks, OptionKind};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes European option price
///
/// Time is in years, vol and rate are annualized. An expired or zero-vol
/// contract is worth exactly 0.0.
pub fn price(spot: f64, strike: f64, time: f64, rate: f64, vol: f64, kind: OptionKind) -> f64 {
    if time <= 0.0 || vol <= 0.0 {
        return 0.0;
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();

    match kind {
        OptionKind::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionKind::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black-Scholes Greeks
///
/// Same degenerate policy as [`price`]: time or vol <= 0 yields all zeros.
pub fn greeks(spot: f64, strike: f64, time: f64, rate: f64, vol: f64, kind: OptionKind) -> Greeks {
    if time <= 0.0 || vol <= 0.0 {
        return Greeks::zero();
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    // Delta
    let delta = match kind {
        OptionKind::Call => norm_cdf(d1),
        OptionKind::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma (same for call and put)
    let gamma = pdf_d1 / (spot * vol * sqrt_t);

    // Vega (same for call and put, per 1-point vol move)
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    // Theta (per calendar day)
    let term1 = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match kind {
        OptionKind::Call => (term1 - rate * strike * df * norm_cdf(d2)) / 365.0,
        OptionKind::Put => (term1 + rate * strike * df * norm_cdf(-d2)) / 365.0,
    };

    // Rho (per 1% rate move)
    let rho = match kind {
        OptionKind::Call => strike * time * df * norm_cdf(d2) / 100.0,
        OptionKind::Put => -strike * time * df * norm_cdf(-d2) / 100.0,
    };

    Greeks::new(delta, gamma, vega, theta, rho)
}

/// P&L of a position: model value minus the purchase price.
///
/// The purchase price is taken literally; negative cost bases are allowed.
pub fn pnl(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    purchase_price: f64,
    kind: OptionKind,
) -> f64 {
    price(spot, strike, time, rate, vol, kind) - purchase_price
}
