//! Implied volatility solver
//!
//! Inverts the Black-Scholes price with Brent's method on a fixed volatility
//! bracket. The contract is best-effort: a bracket without a sign change, a
//! non-finite evaluation, or a failure to converge all come back as `None`,
//! never as an error or a panic.

use crate::core::OptionKind;
use crate::models::black_scholes::price;

/// Search bracket: 0.001% to 300% annualized vol
const VOL_LO: f64 = 1e-5;
const VOL_HI: f64 = 3.0;

/// Absolute convergence tolerance on vol
const TOL: f64 = 1e-9;
const MAX_ITER: usize = 100;

/// Implied volatility from an observed market price.
///
/// Returns `None` when no vol in [1e-5, 3] reproduces the market price.
/// Degenerate contracts (time <= 0) always price to zero, so any positive
/// market price yields `None` for them.
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    kind: OptionKind,
) -> Option<f64> {
    let objective = |vol: f64| {
        if vol <= 0.0 {
            // Sentinel branch: keeps the search away from vol = 0
            market_price
        } else {
            price(spot, strike, time, rate, vol, kind) - market_price
        }
    };

    let root = brent(objective, VOL_LO, VOL_HI, TOL, MAX_ITER);
    if root.is_none() {
        tracing::debug!(
            market_price,
            spot,
            strike,
            time,
            %kind,
            "implied vol not found in [{VOL_LO}, {VOL_HI}]"
        );
    }
    root
}

/// Brent's method: root of `f` on [x1, x2], requiring a sign change.
///
/// Inverse quadratic interpolation with secant and bisection safeguards.
/// Returns `None` if the root is not bracketed, an evaluation goes
/// non-finite, or the iteration cap is hit.
fn brent<F>(f: F, x1: f64, x2: f64, tol: f64, max_iter: usize) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let mut a = x1;
    let mut b = x2;
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() || !fb.is_finite() {
        return None;
    }
    if (fa > 0.0 && fb > 0.0) || (fa < 0.0 && fb < 0.0) {
        return None;
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = 0.0;
    let mut e = 0.0;

    for _ in 0..max_iter {
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            // Root moved between b and a: reset the contrapoint
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Some(b);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Attempt inverse quadratic interpolation
            let s = fb / fa;
            let (mut p, mut q);
            if a == c {
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                let r0 = fa / fc;
                let r1 = fb / fc;
                p = s * (2.0 * xm * r0 * (r0 - r1) - (b - a) * (r1 - 1.0));
                q = (r0 - 1.0) * (r1 - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                // Interpolation accepted
                e = d;
                d = p / q;
            } else {
                // Fall back to bisection
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += if xm >= 0.0 { tol1 } else { -tol1 };
        }
        fb = f(b);
        if !fb.is_finite() {
            return None;
        }
    }

    None
}
