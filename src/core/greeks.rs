//! Option Greeks
//!
//! First-order sensitivities for a single option evaluation.
//! Conventions: vega per 1-point vol move, rho per 1% rate move, theta per
//! calendar day.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ (per 1-point vol move)
    pub vega: f64,
    /// Theta: dV/dt (decay per calendar day)
    pub theta: f64,
    /// Rho: dV/dr (per 1% rate move)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// All-zero Greeks, used for degenerate inputs (expired or zero-vol)
    pub fn zero() -> Self {
        Self::default()
    }

    /// Fixed-order tuple: (delta, gamma, vega, theta, rho)
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.delta, self.gamma, self.vega, self.theta, self.rho)
    }
}
