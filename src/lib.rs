//! # BS Engine - Black-Scholes Option Analytics
//!
//! A stateless pricing and analytics engine for European options under the
//! Black-Scholes model.
//!
//! ## Overview
//!
//! Every entry point is a pure function of its scalar inputs: no market data,
//! no persistence, no shared state. The engine is the numerical core behind a
//! dashboard-style presentation layer, which stays out of this crate.
//!
//! ## Key Components
//!
//! - **Pricing**: closed-form European call/put prices
//! - **Greeks**: analytic delta, gamma, vega, theta, rho
//! - **P&L**: model value against a cost basis
//! - **Implied Volatility**: Brent's method on a fixed vol bracket
//! - **Sensitivity Grids**: price and P&L over spot x volatility ranges
//!
//! ## Usage
//!
//! ```rust
//! use bs_engine::prelude::*;
//!
//! let kind: OptionKind = "call".parse().unwrap();
//!
//! // Price an ATM one-year call
//! let value = price(100.0, 100.0, 1.0, 0.05, 0.2, kind);
//! assert!((value - 10.45).abs() < 0.01);
//!
//! // Full Greeks for the same contract
//! let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2, kind);
//! assert!(g.delta > 0.5 && g.delta < 0.7);
//!
//! // Recover the volatility from the price
//! let iv = implied_volatility(value, 100.0, 100.0, 1.0, 0.05, kind).unwrap();
//! assert!((iv - 0.2).abs() < 1e-6);
//! ```
//!
//! ## What This Engine Does NOT Do
//!
//! - American exercise or early-exercise premiums
//! - Monte Carlo or PDE pricing
//! - Dividend yields or day-count conventions
//! - Fetch, cache, or display anything

pub mod core;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{EngineError, EngineResult, Greeks, OptionKind};

    // Pricing and Greeks
    pub use crate::models::{d1, d2, greeks, norm_cdf, norm_pdf, pnl, price};

    // Implied volatility
    pub use crate::models::implied_volatility;

    // Sensitivity grids
    pub use crate::models::{pnl_grid, price_grid, SensitivityGrid};
}

// Re-export main types at crate root
pub use crate::core::{EngineError, EngineResult, Greeks, OptionKind};
