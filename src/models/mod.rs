//! Numerical models
//!
//! - black_scholes: closed-form pricing, Greeks, and P&L
//! - implied_vol: Brent inversion of the pricing formula
//! - grid: spot x volatility sensitivity tables

pub mod black_scholes;
pub mod grid;
pub mod implied_vol;

pub use black_scholes::{d1, d2, greeks, norm_cdf, norm_pdf, pnl, price};
pub use grid::{pnl_grid, price_grid, SensitivityGrid};
pub use implied_vol::implied_volatility;
