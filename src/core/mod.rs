//! Core data types for the pricing engine
//!
//! Defines fundamental types:
//! - OptionKind: Call/Put, parsed once at the boundary
//! - Greeks: the five first-order sensitivities
//! - EngineError: error taxonomy

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
