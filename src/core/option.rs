//! Option kind (call or put)
//!
//! The kind arrives from the presentation layer as free text. It is parsed
//! exactly once, here, into a closed enum; every numeric entry point takes
//! the enum and is total in it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// Option kind (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Case-insensitive parse; anything other than "call"/"put" is rejected.
    pub fn parse(kind: &str) -> EngineResult<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(EngineError::invalid_kind(kind)),
        }
    }
}

impl FromStr for OptionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        OptionKind::parse(s)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi() {
        assert_eq!(OptionKind::Call.phi(), 1.0);
        assert_eq!(OptionKind::Put.phi(), -1.0);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(OptionKind::parse("call").unwrap(), OptionKind::Call);
        assert_eq!(OptionKind::parse("CALL").unwrap(), OptionKind::Call);
        assert_eq!(OptionKind::parse("Put").unwrap(), OptionKind::Put);
        assert_eq!("pUt".parse::<OptionKind>().unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = OptionKind::parse("straddle").unwrap_err();
        assert_eq!(err, EngineError::InvalidOptionKind("straddle".to_string()));
        assert!("".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(OptionKind::Call.to_string(), "call");
        assert_eq!(OptionKind::Put.to_string().parse::<OptionKind>().unwrap(), OptionKind::Put);
    }
}
