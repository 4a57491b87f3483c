//! Error types for the pricing engine

use thiserror::Error;

/// Errors the engine can raise.
///
/// Deliberately small: degenerate inputs (T <= 0, vol <= 0) are a silent
/// zero-value policy rather than an error, and a failed implied-vol search
/// comes back as `None` rather than `Err`. The only hard failure is an
/// option kind that is neither "call" nor "put".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid option kind '{0}'. Use 'call' or 'put'.")]
    InvalidOptionKind(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidOptionKind(kind.into())
    }
}
