//! Error types for the compatibility engine.

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Every variant describes a contract violation by the caller. The engine is
/// pure, so retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MatchError {
    pub fn invalid(message: impl Into<String>) -> Self {
        MatchError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
