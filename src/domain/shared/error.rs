//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Rendering error: {0}")]
    Rendering(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
