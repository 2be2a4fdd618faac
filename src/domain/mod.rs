//! Domain layer - Core business logic and rules
//!
//! This layer contains:
//! - Value Objects: the call target decision and client names
//! - Domain Services: routing an inbound call to a voice response
//! - The voice response document and its XML rendering

pub mod call;
pub mod shared;
pub mod voice_response;

// Re-export commonly used types
pub use shared::{DomainError, Result};
