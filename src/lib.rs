//! Ringback - Inbound voice call webhook router
//!
//! Answers the telephony platform's inbound-call webhook with a voice
//! response document: calls dialed to `client:<name>` are announced and
//! bridged to that client endpoint, every other call hears a greeting and
//! is ended.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
