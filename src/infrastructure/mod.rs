//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - Webhook request signature validation

pub mod webhook;
