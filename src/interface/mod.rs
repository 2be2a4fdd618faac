//! Interface layer - External interfaces
//!
//! This layer handles:
//! - The inbound voice webhook
//! - Health and metrics endpoints
//! - Request/response formatting

pub mod api;
