//! Application layer - Use cases and application services
//!
//! This layer orchestrates domain objects to fulfill use cases:
//! - Answering an inbound call webhook with a rendered voice response

pub mod inbound_call;

pub use inbound_call::{AnsweredCall, InboundCallService};
