//! Webhook request authentication

pub mod signature;

pub use signature::{SignatureValidator, SIGNATURE_HEADER};
