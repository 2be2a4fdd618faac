//! Shared kernel - Common types used across the call and voice response contexts

pub mod error;
pub mod result;
pub mod value_objects;

pub use error::DomainError;
pub use result::Result;
pub use value_objects::*;
