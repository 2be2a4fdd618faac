//! Voice response context - declarative call instructions returned to the platform

pub mod document;
pub mod render;

pub use document::{Dial, DialNoun, Say, Verb, VoiceResponse};
