//! Call bounded context - classifies inbound calls and decides how to answer them

pub mod event;
pub mod service;
pub mod value_object;

pub use event::CallEvent;
pub use service::{respond, route, CONNECTING_PREFIX, GENERIC_GREETING};
pub use value_object::{CallTarget, CLIENT_PREFIX};
