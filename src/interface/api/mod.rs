//! API interface implementations

pub mod dto;
pub mod error;
pub mod metrics_handler;
pub mod router;
pub mod voice_handler;

pub use dto::ApiResponse;
pub use metrics_handler::{detached_metrics, init_metrics};
pub use router::build_router;
pub use voice_handler::AppState;
