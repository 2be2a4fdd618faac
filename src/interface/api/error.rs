//! HTTP mapping of domain errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::shared::DomainError;

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::InvalidSignature(_) => StatusCode::FORBIDDEN,
            DomainError::Serialization(_)
            | DomainError::Rendering(_)
            | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
