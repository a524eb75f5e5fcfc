use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::{dto::MessageResponse, repo::StoreError};

/// Errors surfaced by the auth routes. Each maps to a status code and a
/// `{ "message": ... }` body; internal causes are logged, not returned.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid request")]
    InvalidRequest,
    #[error("User already exists!")]
    DuplicateUser,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("Service temporarily unavailable")]
    ServiceUnavailable(#[source] StoreError),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidRequest | AuthError::DuplicateUser => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AuthError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate => AuthError::DuplicateUser,
            other => AuthError::ServiceUnavailable(other),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::ServiceUnavailable(e) => error!(error = %e, "user store failure"),
            AuthError::Internal(e) => error!(error = %e, "internal auth failure"),
            _ => {}
        }
        (self.status_code(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
