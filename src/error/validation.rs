use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{error::error_response, model::kind::EntityKind};

/// Client input that cannot be accepted.
///
/// Every variant maps to 400 Bad Request. Validation always runs before any write so a
/// request failing with one of these leaves the database untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field {0} must not be blank")]
    BlankField(&'static str),
    #[error("Field {field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Invalid {field}: no {kind} found for ID(s) {ids:?}")]
    UnresolvedReferences {
        field: &'static str,
        kind: EntityKind,
        ids: Vec<i32>,
    },
    #[error("Unknown favorite kind: {0}")]
    UnknownItemKind(String),
    #[error("Missing X-User-Id header")]
    MissingActingUser,
    #[error("Invalid X-User-Id header: {0}")]
    InvalidActingUser(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
