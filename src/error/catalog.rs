use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    error::error_response,
    model::kind::{EntityKind, ItemRef},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: i32 },
    #[error("Favorite {} not found", .0.kind)]
    FavoriteNotFound(ItemRef),
    #[error("{} already in favorites", .0.kind.label())]
    DuplicateFavorite(ItemRef),
    #[error("Email {0} is already registered")]
    DuplicateEmail(String),
}

impl CatalogError {
    /// Shorthand for [`CatalogError::NotFound`].
    pub fn not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }

    /// Error mapper for writes guarded by a unique index.
    ///
    /// A unique constraint violation becomes `duplicate`, any other database error is passed
    /// through as [`crate::error::Error::DbErr`].
    pub(crate) fn on_conflict(duplicate: Self) -> impl FnOnce(DbErr) -> crate::error::Error {
        move |err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => duplicate.into(),
            _ => err.into(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { kind, id } => {
                tracing::debug!(kind = %kind, id = %id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::FavoriteNotFound(item) => {
                tracing::debug!(kind = %item.kind, id = %item.id, "{}", self);

                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::DuplicateFavorite(_) | Self::DuplicateEmail(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}
