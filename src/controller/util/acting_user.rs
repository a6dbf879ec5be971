use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::{validation::ValidationError, Error};

/// Header carrying the ID of the user a favorites request acts for.
pub static ACTING_USER_HEADER: &str = "x-user-id";

/// ID of the acting user, read from the `X-User-Id` request header.
///
/// Only the header's shape is checked here, whether the user exists is up to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub i32);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ACTING_USER_HEADER)
            .ok_or(ValidationError::MissingActingUser)?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .ok_or_else(|| {
                ValidationError::InvalidActingUser(String::from_utf8_lossy(value.as_bytes()).into())
            })?;

        Ok(ActingUser(user_id))
    }
}
