use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered user. The password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// All fields are required on create. On update only the fields present are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserInputDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
