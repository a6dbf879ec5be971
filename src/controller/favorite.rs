use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::acting_user::ActingUser,
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        favorite::FavoriteDto,
        kind::{ItemKind, ItemRef},
    },
    service::favorite::FavoriteService,
};

pub static FAVORITE_TAG: &str = "favorites";

/// List the acting user's favorites
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    params(("x-user-id" = i32, Header, description = "ID of the acting user")),
    responses(
        (status = 200, description = "Favorites in the order they were added", body = Vec<FavoriteDto>),
        (status = 400, description = "Missing or invalid X-User-Id header", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).list(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a catalog item to the acting user's favorites
///
/// `kind` accepts `person`/`people`, `planet`/`planets`, `species` and `vehicle`/`vehicles`.
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = String, Path, description = "Kind of item to favorite"),
        ("item_id" = i32, Path, description = "ID of the item"),
        ("x-user-id" = i32, Header, description = "ID of the acting user")
    ),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteDto),
        (status = 400, description = "Unknown kind, invalid header or already in favorites", body = ErrorDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((kind, item_id)) = path?;
    let item = ItemRef::new(kind.parse::<ItemKind>()?, item_id);

    let favorite = FavoriteService::new(&state.db).add(user_id, item).await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a catalog item from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = String, Path, description = "Kind of the favorited item"),
        ("item_id" = i32, Path, description = "ID of the item"),
        ("x-user-id" = i32, Header, description = "ID of the acting user")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Unknown kind or invalid header", body = ErrorDto),
        (status = 404, description = "User not found or item not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((kind, item_id)) = path?;
    let item = ItemRef::new(kind.parse::<ItemKind>()?, item_id);

    FavoriteService::new(&state.db).remove(user_id, item).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite deleted"))))
}

/// Remove one of the acting user's favorites by its ID
#[utoipa::path(
    delete,
    path = "/favorites/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("favorite_id" = i32, Path, description = "ID of the favorite"),
        ("x-user-id" = i32, Header, description = "ID of the acting user")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Missing or invalid X-User-Id header", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_by_id(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(favorite_id) = path?;

    FavoriteService::new(&state.db)
        .remove_by_id(user_id, favorite_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite deleted"))))
}
