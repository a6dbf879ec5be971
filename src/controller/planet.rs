use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        planet::{PlanetDto, PlanetInputDto},
    },
    service::planet::PlanetService,
};

pub static PLANET_TAG: &str = "planets";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets ordered by ID", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = PlanetInputDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing name, invalid body or unknown relationship ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<PlanetInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    let planet = PlanetService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;

    let planet = PlanetService::new(&state.db).get(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Update a planet
///
/// `residents_ids` & `fauna_ids` replace the planet's residents and native species, an empty
/// list clears them.
#[utoipa::path(
    put,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    request_body = PlanetInputDto,
    responses(
        (status = 200, description = "Planet updated", body = PlanetDto),
        (status = 400, description = "Invalid body or unknown relationship ID", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PlanetInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;
    let Json(input) = payload?;

    let planet = PlanetService::new(&state.db)
        .update(planet_id, input)
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path?;

    PlanetService::new(&state.db).delete(planet_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Planet deleted"))))
}
