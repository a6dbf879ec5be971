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
        species::{SpeciesDto, SpeciesInputDto},
    },
    service::species::SpeciesService,
};

pub static SPECIES_TAG: &str = "species";

/// List all species
#[utoipa::path(
    get,
    path = "/species",
    tag = SPECIES_TAG,
    responses(
        (status = 200, description = "All species ordered by ID", body = Vec<SpeciesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_species(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let species = SpeciesService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(species)))
}

/// Create a species
#[utoipa::path(
    post,
    path = "/species",
    tag = SPECIES_TAG,
    request_body = SpeciesInputDto,
    responses(
        (status = 201, description = "Species created", body = SpeciesDto),
        (status = 400, description = "Missing name, invalid body or unknown relationship ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_species(
    State(state): State<AppState>,
    payload: Result<Json<SpeciesInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    let species = SpeciesService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(species)))
}

/// Get a species by ID
#[utoipa::path(
    get,
    path = "/species/{species_id}",
    tag = SPECIES_TAG,
    params(("species_id" = i32, Path, description = "ID of the species")),
    responses(
        (status = 200, description = "Species found", body = SpeciesDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(species_id) = path?;

    let species = SpeciesService::new(&state.db).get(species_id).await?;

    Ok((StatusCode::OK, Json(species)))
}

/// Update a species
#[utoipa::path(
    put,
    path = "/species/{species_id}",
    tag = SPECIES_TAG,
    params(("species_id" = i32, Path, description = "ID of the species")),
    request_body = SpeciesInputDto,
    responses(
        (status = 200, description = "Species updated", body = SpeciesDto),
        (status = 400, description = "Invalid body or unknown relationship ID", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_species(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SpeciesInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(species_id) = path?;
    let Json(input) = payload?;

    let species = SpeciesService::new(&state.db)
        .update(species_id, input)
        .await?;

    Ok((StatusCode::OK, Json(species)))
}

/// Delete a species
#[utoipa::path(
    delete,
    path = "/species/{species_id}",
    tag = SPECIES_TAG,
    params(("species_id" = i32, Path, description = "ID of the species")),
    responses(
        (status = 200, description = "Species deleted", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_species(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(species_id) = path?;

    SpeciesService::new(&state.db).delete(species_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Species deleted"))))
}
