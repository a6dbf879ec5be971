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
        person::{PersonDto, PersonInputDto},
    },
    service::person::PersonService,
};

pub static PERSON_TAG: &str = "people";

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "All people ordered by ID", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Create a person
///
/// `name` is required. `species_id`, `homeworld_id` & `vehicles_ids` must reference
/// existing rows.
#[utoipa::path(
    post,
    path = "/people",
    tag = PERSON_TAG,
    request_body = PersonInputDto,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 400, description = "Missing name, invalid body or unknown relationship ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    let person = PersonService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    tag = PERSON_TAG,
    params(("person_id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Person found", body = PersonDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(person_id) = path?;

    let person = PersonService::new(&state.db).get(person_id).await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Update a person
///
/// Only fields present in the body are changed. `vehicles_ids` replaces the person's
/// vehicles.
#[utoipa::path(
    put,
    path = "/people/{person_id}",
    tag = PERSON_TAG,
    params(("person_id" = i32, Path, description = "ID of the person")),
    request_body = PersonInputDto,
    responses(
        (status = 200, description = "Person updated", body = PersonDto),
        (status = 400, description = "Invalid body or unknown relationship ID", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PersonInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(person_id) = path?;
    let Json(input) = payload?;

    let person = PersonService::new(&state.db)
        .update(person_id, input)
        .await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Delete a person
///
/// Also removes the person's pilot assignments and every favorite of them.
#[utoipa::path(
    delete,
    path = "/people/{person_id}",
    tag = PERSON_TAG,
    params(("person_id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(person_id) = path?;

    PersonService::new(&state.db).delete(person_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Person deleted"))))
}
