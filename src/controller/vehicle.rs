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
        vehicle::{VehicleDto, VehicleInputDto},
    },
    service::vehicle::VehicleService,
};

pub static VEHICLE_TAG: &str = "vehicles";

/// List all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles ordered by ID", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = VehicleService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = VehicleInputDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Missing name, invalid body or unknown pilot ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(input) = payload?;

    let vehicle = VehicleService::new(&state.db).create(input).await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Vehicle found", body = VehicleDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(vehicle_id) = path?;

    let vehicle = VehicleService::new(&state.db).get(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Update a vehicle
///
/// `pilots_ids` replaces the vehicle's pilots.
#[utoipa::path(
    put,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    request_body = VehicleInputDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 400, description = "Invalid body or unknown pilot ID", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<VehicleInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(vehicle_id) = path?;
    let Json(input) = payload?;

    let vehicle = VehicleService::new(&state.db)
        .update(vehicle_id, input)
        .await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(("vehicle_id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(vehicle_id) = path?;

    VehicleService::new(&state.db).delete(vehicle_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Vehicle deleted"))))
}
