//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. Swagger UI is
//! served at `/api/docs` and the generated document at `/api/docs/openapi.json`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered through the same `routes!` call.
///
/// # Registered Endpoints
/// - `GET|POST /users`, `GET|PUT|DELETE /users/{user_id}`
/// - `GET|POST /people`, `GET|PUT|DELETE /people/{person_id}`
/// - `GET|POST /planets`, `GET|PUT|DELETE /planets/{planet_id}`
/// - `GET|POST /species`, `GET|PUT|DELETE /species/{species_id}`
/// - `GET|POST /vehicles`, `GET|PUT|DELETE /vehicles/{vehicle_id}`
/// - `GET /users/favorites`
/// - `POST|DELETE /favorite/{kind}/{item_id}`, `DELETE /favorites/{favorite_id}`
///
/// CORS is permissive and every request is traced.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron Star Wars catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User accounts"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites of the user given by the X-User-Id header"),
        (name = controller::person::PERSON_TAG, description = "People of the catalog"),
        (name = controller::planet::PLANET_TAG, description = "Planets of the catalog"),
        (name = controller::species::SPECIES_TAG, description = "Species of the catalog"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicles of the catalog"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .routes(routes!(controller::favorite::remove_favorite_by_id))
        .routes(routes!(
            controller::person::get_people,
            controller::person::create_person
        ))
        .routes(routes!(
            controller::person::get_person,
            controller::person::update_person,
            controller::person::delete_person
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::species::get_all_species,
            controller::species::create_species
        ))
        .routes(routes!(
            controller::species::get_species,
            controller::species::update_species,
            controller::species::delete_species
        ))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
