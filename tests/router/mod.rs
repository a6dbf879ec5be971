//! End-to-end tests through the full router, including extractors, JSON rejections and
//! OpenAPI docs.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{json_body, TestContextExt};

fn app(test: &TestContext) -> Router {
    holocron::router::routes().with_state(test.into_app_state())
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect 201 when creating a planet over HTTP
#[tokio::test]
async fn post_planet_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/planets",
            serde_json::json!({ "name": "Tatooine", "climate": "arid" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Tatooine");
    assert_eq!(body["climate"], "arid");

    Ok(())
}

/// Expect 400 with an error body for malformed JSON
#[tokio::test]
async fn malformed_json_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/people")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["error"].as_str().is_some());

    Ok(())
}

/// Expect 404 with message for a person that does not exist
#[tokio::test]
async fn get_missing_person_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/people/999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Person not found");

    Ok(())
}

/// Expect a JSON error body when the path ID is not an integer
#[tokio::test]
async fn non_integer_id_returns_json_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/people/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid path parameter"));

    Ok(())
}

/// Expect 400 rather than a database error for a name wider than its column
#[tokio::test]
async fn overlong_name_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/vehicles",
            serde_json::json!({ "name": "x".repeat(121) }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Field name must be at most 120 characters");

    Ok(())
}

/// Expect 400 when the X-User-Id header is missing
#[tokio::test]
async fn favorites_require_acting_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/users/favorites"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Missing X-User-Id header");

    Ok(())
}

/// Expect 400 for a favorite kind outside the catalog
#[tokio::test]
async fn unknown_favorite_kind_returns_bad_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/favorite/starships/1")
        .header("x-user-id", user.id.to_string())
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Unknown favorite kind: starships");

    Ok(())
}

/// Expect a favorite added over HTTP to show up in the user's favorites
#[tokio::test]
async fn favorite_round_trip_over_http() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;
    let hoth = test.catalog().insert_planet("Hoth").await?;

    let add = Request::builder()
        .method(Method::POST)
        .uri(format!("/favorite/planets/{}", hoth.id))
        .header("x-user-id", user.id.to_string())
        .body(Body::empty())
        .unwrap();
    let added = app(&test).oneshot(add).await.unwrap();
    let list = Request::builder()
        .method(Method::GET)
        .uri("/users/favorites")
        .header("x-user-id", user.id.to_string())
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(list).await.unwrap();

    assert_eq!(added.status(), StatusCode::CREATED);
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["kind"], "planet");
    assert_eq!(body[0]["name"], "Hoth");

    Ok(())
}

/// Expect a species created with a homeworld to appear in that planet's fauna
#[tokio::test]
async fn species_homeworld_shows_in_planet_fauna() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let planet = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/planets",
            serde_json::json!({ "name": "Tatooine" }),
        ))
        .await
        .unwrap();
    let planet = json_body(planet).await;
    let planet_id = planet["id"].as_i64().unwrap();
    let species = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/species",
            serde_json::json!({ "name": "human", "homeworld_id": planet_id }),
        ))
        .await
        .unwrap();
    let resp = app(&test)
        .oneshot(empty_request(
            Method::GET,
            &format!("/planets/{planet_id}"),
        ))
        .await
        .unwrap();

    assert_eq!(species.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["fauna"], serde_json::json!(["human"]));

    Ok(())
}

/// Expect a confirmation message when deleting a vehicle
#[tokio::test]
async fn delete_vehicle_returns_message() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let speeder = test.catalog().insert_vehicle("Snowspeeder").await?;

    let resp = app(&test)
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/vehicles/{}", speeder.id),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Vehicle deleted");

    Ok(())
}

/// Expect the OpenAPI document to list catalog paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"].get("/people/{person_id}").is_some());
    assert!(body["paths"].get("/favorite/{kind}/{item_id}").is_some());

    Ok(())
}
