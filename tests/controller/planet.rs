use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::planet::{create_planet, delete_planet, get_planet, get_planets, update_planet},
    model::planet::PlanetInputDto,
};

use super::*;

/// Expect 201 with residents listed by name
#[tokio::test]
async fn create_returns_residents() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.catalog().insert_person("Luke Skywalker", None, None).await?;
    let owen = test.catalog().insert_person("Owen Lars", None, None).await?;

    let input = PlanetInputDto {
        name: Some("Tatooine".to_string()),
        population: Some(200_000),
        residents_ids: Some(vec![luke.id, owen.id]),
        ..Default::default()
    };
    let result = create_planet(State(test.into_app_state()), Ok(Json(input))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Tatooine");
    assert_eq!(body["population"], 200_000);
    assert_eq!(
        body["residents"],
        serde_json::json!(["Luke Skywalker", "Owen Lars"])
    );
    assert_eq!(body["fauna"], serde_json::json!([]));

    Ok(())
}

/// Expect 400 and nothing persisted when the name is missing
#[tokio::test]
async fn create_fails_for_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let input = PlanetInputDto {
        climate: Some("temperate".to_string()),
        ..Default::default()
    };
    let result = create_planet(State(test.into_app_state()), Ok(Json(input))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let list = get_planets(State(test.into_app_state())).await;
    let body = json_body(list.unwrap().into_response()).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expect 200 with an emptied residents list
#[tokio::test]
async fn update_clears_residents() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    test.catalog()
        .insert_person("Luke Skywalker", None, Some(tatooine.id))
        .await?;

    let input = PlanetInputDto {
        residents_ids: Some(Vec::new()),
        ..Default::default()
    };
    let result = update_planet(
        State(test.into_app_state()),
        Ok(Path(tatooine.id)),
        Ok(Json(input)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["residents"], serde_json::json!([]));
    assert_eq!(body["name"], "Tatooine");

    Ok(())
}

/// Expect 404 once the planet is deleted
#[tokio::test]
async fn get_fails_after_delete() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;

    let deleted = delete_planet(State(test.into_app_state()), Ok(Path(tatooine.id))).await;
    let result = get_planet(State(test.into_app_state()), Ok(Path(tatooine.id))).await;

    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::OK);
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Planet not found");

    Ok(())
}
