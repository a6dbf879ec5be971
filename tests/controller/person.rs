use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::person::{create_person, delete_person, get_people, get_person, update_person},
    model::person::PersonInputDto,
};

use super::*;

/// Expect 201 with species, homeworld & vehicles resolved to names
#[tokio::test]
async fn create_returns_resolved_person() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    let human = test.catalog().insert_species("Human", Some(tatooine.id)).await?;
    let speeder = test.catalog().insert_vehicle("Snowspeeder").await?;

    let input = PersonInputDto {
        name: Some("Luke Skywalker".to_string()),
        gender: Some("male".to_string()),
        species_id: Some(human.id),
        homeworld_id: Some(tatooine.id),
        vehicles_ids: Some(vec![speeder.id]),
        ..Default::default()
    };
    let result = create_person(State(test.into_app_state()), Ok(Json(input))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Luke Skywalker");
    assert_eq!(body["gender"], "male");
    assert_eq!(body["species"], "Human");
    assert_eq!(body["homeworld"], "Tatooine");
    assert_eq!(body["vehicles"], serde_json::json!(["Snowspeeder"]));

    Ok(())
}

/// Expect 400 naming the unresolved vehicle IDs
#[tokio::test]
async fn create_fails_for_unknown_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let input = PersonInputDto {
        name: Some("Luke Skywalker".to_string()),
        vehicles_ids: Some(vec![14]),
        ..Default::default()
    };
    let result = create_person(State(test.into_app_state()), Ok(Json(input))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["error"].as_str().unwrap().contains("vehicles_ids"));

    Ok(())
}

/// Expect null species & homeworld and an empty vehicle list for a bare person
#[tokio::test]
async fn get_returns_empty_relationships() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let yoda = test.catalog().insert_person("Yoda", None, None).await?;

    let result = get_person(State(test.into_app_state()), Ok(Path(yoda.id))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["species"].is_null());
    assert!(body["homeworld"].is_null());
    assert_eq!(body["vehicles"], serde_json::json!([]));

    Ok(())
}

/// Expect 200 with people in insertion order
#[tokio::test]
async fn lists_people_in_order() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    test.catalog().insert_person("Luke Skywalker", None, None).await?;
    test.catalog().insert_person("C-3PO", None, None).await?;

    let result = get_people(State(test.into_app_state())).await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body[0]["name"], "Luke Skywalker");
    assert_eq!(body[1]["name"], "C-3PO");

    Ok(())
}

/// Expect 404 when updating a person that does not exist
#[tokio::test]
async fn update_fails_for_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = update_person(
        State(test.into_app_state()),
        Ok(Path(1)),
        Ok(Json(PersonInputDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Person not found");

    Ok(())
}

/// Expect 200 with a confirmation message
#[tokio::test]
async fn delete_returns_message() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let yoda = test.catalog().insert_person("Yoda", None, None).await?;

    let result = delete_person(State(test.into_app_state()), Ok(Path(yoda.id))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Person deleted");

    Ok(())
}
