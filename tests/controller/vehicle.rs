use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::vehicle::{create_vehicle, delete_vehicle, get_vehicle, get_vehicles, update_vehicle},
    model::vehicle::VehicleInputDto,
};

use super::*;

/// Expect 201 with pilots listed by name
#[tokio::test]
async fn create_returns_pilots() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.catalog().insert_person("Luke Skywalker", None, None).await?;

    let input = VehicleInputDto {
        name: Some("Snowspeeder".to_string()),
        vehicle_class: Some("airspeeder".to_string()),
        pilots_ids: Some(vec![luke.id]),
        ..Default::default()
    };
    let result = create_vehicle(State(test.into_app_state()), Ok(Json(input))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["vehicle_class"], "airspeeder");
    assert_eq!(body["pilots"], serde_json::json!(["Luke Skywalker"]));

    Ok(())
}

/// Expect the updated vehicle with untouched fields preserved
#[tokio::test]
async fn update_changes_only_given_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let crawler = test.catalog().insert_vehicle("Sand Crawler").await?;

    let input = VehicleInputDto {
        crew: Some(46),
        ..Default::default()
    };
    let result = update_vehicle(
        State(test.into_app_state()),
        Ok(Path(crawler.id)),
        Ok(Json(input)),
    )
    .await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["crew"], 46);
    assert_eq!(body["name"], "Sand Crawler");

    Ok(())
}

/// Expect deleted vehicle to disappear from the list
#[tokio::test]
async fn delete_removes_vehicle() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let crawler = test.catalog().insert_vehicle("Sand Crawler").await?;
    let speeder = test.catalog().insert_vehicle("Snowspeeder").await?;

    let result = delete_vehicle(State(test.into_app_state()), Ok(Path(crawler.id))).await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["message"], "Vehicle deleted");
    let list = get_vehicles(State(test.into_app_state())).await;
    let body = json_body(list.unwrap().into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], speeder.id);

    let missing = get_vehicle(State(test.into_app_state()), Ok(Path(crawler.id))).await;
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
