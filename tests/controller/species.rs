use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::{
        planet::get_planet,
        species::{create_species, delete_species, get_all_species, get_species, update_species},
    },
    model::species::SpeciesInputDto,
};

use super::*;

/// Expect the species' homeworld by name & the planet's fauna to include the species
#[tokio::test]
async fn create_links_homeworld_both_ways() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;

    let input = SpeciesInputDto {
        name: Some("human".to_string()),
        language: Some("Galactic Basic".to_string()),
        homeworld_id: Some(tatooine.id),
        ..Default::default()
    };
    let result = create_species(State(test.into_app_state()), Ok(Json(input))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["homeworld"], "Tatooine");
    assert_eq!(body["members"], serde_json::json!([]));

    let planet = get_planet(State(test.into_app_state()), Ok(Path(tatooine.id))).await;
    let body = json_body(planet.unwrap().into_response()).await;
    assert_eq!(body["fauna"], serde_json::json!(["human"]));

    Ok(())
}

/// Expect 400 and the species unchanged when a member ID does not resolve
#[tokio::test]
async fn update_fails_for_unknown_member() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let wookie = test.catalog().insert_species("Wookie", None).await?;

    let input = SpeciesInputDto {
        name: Some("Ewok".to_string()),
        members_ids: Some(vec![77]),
        ..Default::default()
    };
    let result = update_species(
        State(test.into_app_state()),
        Ok(Path(wookie.id)),
        Ok(Json(input)),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );
    let current = get_species(State(test.into_app_state()), Ok(Path(wookie.id))).await;
    let body = json_body(current.unwrap().into_response()).await;
    assert_eq!(body["name"], "Wookie");

    Ok(())
}

/// Expect members listed by name
#[tokio::test]
async fn lists_species_with_members() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let wookie = test.catalog().insert_species("Wookie", None).await?;
    test.catalog()
        .insert_person("Chewbacca", Some(wookie.id), None)
        .await?;

    let result = get_all_species(State(test.into_app_state())).await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body[0]["members"], serde_json::json!(["Chewbacca"]));

    Ok(())
}

/// Expect 404 when deleting a species that does not exist
#[tokio::test]
async fn delete_fails_for_missing_species() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;

    let result = delete_species(State(test.into_app_state()), Ok(Path(2))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Species not found");

    Ok(())
}
