use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::{
    favorite::{add_favorite, get_favorites, remove_favorite, remove_favorite_by_id},
    person::delete_person,
    util::acting_user::ActingUser,
};

use super::*;

/// Expect 201 with the item's name snapshotted, plural kind accepted
#[tokio::test]
async fn add_accepts_plural_kind() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;
    let yoda = test.catalog().insert_person("Yoda", None, None).await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(("people".to_string(), yoda.id))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["kind"], "person");
    assert_eq!(body["item_id"], yoda.id);
    assert_eq!(body["name"], "Yoda");
    assert_eq!(body["user_id"], user.id);

    Ok(())
}

/// Expect 400 with message for an unknown kind
#[tokio::test]
async fn add_fails_for_unknown_kind() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(("starships".to_string(), 1))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Unknown favorite kind: starships");

    Ok(())
}

/// Expect 400 with the kind's label when already favorited
#[tokio::test]
async fn add_fails_for_duplicate() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;
    let dagobah = test.catalog().insert_planet("Dagobah").await?;
    test.user()
        .insert_favorite(user.id, FavoriteKind::Planet, dagobah.id, "Dagobah")
        .await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(("planet".to_string(), dagobah.id))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Planet already in favorites");

    Ok(())
}

/// Expect 404 when the item does not exist
#[tokio::test]
async fn add_fails_for_missing_item() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(("vehicle".to_string(), 8))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Vehicle not found");

    Ok(())
}

/// Expect 404 when listing favorites of a user that does not exist
#[tokio::test]
async fn list_fails_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_favorites(State(test.into_app_state()), ActingUser(9)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the favorite to disappear once the person is deleted
#[tokio::test]
async fn deleting_person_removes_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .build()
        .await?;
    let user = test.user().insert_user("luke@example.com").await?;
    let yoda = test.catalog().insert_person("Yoda", None, None).await?;
    test.user()
        .insert_favorite(user.id, FavoriteKind::Person, yoda.id, "Yoda")
        .await?;

    let deleted = delete_person(State(test.into_app_state()), Ok(Path(yoda.id))).await;
    let result = get_favorites(State(test.into_app_state()), ActingUser(user.id)).await;

    assert!(deleted.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expect 200 with message when removing by kind & item, then 404 for a repeat
#[tokio::test]
async fn remove_by_item_then_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("luke@example.com").await?;
    test.user()
        .insert_favorite(user.id, FavoriteKind::Species, 4, "Wookie")
        .await?;

    let first = remove_favorite(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(("species".to_string(), 4))),
    )
    .await;
    let second = remove_favorite(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(("species".to_string(), 4))),
    )
    .await;

    let body = json_body(first.unwrap().into_response()).await;
    assert_eq!(body["message"], "Favorite deleted");
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Favorite species not found");

    Ok(())
}

/// Expect 200 when removing one's own favorite by ID
#[tokio::test]
async fn remove_by_id_deletes_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("luke@example.com").await?;
    let favorite = test
        .user()
        .insert_favorite(user.id, FavoriteKind::Vehicle, 2, "Snowspeeder")
        .await?;

    let result = remove_favorite_by_id(
        State(test.into_app_state()),
        ActingUser(user.id),
        Ok(Path(favorite.id)),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    let list = get_favorites(State(test.into_app_state()), ActingUser(user.id)).await;
    let body = json_body(list.unwrap().into_response()).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}
