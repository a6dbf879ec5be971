use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::user::{create_user, delete_user, get_user, get_users, update_user},
    model::user::UserInputDto,
};

use super::*;

fn user_input(email: &str) -> UserInputDto {
    UserInputDto {
        email: Some(email.to_string()),
        password: Some("1234".to_string()),
        is_active: Some(true),
    }
}

/// Expect 201 with the user & no password in the body
#[tokio::test]
async fn create_returns_created_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(user_input("luke@example.com"))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["email"], "luke@example.com");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 400 when email is missing
#[tokio::test]
async fn create_fails_for_missing_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let mut input = user_input("luke@example.com");
    input.email = None;
    let result = create_user(State(test.into_app_state()), Ok(Json(input))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Missing required field: email");

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn create_fails_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@example.com")
        .build()
        .await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(user_input("luke@example.com"))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with every user
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@example.com")
        .with_user("leia@example.com")
        .build()
        .await?;

    let result = get_users(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 404 with error body when user does not exist
#[tokio::test]
async fn get_fails_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(test.into_app_state()), Ok(Path(3))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

/// Expect 200 with only the active flag changed
#[tokio::test]
async fn update_changes_active_flag() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("luke@example.com").await?;

    let input = UserInputDto {
        is_active: Some(false),
        ..Default::default()
    };
    let result = update_user(State(test.into_app_state()), Ok(Path(user.id)), Ok(Json(input))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["is_active"], false);
    assert_eq!(body["email"], "luke@example.com");

    Ok(())
}

/// Expect 200 with a confirmation message, then 404 on a second delete
#[tokio::test]
async fn delete_confirms_then_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("luke@example.com").await?;

    let first = delete_user(State(test.into_app_state()), Ok(Path(user.id))).await;
    let second = delete_user(State(test.into_app_state()), Ok(Path(user.id))).await;

    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "User deleted");
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
