use super::*;

fn registration(username: &str, password: &str, confirm_password: &str) -> RegisterDto {
    RegisterDto {
        username: username.to_string(),
        email: format!("{}@{}", username, TEST_EMAIL_DOMAIN),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    }
}

/// Expect 201 with the new account and no password in the body
#[tokio::test]
async fn creates_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(registration("alice", TEST_PASSWORD, TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password_hash").is_none());

    Ok(())
}

/// Expect 400 on the password field for a weak password
#[tokio::test]
async fn rejects_weak_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(registration("alice", "password", "password")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["field"], "password");

    Ok(())
}

/// Expect 400 on the confirmation field when passwords differ
#[tokio::test]
async fn rejects_mismatched_confirmation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(registration("alice", TEST_PASSWORD, "Abc123!y")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["field"], "confirm_password");

    Ok(())
}

/// Expect 400 when the username is blank
#[tokio::test]
async fn rejects_blank_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(RegisterDto {
            username: "   ".to_string(),
            email: "alice@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
            confirm_password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["field"], "username");

    Ok(())
}

/// Expect 409 when the username is taken
#[tokio::test]
async fn conflicts_on_existing_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_user("alice").build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(RegisterDto {
            email: "other@example.com".to_string(),
            ..registration("alice", TEST_PASSWORD, TEST_PASSWORD)
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 when another account already uses the email
#[tokio::test]
async fn conflicts_on_existing_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_user("alice").build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(RegisterDto {
            email: format!("alice@{}", TEST_EMAIL_DOMAIN),
            ..registration("bob", TEST_PASSWORD, TEST_PASSWORD)
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await["error"], AuthError::AccountExists.to_string());

    Ok(())
}

/// Expect 500 when the tables don't exist
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(registration("alice", TEST_PASSWORD, TEST_PASSWORD)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
