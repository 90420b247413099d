use super::*;

/// Expect the stored user to carry a bcrypt hash, never the plaintext
#[tokio::test]
async fn stores_hashed_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let credential_service = CredentialService::new(&test.db);

    let result = credential_service
        .create(new_user("alice", TEST_PASSWORD))
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "alice");
    assert_ne!(user.password_hash, TEST_PASSWORD);
    assert!(user.password_hash.starts_with("$2"));

    Ok(())
}

/// Expect a weak password to be rejected before anything is written
#[tokio::test]
async fn rejects_weak_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let credential_service = CredentialService::new(&test.db);

    let result = credential_service.create(new_user("alice", "abc")).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::WeakPassword))
    ));
    assert!(!credential_service.username_exists("alice").await.unwrap());

    Ok(())
}

/// Expect a conflict when the username is taken
#[tokio::test]
async fn conflicts_on_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_user("alice").build().await?;
    let credential_service = CredentialService::new(&test.db);

    let result = credential_service
        .create(NewUser {
            username: "alice".to_string(),
            email: "someone-else@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AccountExists))
    ));

    Ok(())
}

/// Expect a conflict when the email is taken
#[tokio::test]
async fn conflicts_on_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_user("alice").build().await?;
    let credential_service = CredentialService::new(&test.db);

    let result = credential_service
        .create(NewUser {
            username: "alice2".to_string(),
            email: "alice@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AccountExists))
    ));
    assert!(!credential_service.username_exists("alice2").await.unwrap());

    Ok(())
}

/// Expect a database error when the tables don't exist
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let credential_service = CredentialService::new(&test.db);

    let result = credential_service
        .create(new_user("alice", TEST_PASSWORD))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
