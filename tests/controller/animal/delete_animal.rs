use super::*;

/// Expect 204 for the owner
#[tokio::test]
async fn deletes_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let rex = test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = delete_animal(
        State(test.into_app_state()),
        test.session.clone(),
        Path(rex.id),
    )
    .await;

    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );
    assert!(test.animal().find_animal(rex.id).await?.is_none());

    Ok(())
}

/// Expect the same 403 for someone else's listing and a missing listing
#[tokio::test]
async fn forbids_non_owner_and_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let rex = test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    SessionUserId::insert(&test.session, bob.id).await.unwrap();

    let not_owned = delete_animal(
        State(test.into_app_state()),
        test.session.clone(),
        Path(rex.id),
    )
    .await
    .unwrap()
    .into_response();
    let missing = delete_animal(
        State(test.into_app_state()),
        test.session.clone(),
        Path(42),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(not_owned.status(), StatusCode::FORBIDDEN);
    assert_eq!(missing.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(not_owned).await, body_json(missing).await);
    assert!(test.animal().find_animal(rex.id).await?.is_some());

    Ok(())
}

/// Expect 404 when nobody is logged in
#[tokio::test]
async fn requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = delete_animal(
        State(test.into_app_state()),
        test.session.clone(),
        Path(1),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
