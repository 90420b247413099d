use super::*;

/// Expect 200 with owner and category attached
#[tokio::test]
async fn returns_listing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let rex = test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;

    let result = get_animal(State(test.into_app_state()), Path(rex.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Rex");
    assert_eq!(body["owner"]["username"], "alice");
    assert_eq!(body["category"]["name"], "Dogs");
    assert!(body["image_base64"].is_null());

    Ok(())
}

/// Expect 404 for a listing that doesn't exist
#[tokio::test]
async fn not_found_for_missing_listing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_animal(State(test.into_app_state()), Path(42)).await;

    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect only the logged in user's listings from the "mine" endpoint
#[tokio::test]
async fn lists_own_listings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    test.animal().insert_animal(bob.id, dogs.id, "Max").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = get_my_animals(State(test.into_app_state()), test.session.clone()).await;

    let body = body_json(result.unwrap().into_response()).await;
    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["name"], "Rex");

    Ok(())
}
