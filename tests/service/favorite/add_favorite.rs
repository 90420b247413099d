use super::*;

/// Expect exactly one row after adding the same favorite twice
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let rex = test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    let favorite_service = FavoriteService::new(&test.db);

    let first = favorite_service.add_favorite(bob.id, rex.id).await;
    let second = favorite_service.add_favorite(bob.id, rex.id).await;

    assert_eq!(first.unwrap(), FavoriteChange::Added);
    assert_eq!(second.unwrap(), FavoriteChange::AlreadyPresent);
    assert_eq!(test.favorite().count().await?, 1);

    Ok(())
}

/// Expect nothing written when the animal doesn't exist
#[tokio::test]
async fn reports_missing_animal() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let bob = test.user().insert_user("bob").await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.add_favorite(bob.id, 42).await;

    assert_eq!(result.unwrap(), FavoriteChange::MissingReference);
    assert_eq!(test.favorite().count().await?, 0);

    Ok(())
}

/// Expect nothing written when the user doesn't exist
#[tokio::test]
async fn reports_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let rex = test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.add_favorite(42, rex.id).await;

    assert_eq!(result.unwrap(), FavoriteChange::MissingReference);
    assert_eq!(test.favorite().count().await?, 0);

    Ok(())
}
