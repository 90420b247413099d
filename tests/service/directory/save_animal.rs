use super::*;

/// Expect the listing stored with owner, category and a base64 image
#[tokio::test]
async fn stores_listing_with_image() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let directory_service = DirectoryService::new(&test.db);

    let image: &[u8] = b"\x89PNG";
    let result = directory_service
        .save_animal(new_animal("Rex", 3, "M"), Some(&alice), Some(dogs.id), Some(image))
        .await;

    assert!(result.is_ok());
    let listing = result.unwrap();
    assert_eq!(listing.owner.id, alice.id);
    assert_eq!(listing.category.id, dogs.id);
    assert_eq!(listing.image_base64.as_deref(), Some("iVBORw=="));

    let stored = test.animal().find_animal(listing.animal.id).await?.unwrap();
    assert_eq!(stored.image_blob.as_deref(), Some(image));

    Ok(())
}

/// Expect an empty upload to be stored as no image
#[tokio::test]
async fn stores_empty_image_as_none() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let directory_service = DirectoryService::new(&test.db);

    let image: &[u8] = b"";
    let listing = directory_service
        .save_animal(new_animal("Rex", 3, "M"), Some(&alice), Some(dogs.id), Some(image))
        .await
        .unwrap();

    assert!(listing.image_base64.is_none());
    let stored = test.animal().find_animal(listing.animal.id).await?.unwrap();
    assert!(stored.image_blob.is_none());

    Ok(())
}

/// Expect an error when there is no owner
#[tokio::test]
async fn requires_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_category("Dogs")
        .build()
        .await?;
    let directory_service = DirectoryService::new(&test.db);

    let result = directory_service
        .save_animal(new_animal("Rex", 3, "M"), None, Some(1), None::<&[u8]>)
        .await;

    assert!(matches!(
        result,
        Err(Error::AnimalError(AnimalError::OwnerRequired))
    ));

    Ok(())
}

/// Expect an error and no row when the category doesn't exist
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let directory_service = DirectoryService::new(&test.db);

    let result = directory_service
        .save_animal(new_animal("Rex", 3, "M"), Some(&alice), Some(99), None::<&[u8]>)
        .await;

    assert!(matches!(
        result,
        Err(Error::AnimalError(AnimalError::CategoryNotFound(99)))
    ));
    assert!(directory_service.list_all_newest().await.unwrap().is_empty());

    Ok(())
}

/// Expect an error when no category is given
#[tokio::test]
async fn requires_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let directory_service = DirectoryService::new(&test.db);

    let result = directory_service
        .save_animal(new_animal("Rex", 3, "M"), Some(&alice), None, None::<&[u8]>)
        .await;

    assert!(matches!(
        result,
        Err(Error::AnimalError(AnimalError::CategoryRequired))
    ));

    Ok(())
}

/// Expect blank names and negative ages to be rejected
#[tokio::test]
async fn validates_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let directory_service = DirectoryService::new(&test.db);

    let blank_name = directory_service
        .save_animal(new_animal("  ", 3, "M"), Some(&alice), Some(dogs.id), None::<&[u8]>)
        .await;
    let negative_age = directory_service
        .save_animal(new_animal("Rex", -1, "M"), Some(&alice), Some(dogs.id), None::<&[u8]>)
        .await;

    assert!(matches!(
        blank_name,
        Err(Error::ValidationError(ValidationError::MissingField("name")))
    ));
    assert!(matches!(
        negative_age,
        Err(Error::ValidationError(ValidationError::InvalidField { field: "age", .. }))
    ));

    Ok(())
}
