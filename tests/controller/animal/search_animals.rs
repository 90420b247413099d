use super::*;

/// Expect categories in alphabetical order
#[tokio::test]
async fn lists_categories_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_category("Dogs")
        .with_category("Cats")
        .build()
        .await?;

    let result = list_categories(State(test.into_app_state())).await;

    let body = body_json(result.unwrap().into_response()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cats", "Dogs"]);

    Ok(())
}

/// Expect query filters to narrow the results
#[tokio::test]
async fn applies_query_filters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let cats = test.category().insert_category("Cats").await?;
    test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    test.animal().insert_animal(alice.id, cats.id, "Tom").await?;

    let result = search_animals(
        State(test.into_app_state()),
        Query(AnimalSearchParams {
            category_id: Some(cats.id),
            min_age: Some(1),
            max_age: Some(3),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let listings = body.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["name"], "Tom");

    Ok(())
}

/// Expect name sorting when requested with any case of direction
#[tokio::test]
async fn sorts_by_requested_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    for name in ["Bella", "Rex", "Max"] {
        test.animal().insert_animal(alice.id, dogs.id, name).await?;
    }

    let result = search_animals(
        State(test.into_app_state()),
        Query(AnimalSearchParams {
            sort_by: Some("name".to_string()),
            sort_dir: Some("desc".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Rex", "Max", "Bella"]);

    Ok(())
}
