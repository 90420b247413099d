use chrono::{Duration, Utc};

use super::*;

/// Expect age range and category filters to narrow results
#[tokio::test]
async fn filters_by_age_and_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let cats = test.category().insert_category("Cats").await?;
    let alice = test.user().insert_user("alice").await?;
    let directory_service = DirectoryService::new(&test.db);
    let rex = directory_service
        .save_animal(new_animal("Rex", 3, "M"), Some(&alice), Some(dogs.id), None::<&[u8]>)
        .await
        .unwrap();

    let in_range = directory_service
        .search(&AnimalSearch {
            min_age: Some(2),
            max_age: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    let other_category = directory_service
        .search(&AnimalSearch {
            category_id: Some(cats.id),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].animal.id, rex.animal.id);
    assert_eq!(in_range[0].owner.username, "alice");
    assert_eq!(in_range[0].category.name, "Dogs");
    assert!(other_category.is_empty());

    Ok(())
}

/// Expect age bounds to be inclusive and gender to match exactly
#[tokio::test]
async fn applies_inclusive_bounds_and_gender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let alice = test.user().insert_user("alice").await?;
    let directory_service = DirectoryService::new(&test.db);
    for (name, age, gender) in [("Rex", 2, "M"), ("Bella", 5, "F"), ("Max", 6, "M")] {
        directory_service
            .save_animal(new_animal(name, age, gender), Some(&alice), Some(dogs.id), None::<&[u8]>)
            .await
            .unwrap();
    }

    let result = directory_service
        .search(&AnimalSearch {
            gender: Some("M".to_string()),
            min_age: Some(2),
            max_age: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();

    let names: Vec<&str> = result.iter().map(|l| l.animal.name.as_str()).collect();
    assert_eq!(names, vec!["Rex"]);

    Ok(())
}

/// Expect ascending age sort to return non-decreasing ages
#[tokio::test]
async fn sorts_by_age_ascending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let alice = test.user().insert_user("alice").await?;
    let directory_service = DirectoryService::new(&test.db);
    for (name, age) in [("Rex", 7), ("Bella", 1), ("Max", 4), ("Luna", 4)] {
        directory_service
            .save_animal(new_animal(name, age, "F"), Some(&alice), Some(dogs.id), None::<&[u8]>)
            .await
            .unwrap();
    }

    let result = directory_service
        .search(&AnimalSearch {
            sort_by: SortField::Age,
            sort_dir: SortDirection::Asc,
            ..Default::default()
        })
        .await
        .unwrap();

    let ages: Vec<i32> = result.iter().map(|l| l.animal.age).collect();
    assert_eq!(ages.len(), 4);
    assert!(ages.windows(2).all(|pair| pair[0] <= pair[1]));

    Ok(())
}

/// Expect an unrecognized sort field to behave like the timestamp sort
#[tokio::test]
async fn unknown_sort_matches_timestamp() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let alice = test.user().insert_user("alice").await?;
    let now = Utc::now().naive_utc();
    for (name, days_ago) in [("Old", 3), ("Newest", 0), ("Middle", 1)] {
        test.animal()
            .insert_animal_created_at(alice.id, dogs.id, name, now - Duration::days(days_ago))
            .await?;
    }
    let directory_service = DirectoryService::new(&test.db);

    let unknown = directory_service
        .search(&AnimalSearch {
            sort_by: SortField::from_param("colour"),
            sort_dir: SortDirection::from_param("DESC"),
            ..Default::default()
        })
        .await
        .unwrap();
    let timestamp = directory_service
        .search(&AnimalSearch {
            sort_by: SortField::Timestamp,
            sort_dir: SortDirection::Desc,
            ..Default::default()
        })
        .await
        .unwrap();

    let unknown_ids: Vec<i32> = unknown.iter().map(|l| l.animal.id).collect();
    let timestamp_ids: Vec<i32> = timestamp.iter().map(|l| l.animal.id).collect();
    assert_eq!(unknown_ids, timestamp_ids);
    assert_eq!(timestamp[0].animal.name, "Newest");
    assert_eq!(timestamp[2].animal.name, "Old");

    Ok(())
}

/// Expect sorting by category to order by the category's name
#[tokio::test]
async fn sorts_by_category_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let reptiles = test.category().insert_category("Reptiles").await?;
    let birds = test.category().insert_category("Birds").await?;
    let alice = test.user().insert_user("alice").await?;
    test.animal().insert_animal(alice.id, reptiles.id, "Spike").await?;
    test.animal().insert_animal(alice.id, birds.id, "Tweety").await?;
    let directory_service = DirectoryService::new(&test.db);

    let result = directory_service
        .search(&AnimalSearch {
            sort_by: SortField::Category,
            sort_dir: SortDirection::Asc,
            ..Default::default()
        })
        .await
        .unwrap();

    let names: Vec<&str> = result.iter().map(|l| l.category.name.as_str()).collect();
    assert_eq!(names, vec!["Birds", "Reptiles"]);

    Ok(())
}

/// Expect an empty gender filter to match every listing
#[tokio::test]
async fn ignores_blank_gender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let alice = test.user().insert_user("alice").await?;
    let directory_service = DirectoryService::new(&test.db);
    directory_service
        .save_animal(new_animal("Rex", 3, "M"), Some(&alice), Some(dogs.id), None::<&[u8]>)
        .await
        .unwrap();

    for gender in ["", "  "] {
        let result = directory_service
            .search(&AnimalSearch {
                gender: Some(gender.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].animal.name, "Rex");
    }

    Ok(())
}
