//! Animal listing fixtures.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn animal(&self) -> AnimalFixtures<'_> {
        AnimalFixtures { context: self }
    }
}

pub struct AnimalFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> AnimalFixtures<'a> {
    /// Insert a two year old listing with descriptions derived from its name and no image.
    pub async fn insert_animal(
        &self,
        owner_id: i32,
        category_id: i32,
        name: &str,
    ) -> Result<entity::animal::Model, TestError> {
        self.insert_animal_created_at(owner_id, category_id, name, Utc::now().naive_utc())
            .await
    }

    /// Insert a listing with an explicit creation timestamp for ordering tests.
    pub async fn insert_animal_created_at(
        &self,
        owner_id: i32,
        category_id: i32,
        name: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::animal::Model, TestError> {
        Ok(entity::prelude::Animal::insert(entity::animal::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name.to_string()),
            age: ActiveValue::Set(2),
            gender: ActiveValue::Set(Some("female".to_string())),
            short_description: ActiveValue::Set(Some(format!("{} is friendly", name))),
            full_description: ActiveValue::Set(Some(format!(
                "{} is house trained and good with children",
                name
            ))),
            image_blob: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn find_animal(
        &self,
        animal_id: i32,
    ) -> Result<Option<entity::animal::Model>, TestError> {
        Ok(entity::prelude::Animal::find_by_id(animal_id)
            .one(&self.context.db)
            .await?)
    }
}
