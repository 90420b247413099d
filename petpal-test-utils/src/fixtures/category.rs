use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn category(&self) -> CategoryFixtures<'_> {
        CategoryFixtures { context: self }
    }
}

pub struct CategoryFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CategoryFixtures<'a> {
    pub async fn insert_category(&self, name: &str) -> Result<entity::category::Model, TestError> {
        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
