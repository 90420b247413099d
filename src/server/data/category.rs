use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::db::CategoryModel;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<CategoryModel, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn find_by_id(&self, category_id: i32) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    /// All categories ordered by name
    pub async fn get_all_by_name(&self) -> Result<Vec<CategoryModel>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Category::find().count(self.db).await
    }
}
