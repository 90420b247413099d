use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    JoinType, LoaderTrait, Order, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    animal::{AnimalListing, AnimalSearch, NewAnimal, SortDirection, SortField},
    db::AnimalModel,
};

pub struct AnimalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnimalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a listing stamped with the current time
    ///
    /// An empty image is stored as no image.
    pub async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        animal: NewAnimal,
        image: Option<Vec<u8>>,
    ) -> Result<AnimalModel, DbErr> {
        let animal = entity::animal::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            category_id: ActiveValue::Set(category_id),
            name: ActiveValue::Set(animal.name),
            age: ActiveValue::Set(animal.age),
            gender: ActiveValue::Set(animal.gender),
            short_description: ActiveValue::Set(animal.short_description),
            full_description: ActiveValue::Set(animal.full_description),
            image_blob: ActiveValue::Set(image.filter(|bytes| !bytes.is_empty())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        animal.insert(self.db).await
    }

    pub async fn find_by_id(&self, animal_id: i32) -> Result<Option<AnimalModel>, DbErr> {
        entity::prelude::Animal::find_by_id(animal_id)
            .one(self.db)
            .await
    }

    pub async fn find_many_by_ids(&self, animal_ids: Vec<i32>) -> Result<Vec<AnimalModel>, DbErr> {
        if animal_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Animal::find()
            .filter(entity::animal::Column::Id.is_in(animal_ids))
            .all(self.db)
            .await
    }

    /// Filters listings conjunctively and orders them, breaking ties by ID in the
    /// same direction
    pub async fn search(&self, search: &AnimalSearch) -> Result<Vec<AnimalModel>, DbErr> {
        let mut query = entity::prelude::Animal::find();

        if let Some(category_id) = search.category_id {
            query = query.filter(entity::animal::Column::CategoryId.eq(category_id));
        }
        if let Some(gender) = search
            .gender
            .as_deref()
            .filter(|gender| !gender.trim().is_empty())
        {
            query = query.filter(entity::animal::Column::Gender.eq(gender));
        }
        if let Some(min_age) = search.min_age {
            query = query.filter(entity::animal::Column::Age.gte(min_age));
        }
        if let Some(max_age) = search.max_age {
            query = query.filter(entity::animal::Column::Age.lte(max_age));
        }

        let order = match search.sort_dir {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        query = match search.sort_by {
            SortField::Name => query.order_by(entity::animal::Column::Name, order.clone()),
            SortField::Age => query.order_by(entity::animal::Column::Age, order.clone()),
            SortField::Category => query
                .join(JoinType::InnerJoin, entity::animal::Relation::Category.def())
                .order_by(entity::category::Column::Name, order.clone()),
            SortField::Timestamp => {
                query.order_by(entity::animal::Column::CreatedAt, order.clone())
            }
        };

        query
            .order_by(entity::animal::Column::Id, order)
            .all(self.db)
            .await
    }

    /// Listings owned by a user, newest first
    pub async fn get_by_owner_newest(&self, owner_id: i32) -> Result<Vec<AnimalModel>, DbErr> {
        entity::prelude::Animal::find()
            .filter(entity::animal::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::animal::Column::CreatedAt)
            .order_by_desc(entity::animal::Column::Id)
            .all(self.db)
            .await
    }

    /// Every listing, newest first
    pub async fn get_all_newest(&self) -> Result<Vec<AnimalModel>, DbErr> {
        entity::prelude::Animal::find()
            .order_by_desc(entity::animal::Column::CreatedAt)
            .order_by_desc(entity::animal::Column::Id)
            .all(self.db)
            .await
    }

    /// Attaches owner and category to each listing with one query per relation
    ///
    /// Order is preserved. A listing whose owner or category cannot be found is
    /// dropped and logged.
    pub async fn load_listings(
        &self,
        animals: Vec<AnimalModel>,
    ) -> Result<Vec<AnimalListing>, DbErr> {
        let owners = animals.load_one(entity::prelude::User, self.db).await?;
        let categories = animals.load_one(entity::prelude::Category, self.db).await?;

        let listings = animals
            .into_iter()
            .zip(owners)
            .zip(categories)
            .filter_map(|((animal, owner), category)| match (owner, category) {
                (Some(owner), Some(category)) => Some(AnimalListing::new(animal, owner, category)),
                _ => {
                    tracing::warn!(
                        animal_id = %animal.id,
                        "Skipping listing with missing owner or category"
                    );
                    None
                }
            })
            .collect();

        Ok(listings)
    }

    /// Deletes a listing
    ///
    /// Favorites and messages referencing the listing must be removed first.
    pub async fn delete(&self, animal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Animal::delete_by_id(animal_id)
            .exec(self.db)
            .await
    }
}
