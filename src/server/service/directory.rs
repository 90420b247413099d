//! Animal listings and their categories.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::server::{
    data::{
        animal::AnimalRepository, category::CategoryRepository, favorite::FavoriteRepository,
        message::MessageRepository,
    },
    error::{animal::AnimalError, validation::ValidationError, Error},
    model::{
        animal::{AnimalListing, AnimalSearch, NewAnimal},
        db::{CategoryModel, UserModel},
    },
};

/// Categories created on first startup.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Dogs", "Cats", "Birds", "Rodents", "Reptiles"];

pub struct DirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryService<'a> {
    /// Creates a new instance of [`DirectoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories, alphabetical by name
    pub async fn list_categories(&self) -> Result<Vec<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).get_all_by_name().await?)
    }

    /// Inserts [`DEFAULT_CATEGORIES`] when no category exists yet.
    ///
    /// Returns the number of categories inserted.
    pub async fn seed_default_categories(&self) -> Result<usize, Error> {
        let txn = self.db.begin().await?;
        let category_repo = CategoryRepository::new(&txn);

        if category_repo.count().await? > 0 {
            return Ok(0);
        }

        for name in DEFAULT_CATEGORIES {
            category_repo.create(name.to_string()).await?;
        }
        txn.commit().await?;

        tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());

        Ok(DEFAULT_CATEGORIES.len())
    }

    /// Filtered and ordered listings with owner, category and image attached
    pub async fn search(&self, search: &AnimalSearch) -> Result<Vec<AnimalListing>, Error> {
        let animal_repo = AnimalRepository::new(self.db);

        let animals = animal_repo.search(search).await?;

        Ok(animal_repo.load_listings(animals).await?)
    }

    pub async fn find_animal(&self, animal_id: i32) -> Result<Option<AnimalListing>, Error> {
        let animal_repo = AnimalRepository::new(self.db);

        let Some(animal) = animal_repo.find_by_id(animal_id).await? else {
            return Ok(None);
        };

        Ok(animal_repo.load_listings(vec![animal]).await?.pop())
    }

    /// Creates a listing owned by `owner` in category `category_id`.
    ///
    /// The image, when given, is read to the end before the transaction starts; an
    /// empty image is stored as no image.
    ///
    /// # Returns
    /// - `Ok(AnimalListing)` - The stored listing
    /// - `Err(Error::AnimalError)` - Owner or category missing, or the category doesn't exist
    /// - `Err(Error::ValidationError)` - Blank name or negative age
    /// - `Err(Error::IoError)` - Reading the image failed
    /// - `Err(Error::DbErr)` - Database failure
    pub async fn save_animal<R>(
        &self,
        animal: NewAnimal,
        owner: Option<&UserModel>,
        category_id: Option<i32>,
        image: Option<R>,
    ) -> Result<AnimalListing, Error>
    where
        R: AsyncRead + Unpin,
    {
        let Some(owner) = owner else {
            return Err(AnimalError::OwnerRequired.into());
        };
        let Some(category_id) = category_id else {
            return Err(AnimalError::CategoryRequired.into());
        };
        if animal.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if animal.age < 0 {
            return Err(ValidationError::InvalidField {
                field: "age",
                reason: "must not be negative".to_string(),
            }
            .into());
        }

        let image = match image {
            Some(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes).await?;
                Some(bytes)
            }
            None => None,
        };

        let txn = self.db.begin().await?;

        let Some(category) = CategoryRepository::new(&txn)
            .find_by_id(category_id)
            .await?
        else {
            return Err(AnimalError::CategoryNotFound(category_id).into());
        };

        let created = AnimalRepository::new(&txn)
            .create(owner.id, category.id, animal, image)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            animal_id = %created.id,
            owner_id = %owner.id,
            "Created animal listing"
        );

        Ok(AnimalListing::new(created, owner.clone(), category))
    }

    /// Deletes a listing when `owner_id` owns it.
    ///
    /// Favorites and messages referencing the listing are deleted first, all in one
    /// transaction. Returns `false` without writing when the listing is missing or
    /// owned by someone else.
    pub async fn delete_if_owner(&self, animal_id: i32, owner_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let animal = AnimalRepository::new(&txn).find_by_id(animal_id).await?;
        if animal.map(|animal| animal.owner_id) != Some(owner_id) {
            tracing::debug!(
                animal_id = %animal_id,
                owner_id = %owner_id,
                "Refused delete of listing not owned by caller"
            );
            return Ok(false);
        }

        FavoriteRepository::new(&txn)
            .delete_by_animal(animal_id)
            .await?;
        MessageRepository::new(&txn)
            .delete_by_animal(animal_id)
            .await?;
        AnimalRepository::new(&txn).delete(animal_id).await?;
        txn.commit().await?;

        tracing::debug!(animal_id = %animal_id, "Deleted animal listing");

        Ok(true)
    }

    /// A user's listings, newest first; empty when no owner is given
    pub async fn list_by_owner(&self, owner_id: Option<i32>) -> Result<Vec<AnimalListing>, Error> {
        let Some(owner_id) = owner_id else {
            return Ok(Vec::new());
        };

        let animal_repo = AnimalRepository::new(self.db);
        let animals = animal_repo.get_by_owner_newest(owner_id).await?;

        Ok(animal_repo.load_listings(animals).await?)
    }

    /// Every listing, newest first
    pub async fn list_all_newest(&self) -> Result<Vec<AnimalListing>, Error> {
        let animal_repo = AnimalRepository::new(self.db);
        let animals = animal_repo.get_all_newest().await?;

        Ok(animal_repo.load_listings(animals).await?)
    }
}
