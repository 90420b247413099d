//! Favorites: a user's bookmarked listings.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, LoaderTrait, SqlErr, TransactionTrait};

use crate::server::{
    data::{animal::AnimalRepository, favorite::FavoriteRepository, user::UserRepository},
    error::Error,
    model::{
        animal::AnimalListing,
        favorite::{FavoriteChange, FavoriteListing},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Favorites a listing for a user; repeating the call has no further effect.
    pub async fn add_favorite(&self, user_id: i32, animal_id: i32) -> Result<FavoriteChange, Error> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn).find_by_id(user_id).await?;
        let animal = AnimalRepository::new(&txn).find_by_id(animal_id).await?;
        if user.is_none() || animal.is_none() {
            tracing::warn!(
                user_id = %user_id,
                animal_id = %animal_id,
                "Ignoring favorite for missing user or animal"
            );
            return Ok(FavoriteChange::MissingReference);
        }

        let favorite_repo = FavoriteRepository::new(&txn);
        if favorite_repo.find(user_id, animal_id).await?.is_some() {
            return Ok(FavoriteChange::AlreadyPresent);
        }

        match favorite_repo.create(user_id, animal_id).await {
            Ok(_) => {}
            // Lost a race with a concurrent insert of the same pair
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Ok(FavoriteChange::AlreadyPresent);
            }
            Err(err) => return Err(err.into()),
        }
        txn.commit().await?;

        Ok(FavoriteChange::Added)
    }

    /// Removes a user's favorite; returns the number of rows deleted.
    pub async fn remove_favorite(&self, user_id: i32, animal_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let result = FavoriteRepository::new(&txn)
            .delete(user_id, animal_id)
            .await?;
        txn.commit().await?;

        Ok(result.rows_affected)
    }

    /// A user's favorites with full listing detail, newest first
    pub async fn get_favorites_by_user(&self, user_id: i32) -> Result<Vec<FavoriteListing>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_newest(user_id)
            .await?;

        let animals: Vec<_> = favorites
            .load_one(entity::prelude::Animal, self.db)
            .await?
            .into_iter()
            .flatten()
            .collect();

        let mut listings: HashMap<i32, AnimalListing> = AnimalRepository::new(self.db)
            .load_listings(animals)
            .await?
            .into_iter()
            .map(|listing| (listing.animal.id, listing))
            .collect();

        Ok(favorites
            .into_iter()
            .filter_map(|favorite| {
                listings
                    .remove(&favorite.animal_id)
                    .map(|listing| FavoriteListing { favorite, listing })
            })
            .collect())
    }

    /// The listings a user has favorited, newest favorite first
    pub async fn get_favorite_animals_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<AnimalListing>, Error> {
        Ok(self
            .get_favorites_by_user(user_id)
            .await?
            .into_iter()
            .map(|entry| entry.listing)
            .collect())
    }
}
