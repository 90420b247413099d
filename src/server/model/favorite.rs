use crate::{
    model::favorite::FavoriteDto,
    server::model::{animal::AnimalListing, db::FavoriteModel},
};

/// Outcome of adding a favorite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteChange {
    /// A new favorite row was written
    Added,
    /// The user had already favorited the animal; nothing was written
    AlreadyPresent,
    /// The user or the animal does not exist; nothing was written
    MissingReference,
}

/// A favorite with the full listing it points at.
#[derive(Clone, Debug)]
pub struct FavoriteListing {
    pub favorite: FavoriteModel,
    pub listing: AnimalListing,
}

impl From<FavoriteListing> for FavoriteDto {
    fn from(entry: FavoriteListing) -> Self {
        Self {
            id: entry.favorite.id,
            created_at: entry.favorite.created_at,
            animal: entry.listing.into(),
        }
    }
}
