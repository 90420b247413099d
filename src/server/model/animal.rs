//! Listing domain types.

use crate::{
    model::{
        animal::{AnimalDto, AnimalSearchParams, AnimalSummaryDto, CategoryDto},
        user::UserSummaryDto,
    },
    server::{
        model::db::{AnimalModel, CategoryModel, UserModel},
        util::image::encode_image,
    },
};

/// Column a listing search is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Age,
    Category,
    Timestamp,
}

impl SortField {
    /// Parse a sort key, falling back to [`SortField::Timestamp`] for anything
    /// outside the allow-list.
    pub fn from_param(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "age" => Self::Age,
            "category" => Self::Category,
            _ => Self::Timestamp,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `DESC` in any case sorts descending; everything else sorts ascending.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Filters and ordering for browsing listings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimalSearch {
    pub category_id: Option<i32>,
    pub gender: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub sort_by: SortField,
    pub sort_dir: SortDirection,
}

impl Default for AnimalSearch {
    /// No filters, newest first.
    fn default() -> Self {
        Self {
            category_id: None,
            gender: None,
            min_age: None,
            max_age: None,
            sort_by: SortField::Timestamp,
            sort_dir: SortDirection::Desc,
        }
    }
}

impl From<AnimalSearchParams> for AnimalSearch {
    fn from(params: AnimalSearchParams) -> Self {
        let (sort_by, sort_dir) = match (params.sort_by.as_deref(), params.sort_dir.as_deref()) {
            (None, None) => (SortField::Timestamp, SortDirection::Desc),
            (sort_by, sort_dir) => (
                SortField::from_param(sort_by.unwrap_or_default()),
                SortDirection::from_param(sort_dir.unwrap_or_default()),
            ),
        };

        Self {
            category_id: params.category_id,
            gender: params.gender.filter(|gender| !gender.trim().is_empty()),
            min_age: params.min_age,
            max_age: params.max_age,
            sort_by,
            sort_dir,
        }
    }
}

/// Fields of a listing supplied by its owner.
#[derive(Clone, Debug, Default)]
pub struct NewAnimal {
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
}

/// A listing with its owner and category attached.
#[derive(Clone, Debug)]
pub struct AnimalListing {
    pub animal: AnimalModel,
    pub owner: UserModel,
    pub category: CategoryModel,
    /// Present only when the listing has a non-empty image
    pub image_base64: Option<String>,
}

impl AnimalListing {
    pub fn new(animal: AnimalModel, owner: UserModel, category: CategoryModel) -> Self {
        let image_base64 = encode_image(animal.image_blob.as_deref());

        Self {
            animal,
            owner,
            category,
            image_base64,
        }
    }
}

impl From<CategoryModel> for CategoryDto {
    fn from(category: CategoryModel) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<UserModel> for UserSummaryDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<AnimalModel> for AnimalSummaryDto {
    fn from(animal: AnimalModel) -> Self {
        Self {
            id: animal.id,
            name: animal.name,
        }
    }
}

impl From<AnimalListing> for AnimalDto {
    fn from(listing: AnimalListing) -> Self {
        let AnimalListing {
            animal,
            owner,
            category,
            image_base64,
        } = listing;

        Self {
            id: animal.id,
            name: animal.name,
            age: animal.age,
            gender: animal.gender,
            short_description: animal.short_description,
            full_description: animal.full_description,
            category: category.into(),
            owner: owner.into(),
            created_at: animal.created_at,
            image_base64,
        }
    }
}
