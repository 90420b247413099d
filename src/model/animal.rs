use std::{fmt::Display, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::user::UserSummaryDto;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnimalDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub category: CategoryDto,
    pub owner: UserSummaryDto,
    pub created_at: NaiveDateTime,
    /// Base64 encoded image, absent when the listing has no image
    pub image_base64: Option<String>,
}

/// Minimal reference to a listing, attached to messages
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct AnimalSummaryDto {
    pub id: i32,
    pub name: String,
}

/// Query parameters for browsing listings.
///
/// All filters are optional and combine conjunctively. Unknown `sort_by` values
/// sort by creation time; unknown `sort_dir` values sort ascending. A parameter
/// sent with a blank value is treated as absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnimalSearchParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_age: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_age: Option<i32>,
    /// One of `name`, `age`, `category`, `timestamp`
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sort_by: Option<String>,
    /// `ASC` or `DESC`
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sort_dir: Option<String>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Multipart form accepted when creating a listing
#[derive(utoipa::ToSchema)]
pub struct CreateAnimalForm {
    pub name: String,
    pub age: i32,
    pub category_id: i32,
    pub gender: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
