use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::animal::AnimalDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub animal: AnimalDto,
}
