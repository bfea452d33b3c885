//! Category and film-category association models.

use rentavid_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub category_id: DbId,
    pub name: String,
    pub last_update: Timestamp,
}

/// DTO for creating a category. Also used for full updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 25))]
    pub name: String,
}

pub type UpdateCategory = CreateCategory;

/// A row from the `film_category` association table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmCategory {
    pub film_id: DbId,
    pub category_id: DbId,
    pub last_update: Timestamp,
}

/// DTO for linking a film to a category. `last_update` is server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilmCategory {
    pub film_id: DbId,
    pub category_id: DbId,
}
