//! Language entity model and DTOs.

use rentavid_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `language` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Language {
    pub language_id: DbId,
    pub name: String,
    pub last_update: Timestamp,
}

/// DTO for creating a language. Also used for full updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLanguage {
    #[validate(length(min = 1, max = 20))]
    pub name: String,
}

pub type UpdateLanguage = CreateLanguage;
