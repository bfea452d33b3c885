//! Actor and film-actor association models.

use rentavid_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `actor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub last_update: Timestamp,
}

/// DTO for creating an actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, max = 45))]
    pub first_name: String,
    #[validate(length(min = 1, max = 45))]
    pub last_name: String,
}

/// A row from the `film_actor` association table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmActor {
    pub actor_id: DbId,
    pub film_id: DbId,
    pub last_update: Timestamp,
}

/// DTO for casting an actor in a film. `last_update` is server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilmActor {
    pub actor_id: DbId,
    pub film_id: DbId,
}
