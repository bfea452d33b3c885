//! Repository for the `film_actor` association table.

use sqlx::PgPool;

use crate::models::actor::{CreateFilmActor, FilmActor};

const COLUMNS: &str = "actor_id, film_id, last_update";

/// Provides create and list operations for film-actor links.
pub struct FilmActorRepo;

impl FilmActorRepo {
    /// Cast an actor in a film. `last_update` is set to the write time.
    pub async fn create(pool: &PgPool, input: &CreateFilmActor) -> Result<FilmActor, sqlx::Error> {
        let query = format!(
            "INSERT INTO film_actor (actor_id, film_id, last_update) \
             VALUES ($1, $2, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmActor>(&query)
            .bind(input.actor_id)
            .bind(input.film_id)
            .fetch_one(pool)
            .await
    }

    /// List links ordered by composite key, with offset/limit.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<FilmActor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film_actor \
             ORDER BY film_id ASC, actor_id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, FilmActor>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }
}
