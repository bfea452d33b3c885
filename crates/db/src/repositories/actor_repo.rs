//! Repository for the `actor` table.

use rentavid_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, CreateActor};

const COLUMNS: &str = "actor_id, first_name, last_name, last_update";

/// Provides create/read operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actor (first_name, last_name, last_update) \
             VALUES ($1, $2, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actor WHERE actor_id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List actors by ID with offset/limit.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Actor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM actor ORDER BY actor_id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Actor>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Actors cast in a film, by last then first name.
    pub async fn list_by_film(pool: &PgPool, film_id: DbId) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT a.actor_id, a.first_name, a.last_name, a.last_update FROM actor a \
             JOIN film_actor fa ON fa.actor_id = a.actor_id \
             WHERE fa.film_id = $1 \
             ORDER BY a.last_name ASC, a.first_name ASC, a.actor_id ASC",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await
    }
}
