//! Repository for the `film_category` association table.

use sqlx::PgPool;

use crate::models::category::{CreateFilmCategory, FilmCategory};

const COLUMNS: &str = "film_id, category_id, last_update";

/// Provides create and list operations for film-category links.
pub struct FilmCategoryRepo;

impl FilmCategoryRepo {
    /// Link a film to a category. `last_update` is set to the write time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFilmCategory,
    ) -> Result<FilmCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO film_category (film_id, category_id, last_update) \
             VALUES ($1, $2, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilmCategory>(&query)
            .bind(input.film_id)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// List links ordered by composite key, with offset/limit.
    pub async fn list(
        pool: &PgPool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<FilmCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film_category \
             ORDER BY film_id ASC, category_id ASC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, FilmCategory>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }
}
