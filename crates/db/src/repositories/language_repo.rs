//! Repository for the `language` table.

use rentavid_core::types::DbId;
use sqlx::PgPool;

use crate::models::language::{CreateLanguage, Language, UpdateLanguage};

const COLUMNS: &str = "language_id, name, last_update";

/// Provides CRUD operations and name lookup for languages.
pub struct LanguageRepo;

impl LanguageRepo {
    /// Insert a new language, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLanguage) -> Result<Language, sqlx::Error> {
        let query = format!(
            "INSERT INTO language (name, last_update) VALUES ($1, NOW()) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a language by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Language>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM language WHERE language_id = $1");
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List languages by ID with offset/limit.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Language>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM language ORDER BY language_id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Rename a language. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLanguage,
    ) -> Result<Option<Language>, sqlx::Error> {
        let query = format!(
            "UPDATE language SET name = $2, last_update = NOW() \
             WHERE language_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a language, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Language>, sqlx::Error> {
        let query = format!("DELETE FROM language WHERE language_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve language names to IDs by exact match.
    ///
    /// Names with no matching row are skipped, so the result may be shorter
    /// than `names` or empty.
    pub async fn resolve_ids(pool: &PgPool, names: &[String]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT language_id FROM language WHERE name = ANY($1) ORDER BY language_id ASC",
        )
        .bind(names)
        .fetch_all(pool)
        .await
    }
}
