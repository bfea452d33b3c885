//! Repository for the `film` table.
//!
//! Besides single-row CRUD this renders the listing filter and sort order
//! into SQL, and provides the join reads used by the relationship
//! endpoints.

use rentavid_core::filter::{FilmFilter, FilmPredicate};
use rentavid_core::sorting::{SortField, SortSpec};
use rentavid_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::film::{CreateFilm, Film, UpdateFilm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "film_id, title, description, backdrop_path, poster_path, release_year, \
    language_id, rental_duration, rental_rate, length, replacement_cost, rating, last_update";

/// [`COLUMNS`] qualified with the `f` alias, for joins.
const F_COLUMNS: &str = "f.film_id, f.title, f.description, f.backdrop_path, f.poster_path, \
    f.release_year, f.language_id, f.rental_duration, f.rental_rate, f.length, \
    f.replacement_cost, f.rating, f.last_update";

/// Provides CRUD, listing and relationship reads for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO film (title, description, backdrop_path, poster_path, release_year, \
                               language_id, rental_duration, rental_rate, length, \
                               replacement_cost, rating, last_update) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.backdrop_path)
            .bind(&input.poster_path)
            .bind(input.release_year)
            .bind(input.language_id)
            .bind(input.rental_duration)
            .bind(input.rental_rate)
            .bind(input.length)
            .bind(input.replacement_cost)
            .bind(&input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a film by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM film WHERE film_id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a film with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM film WHERE film_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Replace every attribute of a film.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<Film>, sqlx::Error> {
        let query = format!(
            "UPDATE film SET \
                title = $2, \
                description = $3, \
                backdrop_path = $4, \
                poster_path = $5, \
                release_year = $6, \
                language_id = $7, \
                rental_duration = $8, \
                rental_rate = $9, \
                length = $10, \
                replacement_cost = $11, \
                rating = $12, \
                last_update = NOW() \
             WHERE film_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.backdrop_path)
            .bind(&input.poster_path)
            .bind(input.release_year)
            .bind(input.language_id)
            .bind(input.rental_duration)
            .bind(input.rental_rate)
            .bind(input.length)
            .bind(input.replacement_cost)
            .bind(&input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a film, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("DELETE FROM film WHERE film_id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Filtered listing
    // -----------------------------------------------------------------------

    /// Count the films selected by `filter`, ignoring any page window.
    pub async fn count_filtered(pool: &PgPool, filter: &FilmFilter) -> Result<i64, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM film");
        push_filter(&mut builder, filter);
        builder.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// Fetch one page of the films selected by `filter`, ordered by `sort`.
    ///
    /// Rows without a value for the sort column come last in either
    /// direction. `film_id` is always the last ordering key so page windows
    /// are stable across requests.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &FilmFilter,
        sort: &SortSpec,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Film>, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM film"));
        push_filter(&mut builder, filter);

        builder.push(" ORDER BY ");
        builder.push(sort.field.column());
        builder.push(" ");
        builder.push(sort.direction.as_sql());
        builder.push(" NULLS LAST");
        if sort.field != SortField::FilmId {
            builder.push(", film_id ASC");
        }

        builder.push(" LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        tracing::debug!(
            predicates = filter.predicates().len(),
            sort = sort.field.column(),
            limit,
            offset,
            "Listing films",
        );

        builder.build_query_as::<Film>().fetch_all(pool).await
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Films whose title matches at least one `ILIKE` pattern.
    ///
    /// Rows come back in `film_id` order; ranking happens in the caller.
    pub async fn search_candidates(
        pool: &PgPool,
        patterns: &[String],
    ) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film WHERE title ILIKE ANY($1) ORDER BY film_id ASC"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(patterns)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Relationship reads
    // -----------------------------------------------------------------------

    /// Films linked to a category through `film_category`, by title.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {F_COLUMNS} FROM film f \
             JOIN film_category fc ON fc.film_id = f.film_id \
             WHERE fc.category_id = $1 \
             ORDER BY f.title ASC, f.film_id ASC"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Films sharing at least one category with `film_id`, excluding itself.
    ///
    /// Ordered by the number of shared categories (most first), then title.
    pub async fn list_related(
        pool: &PgPool,
        film_id: DbId,
        limit: i64,
    ) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {F_COLUMNS} FROM film f \
             JOIN film_category fc ON fc.film_id = f.film_id \
             WHERE fc.category_id IN ( \
                     SELECT category_id FROM film_category WHERE film_id = $1 \
                 ) \
               AND f.film_id <> $1 \
             GROUP BY f.film_id \
             ORDER BY COUNT(*) DESC, f.title ASC, f.film_id ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(film_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Films with a backdrop image, newest release first.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film \
             WHERE backdrop_path IS NOT NULL AND backdrop_path <> '' \
             ORDER BY release_year DESC NULLS LAST, film_id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

/// Append `WHERE p1 AND p2 ...` for every predicate in the filter.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &FilmFilter) {
    let mut separator = " WHERE ";
    for predicate in filter.predicates() {
        builder.push(separator);
        separator = " AND ";

        match predicate {
            FilmPredicate::ReleaseYearAtMost(year) => {
                builder.push("release_year <= ");
                builder.push_bind(*year);
            }
            FilmPredicate::LanguageIn(ids) => {
                builder.push("language_id = ANY(");
                builder.push_bind(ids.clone());
                builder.push(")");
            }
            FilmPredicate::RentalRateAtMost(rate) => {
                builder.push("rental_rate <= ");
                builder.push_bind(*rate);
            }
            FilmPredicate::RatingIn(ratings) => {
                builder.push("rating = ANY(");
                builder.push_bind(ratings.clone());
                builder.push(")");
            }
        }
    }
}
