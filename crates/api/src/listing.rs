//! Film listing, search and relationship reads.
//!
//! The listing runs as a fixed pipeline: resolve the sort order, validate the
//! page window, parse the filter criteria, resolve language names, count the
//! filtered set and fetch one page of it. Every step that can reject the
//! request runs before any film row is read.

use rentavid_core::error::CoreError;
use rentavid_core::filter::FilmCriteria;
use rentavid_core::pagination::{PageRequest, Pagination};
use rentavid_core::search::SearchQuery;
use rentavid_core::sorting::SortSpec;
use rentavid_core::types::DbId;
use rentavid_db::models::actor::Actor;
use rentavid_db::models::category::Category;
use rentavid_db::models::film::{Film, FilmListParams, FilmPage, FilmSearchParams};
use rentavid_db::repositories::{ActorRepo, CategoryRepo, FilmRepo, LanguageRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// Maximum number of films returned by the related-films read.
pub const RELATED_FILMS_LIMIT: i64 = 10;

/// Maximum number of films returned by the featured-films read.
pub const FEATURED_FILMS_LIMIT: i64 = 10;

/// Run the filtered, sorted, paginated film listing.
pub async fn list_films(pool: &PgPool, params: &FilmListParams) -> AppResult<FilmPage> {
    let sort = SortSpec::from_param(params.sort.as_deref())?;
    let page = PageRequest::from_params(params.page, params.limit)?;
    let criteria = FilmCriteria::from_query(
        params.release_year,
        params.languages.as_deref(),
        params.rental_rate,
        params.rating.as_deref(),
    )?;

    // Unknown names resolve to nothing, so the filter still applies and
    // matches no rows.
    let language_ids = match criteria.language_names() {
        Some(names) => Some(LanguageRepo::resolve_ids(pool, names).await?),
        None => None,
    };
    let filter = criteria.into_filter(language_ids);

    let total_items = FilmRepo::count_filtered(pool, &filter).await?;
    let films = if page.offset() < total_items {
        FilmRepo::list_filtered(pool, &filter, &sort, page.page_size(), page.offset()).await?
    } else {
        Vec::new()
    };

    tracing::debug!(
        total_items,
        page = page.page(),
        returned = films.len(),
        "Film listing complete",
    );

    Ok(FilmPage {
        pagination: Pagination::new(total_items, &page),
        films,
    })
}

/// Rank films by how many query terms their title contains.
pub async fn search_films(pool: &PgPool, params: &FilmSearchParams) -> AppResult<Vec<Film>> {
    let query = SearchQuery::new(params.q.as_deref().unwrap_or(""), params.limit)?;
    let candidates = FilmRepo::search_candidates(pool, &query.like_patterns()).await?;
    let candidate_count = candidates.len();
    let ranked = query.rank(candidates, |film| film.title.as_str())?;

    tracing::debug!(
        terms = query.terms().len(),
        candidates = candidate_count,
        returned = ranked.len(),
        "Film search complete",
    );

    Ok(ranked.into_iter().map(|r| r.item).collect())
}

/// Categories attached to a film.
pub async fn categories_of_film(pool: &PgPool, film_id: DbId) -> AppResult<Vec<Category>> {
    ensure_film_exists(pool, film_id).await?;
    Ok(CategoryRepo::list_by_film(pool, film_id).await?)
}

/// Actors appearing in a film.
pub async fn actors_of_film(pool: &PgPool, film_id: DbId) -> AppResult<Vec<Actor>> {
    ensure_film_exists(pool, film_id).await?;
    Ok(ActorRepo::list_by_film(pool, film_id).await?)
}

/// Films sharing at least one category with `film_id`.
pub async fn related_films(pool: &PgPool, film_id: DbId) -> AppResult<Vec<Film>> {
    ensure_film_exists(pool, film_id).await?;
    Ok(FilmRepo::list_related(pool, film_id, RELATED_FILMS_LIMIT).await?)
}

/// Films filed under a category.
pub async fn films_in_category(pool: &PgPool, category_id: DbId) -> AppResult<Vec<Film>> {
    if !CategoryRepo::exists(pool, category_id).await? {
        return Err(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }
        .into());
    }
    Ok(FilmRepo::list_by_category(pool, category_id).await?)
}

pub async fn featured_films(pool: &PgPool) -> AppResult<Vec<Film>> {
    Ok(FilmRepo::list_featured(pool, FEATURED_FILMS_LIMIT).await?)
}

async fn ensure_film_exists(pool: &PgPool, film_id: DbId) -> AppResult<()> {
    if FilmRepo::exists(pool, film_id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Film",
            id: film_id,
        }
        .into())
    }
}
