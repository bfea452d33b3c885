//! Handlers for the `/films` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentavid_core::error::CoreError;
use rentavid_core::types::DbId;
use rentavid_core::validation::validate_input;
use rentavid_db::models::actor::Actor;
use rentavid_db::models::category::Category;
use rentavid_db::models::film::{
    CreateFilm, Film, FilmListParams, FilmPage, FilmSearchParams, UpdateFilm,
};
use rentavid_db::repositories::FilmRepo;

use crate::error::{AppError, AppResult};
use crate::listing;
use crate::state::AppState;

/// POST /films
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFilm>,
) -> AppResult<(StatusCode, Json<Film>)> {
    validate_input(&input)?;
    let film = FilmRepo::create(&state.pool, &input).await?;
    tracing::info!(film_id = film.film_id, title = %film.title, "Film created");
    Ok((StatusCode::CREATED, Json(film)))
}

/// GET /films
///
/// Filtered, sorted and paginated listing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FilmListParams>,
) -> AppResult<Json<FilmPage>> {
    let page = listing::list_films(&state.pool, &params).await?;
    Ok(Json(page))
}

/// GET /films/search?q=&limit=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<FilmSearchParams>,
) -> AppResult<Json<Vec<Film>>> {
    let films = listing::search_films(&state.pool, &params).await?;
    Ok(Json(films))
}

/// GET /films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Film>> {
    let film = FilmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    Ok(Json(film))
}

/// PUT /films/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFilm>,
) -> AppResult<Json<Film>> {
    validate_input(&input)?;
    let film = FilmRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    tracing::info!(film_id = id, "Film updated");
    Ok(Json(film))
}

/// DELETE /films/{id}
///
/// Returns the deleted film.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Film>> {
    let film = FilmRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    tracing::info!(film_id = id, "Film deleted");
    Ok(Json(film))
}

/// GET /films/{id}/related
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Film>>> {
    let films = listing::related_films(&state.pool, id).await?;
    Ok(Json(films))
}

/// GET /films/{id}/categories
pub async fn categories(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = listing::categories_of_film(&state.pool, id).await?;
    Ok(Json(categories))
}

/// GET /films/{id}/actors
pub async fn actors(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Actor>>> {
    let actors = listing::actors_of_film(&state.pool, id).await?;
    Ok(Json(actors))
}

/// GET /featured-films
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<Film>>> {
    let films = listing::featured_films(&state.pool).await?;
    Ok(Json(films))
}
