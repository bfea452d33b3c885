//! Handlers for `/categories` and the `/film-categories` association.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentavid_core::error::CoreError;
use rentavid_core::types::DbId;
use rentavid_core::validation::validate_input;
use rentavid_db::models::category::{
    Category, CreateCategory, CreateFilmCategory, FilmCategory, UpdateCategory,
};
use rentavid_db::models::film::Film;
use rentavid_db::repositories::{CategoryRepo, FilmCategoryRepo};

use crate::error::{AppError, AppResult};
use crate::listing;
use crate::query::SkipLimitParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_input(&input)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.category_id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SkipLimitParams>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// PUT /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    validate_input(&input)?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(category_id = id, "Category updated");
    Ok(Json(category))
}

/// DELETE /categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(category_id = id, "Category deleted");
    Ok(Json(category))
}

/// GET /categories/{id}/films
pub async fn films(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Film>>> {
    let films = listing::films_in_category(&state.pool, id).await?;
    Ok(Json(films))
}

/// POST /film-categories
pub async fn link_film(
    State(state): State<AppState>,
    Json(input): Json<CreateFilmCategory>,
) -> AppResult<(StatusCode, Json<FilmCategory>)> {
    let link = FilmCategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(
        film_id = link.film_id,
        category_id = link.category_id,
        "Film linked to category",
    );
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /film-categories?skip=&limit=
pub async fn list_links(
    State(state): State<AppState>,
    Query(params): Query<SkipLimitParams>,
) -> AppResult<Json<Vec<FilmCategory>>> {
    let links = FilmCategoryRepo::list(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(links))
}
