//! Handlers for the `/languages` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentavid_core::error::CoreError;
use rentavid_core::types::DbId;
use rentavid_core::validation::validate_input;
use rentavid_db::models::language::{CreateLanguage, Language, UpdateLanguage};
use rentavid_db::repositories::LanguageRepo;

use crate::error::{AppError, AppResult};
use crate::query::SkipLimitParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Language",
        id,
    })
}

/// POST /languages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLanguage>,
) -> AppResult<(StatusCode, Json<Language>)> {
    validate_input(&input)?;
    let language = LanguageRepo::create(&state.pool, &input).await?;
    tracing::info!(language_id = language.language_id, name = %language.name, "Language created");
    Ok((StatusCode::CREATED, Json(language)))
}

/// GET /languages?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SkipLimitParams>,
) -> AppResult<Json<Vec<Language>>> {
    let languages = LanguageRepo::list(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(languages))
}

/// GET /languages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Language>> {
    let language = LanguageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(language))
}

/// PUT /languages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLanguage>,
) -> AppResult<Json<Language>> {
    validate_input(&input)?;
    let language = LanguageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(language_id = id, "Language updated");
    Ok(Json(language))
}

/// DELETE /languages/{id}
///
/// Fails with 409 while films still reference the language.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Language>> {
    let language = LanguageRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(language_id = id, "Language deleted");
    Ok(Json(language))
}
