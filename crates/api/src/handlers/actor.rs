//! Handlers for `/actors` and the `/film-actors` association.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentavid_core::error::CoreError;
use rentavid_core::types::DbId;
use rentavid_core::validation::validate_input;
use rentavid_db::models::actor::{Actor, CreateActor, CreateFilmActor, FilmActor};
use rentavid_db::repositories::{ActorRepo, FilmActorRepo};

use crate::error::{AppError, AppResult};
use crate::query::SkipLimitParams;
use crate::state::AppState;

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    validate_input(&input)?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = actor.actor_id, "Actor created");
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /actors?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SkipLimitParams>,
) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(actors))
}

/// GET /actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    Ok(Json(actor))
}

/// POST /film-actors
pub async fn link_film(
    State(state): State<AppState>,
    Json(input): Json<CreateFilmActor>,
) -> AppResult<(StatusCode, Json<FilmActor>)> {
    let link = FilmActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = link.actor_id, film_id = link.film_id, "Actor linked to film");
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /film-actors?skip=&limit=
pub async fn list_links(
    State(state): State<AppState>,
    Query(params): Query<SkipLimitParams>,
) -> AppResult<Json<Vec<FilmActor>>> {
    let links = FilmActorRepo::list(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(links))
}
