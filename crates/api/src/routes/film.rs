//! Route definitions for films.

use axum::routing::get;
use axum::Router;

use super::collection;
use crate::handlers::film;
use crate::state::AppState;

/// ```text
/// GET    /films                 -> list
/// POST   /films                 -> create
/// GET    /films/search          -> search
/// GET    /films/{id}            -> get_by_id
/// PUT    /films/{id}            -> update
/// DELETE /films/{id}            -> delete
/// GET    /films/{id}/related    -> related
/// GET    /films/{id}/categories -> categories
/// GET    /films/{id}/actors     -> actors
/// GET    /featured-films        -> featured
/// ```
pub fn router() -> Router<AppState> {
    let router = collection(Router::new(), "/films", get(film::list).post(film::create))
        .route("/films/search", get(film::search))
        .route(
            "/films/{id}",
            get(film::get_by_id).put(film::update).delete(film::delete),
        )
        .route("/films/{id}/related", get(film::related))
        .route("/films/{id}/categories", get(film::categories))
        .route("/films/{id}/actors", get(film::actors));

    collection(router, "/featured-films", get(film::featured))
}
