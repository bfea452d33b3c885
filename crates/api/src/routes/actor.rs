//! Route definitions for actors and film-actor links.

use axum::routing::get;
use axum::Router;

use super::collection;
use crate::handlers::actor;
use crate::state::AppState;

/// ```text
/// GET    /actors       -> list
/// POST   /actors       -> create
/// GET    /actors/{id}  -> get_by_id
/// GET    /film-actors  -> list_links
/// POST   /film-actors  -> link_film
/// ```
pub fn router() -> Router<AppState> {
    let router = collection(Router::new(), "/actors", get(actor::list).post(actor::create))
        .route("/actors/{id}", get(actor::get_by_id));

    collection(
        router,
        "/film-actors",
        get(actor::list_links).post(actor::link_film),
    )
}
