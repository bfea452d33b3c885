//! Route definitions for languages.

use axum::routing::get;
use axum::Router;

use super::collection;
use crate::handlers::language;
use crate::state::AppState;

/// ```text
/// GET    /languages       -> list
/// POST   /languages       -> create
/// GET    /languages/{id}  -> get_by_id
/// PUT    /languages/{id}  -> update
/// DELETE /languages/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    collection(
        Router::new(),
        "/languages",
        get(language::list).post(language::create),
    )
    .route(
        "/languages/{id}",
        get(language::get_by_id)
            .put(language::update)
            .delete(language::delete),
    )
}
