//! Route definitions for categories and film-category links.

use axum::routing::get;
use axum::Router;

use super::collection;
use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET    /categories            -> list
/// POST   /categories            -> create
/// GET    /categories/{id}       -> get_by_id
/// PUT    /categories/{id}       -> update
/// DELETE /categories/{id}       -> delete
/// GET    /categories/{id}/films -> films
/// GET    /film-categories       -> list_links
/// POST   /film-categories       -> link_film
/// ```
pub fn router() -> Router<AppState> {
    let router = collection(
        Router::new(),
        "/categories",
        get(category::list).post(category::create),
    )
    .route(
        "/categories/{id}",
        get(category::get_by_id)
            .put(category::update)
            .delete(category::delete),
    )
    .route("/categories/{id}/films", get(category::films));

    collection(
        router,
        "/film-categories",
        get(category::list_links).post(category::link_film),
    )
}
