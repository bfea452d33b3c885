pub mod actor;
pub mod category;
pub mod film;
pub mod health;
pub mod language;

use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /films                        list, create
/// /films/search                 relevance search
/// /films/{id}                   get, update, delete
/// /films/{id}/related           films sharing a category
/// /films/{id}/categories        categories of a film
/// /films/{id}/actors            actors of a film
/// /featured-films               films with a backdrop
///
/// /categories                   list, create
/// /categories/{id}              get, update, delete
/// /categories/{id}/films        films in a category
/// /film-categories              list, create
///
/// /actors                       list, create
/// /actors/{id}                  get
/// /film-actors                  list, create
///
/// /languages                    list, create
/// /languages/{id}               get, update, delete
/// ```
///
/// Collection paths also answer with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(film::router())
        .merge(category::router())
        .merge(actor::router())
        .merge(language::router())
}

/// Register `handler` at both `path` and `path/`.
pub(crate) fn collection(
    router: Router<AppState>,
    path: &str,
    handler: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, handler.clone())
        .route(&format!("{path}/"), handler)
}
