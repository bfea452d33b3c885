/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Connections are checked out per query and
    /// returned when the query future completes or is dropped.
    pub pool: rentavid_db::DbPool,
}
