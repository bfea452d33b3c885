//! Film entity model, DTOs and listing/search parameters.

use rentavid_core::pagination::Pagination;
use rentavid_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `film` table. Also the external projection of a film.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub release_year: Option<i32>,
    pub language_id: DbId,
    pub rental_duration: i32,
    pub rental_rate: f64,
    pub length: Option<i32>,
    pub replacement_cost: f64,
    pub rating: Option<String>,
    pub last_update: Timestamp,
}

/// DTO for creating a film.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFilm {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    #[validate(range(min = 0))]
    pub release_year: Option<i32>,
    pub language_id: DbId,
    #[validate(range(min = 0))]
    pub rental_duration: i32,
    #[validate(range(min = 0.0))]
    pub rental_rate: f64,
    #[validate(range(min = 0))]
    pub length: Option<i32>,
    #[validate(range(min = 0.0))]
    pub replacement_cost: f64,
    pub rating: Option<String>,
}

/// Films are updated as a full record: every attribute is replaced.
pub type UpdateFilm = CreateFilm;

/// Query parameters for `GET /films`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmListParams {
    /// Upper bound (inclusive) on `release_year`.
    pub release_year: Option<i32>,
    /// Comma-separated language names.
    pub languages: Option<String>,
    /// Upper bound (inclusive) on `rental_rate`.
    pub rental_rate: Option<f64>,
    /// Comma-separated exact rating values.
    pub rating: Option<String>,
    /// `{camelCaseField}_{asc|desc}`.
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Response body for `GET /films`.
#[derive(Debug, Clone, Serialize)]
pub struct FilmPage {
    pub pagination: Pagination,
    pub films: Vec<Film>,
}

/// Query parameters for `GET /films/search`.
#[derive(Debug, Default, Deserialize)]
pub struct FilmSearchParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}
