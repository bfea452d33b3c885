//! Shared query parameter types for API handlers.

use rentavid_core::pagination::{clamp_limit, clamp_offset};
use serde::Deserialize;

/// Default number of rows for the plain CRUD list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of rows for the plain CRUD list endpoints.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Offset pagination parameters (`?skip=&limit=`) for the CRUD list endpoints.
///
/// Out-of-range values are clamped rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct SkipLimitParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl SkipLimitParams {
    pub fn skip(&self) -> i64 {
        clamp_offset(self.skip)
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT)
    }
}
