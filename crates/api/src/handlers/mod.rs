//! Request handlers for the catalog entities.
//!
//! Each submodule provides async handler functions for one entity type.
//! Handlers validate input, delegate to the repositories in `rentavid_db`
//! (or to [`crate::listing`] for composed reads) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod actor;
pub mod category;
pub mod film;
pub mod language;
