//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Query parameter structs for the endpoints that read the entity

pub mod actor;
pub mod category;
pub mod film;
pub mod language;
