//! Domain logic for the rentavid catalog service.
//!
//! This crate has no I/O. It owns the error taxonomy and the pieces of the
//! film listing pipeline that do not need storage: filter composition,
//! sort-token resolution, relevance scoring and pagination arithmetic.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod sorting;
pub mod types;
pub mod validation;
