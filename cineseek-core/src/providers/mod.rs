//! Catalog provider seam.
//!
//! The controllers only see the [`CatalogProvider`] trait; the TMDB
//! implementation lives behind it so the state machines can be exercised
//! against a scripted catalog in tests.

pub mod tmdb;
pub mod traits;

pub use tmdb::TmdbCatalog;
pub use traits::{CatalogError, CatalogProvider};
