//! Core data model definitions shared across cineseek crates.

pub mod details;
pub mod ids;
pub mod media;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use details::MovieDetails;
pub use ids::MovieId;
pub use media::{FavoriteRecord, MovieSummary, SearchQuery, SearchResultPage};
