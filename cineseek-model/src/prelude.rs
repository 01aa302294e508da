//! Convenience re-exports for downstream crates.

pub use crate::details::MovieDetails;
pub use crate::ids::MovieId;
pub use crate::media::{FavoriteRecord, MovieSummary, SearchQuery, SearchResultPage};
