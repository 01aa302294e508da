use serde::{Deserialize, Serialize};

use crate::ids::MovieId;

/// The query the search controller is currently tracking.
///
/// `page` is 1-based and, once a result page is known, stays within
/// `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub page: u32,
}

impl SearchQuery {
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::empty()
    }
}

/// One page of catalog search results.
///
/// A page always replaces the previous one wholesale; results from different
/// pages are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub items: Vec<MovieSummary>,
    pub page: u32,
    pub total_pages: u32,
}

/// A single search hit as the catalog lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    /// ISO date string (`YYYY-MM-DD`) as the catalog reports it.
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
}

impl MovieSummary {
    /// Release year, derived from the leading segment of the ISO date.
    pub fn release_year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }

    /// Full poster URL for a given image base and size segment
    /// (e.g. `https://image.tmdb.org/t/p` + `w500`).
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}/{}{}", image_base, size, path))
    }
}

/// Reduced projection of a [`MovieSummary`] kept in the favorites set.
///
/// Only identity and display fields survive; extended data is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
}

impl From<&MovieSummary> for FavoriteRecord {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
        }
    }
}
