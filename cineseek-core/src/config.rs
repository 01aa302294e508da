use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the search core.
///
/// `page_cap` mirrors the remote catalog's own pagination ceiling; it is a
/// constant of the service, not something derived from responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the catalog API.
    pub api_base: String,
    /// Base URL for poster/profile images.
    pub image_base: String,
    /// `language` query parameter sent with every catalog request.
    pub language: String,
    /// Quiet period after the last keystroke before a search is issued.
    pub debounce: Duration,
    /// Hard ceiling on `total_pages` reported to consumers.
    pub page_cap: u32,
    /// Maximum number of cast names carried in a detail record.
    pub cast_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.themoviedb.org/3".to_string(),
            image_base: "https://image.tmdb.org/t/p".to_string(),
            language: "en-US".to_string(),
            debounce: Duration::from_millis(400),
            page_cap: 500,
            cast_limit: 8,
        }
    }
}
