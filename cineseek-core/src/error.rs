use cineseek_model::MovieId;

use crate::providers::CatalogError;

/// User-facing failure taxonomy of the search core.
///
/// Superseded or cancelled requests are deliberately absent: a stale
/// resolution is discarded, never surfaced as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No API key is configured; the request was never issued.
    #[error("no API key configured")]
    MissingCredential,

    /// The catalog rejected the configured API key.
    #[error("the catalog rejected the API key")]
    InvalidCredential,

    /// The catalog request failed: remote error status, network failure, or
    /// a malformed response body.
    #[error("search request failed (status: {status:?})")]
    FetchFailed { status: Option<u16> },

    /// The detail record for an opened item could not be loaded.
    #[error("details unavailable for movie {0}")]
    DetailsUnavailable(MovieId),
}

impl From<CatalogError> for SearchError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidApiKey => SearchError::InvalidCredential,
            CatalogError::RateLimited => SearchError::FetchFailed { status: Some(429) },
            CatalogError::Status(status) => SearchError::FetchFailed {
                status: Some(status),
            },
            CatalogError::Network(_) | CatalogError::Parse(_) => {
                SearchError::FetchFailed { status: None }
            }
        }
    }
}
