use async_trait::async_trait;
use cineseek_model::{MovieDetails, MovieId, SearchResultPage};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid API key")]
    InvalidApiKey,

    #[error("rate limited")]
    RateLimited,

    #[error("catalog returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Remote movie catalog, read-only.
///
/// Both operations take the credential per call: the controllers own the key
/// and may see it change between requests.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Query the catalog for movies matching `text`, returning one page.
    async fn search(
        &self,
        text: &str,
        page: u32,
        api_key: &str,
    ) -> Result<SearchResultPage, CatalogError>;

    /// Fetch the extended record (overview, homepage, credits) for one movie.
    async fn details(&self, id: MovieId, api_key: &str) -> Result<MovieDetails, CatalogError>;
}
