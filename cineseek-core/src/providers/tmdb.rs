use reqwest::Client;
use serde::Deserialize;

use async_trait::async_trait;
use cineseek_model::{MovieDetails, MovieId, MovieSummary, SearchResultPage};

use super::traits::{CatalogError, CatalogProvider};
use crate::config::SearchConfig;

/// TMDB-backed catalog provider.
pub struct TmdbCatalog {
    config: SearchConfig,
    client: Client,
}

impl std::fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("api_base", &self.config.api_base)
            .field("language", &self.config.language)
            .finish()
    }
}

impl TmdbCatalog {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn check_status(status: reqwest::StatusCode) -> Result<(), CatalogError> {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::InvalidApiKey);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    page: u32,
    results: Vec<TmdbSearchResult>,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResult {
    id: u64,
    title: String,
    poster_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetails {
    id: u64,
    overview: Option<String>,
    homepage: Option<String>,
    credits: Option<TmdbCredits>,
}

#[derive(Debug, Deserialize)]
struct TmdbCredits {
    #[serde(default)]
    cast: Vec<TmdbCast>,
    #[serde(default)]
    crew: Vec<TmdbCrew>,
}

#[derive(Debug, Deserialize)]
struct TmdbCast {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbCrew {
    name: String,
    job: String,
}

/// Empty strings from TMDB (dates, homepages) carry no information.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn map_search_response(raw: TmdbSearchResponse, page_cap: u32) -> SearchResultPage {
    SearchResultPage {
        page: raw.page,
        // The catalog's own pagination ceiling; everything beyond it 404s.
        total_pages: raw.total_pages.min(page_cap),
        items: raw
            .results
            .into_iter()
            .map(|r| MovieSummary {
                id: MovieId(r.id),
                title: r.title,
                poster_path: r.poster_path,
                release_date: non_empty(r.release_date),
                vote_average: r.vote_average,
            })
            .collect(),
    }
}

fn map_details(raw: TmdbMovieDetails, cast_limit: usize) -> MovieDetails {
    let (cast, director) = match raw.credits {
        Some(credits) => (
            credits
                .cast
                .into_iter()
                .take(cast_limit)
                .map(|c| c.name)
                .collect(),
            credits
                .crew
                .into_iter()
                .find(|c| c.job == "Director")
                .map(|c| c.name),
        ),
        None => (Vec::new(), None),
    };

    MovieDetails {
        id: MovieId(raw.id),
        overview: non_empty(raw.overview),
        homepage: non_empty(raw.homepage),
        director,
        cast,
    }
}

#[async_trait]
impl CatalogProvider for TmdbCatalog {
    async fn search(
        &self,
        text: &str,
        page: u32,
        api_key: &str,
    ) -> Result<SearchResultPage, CatalogError> {
        let url = format!("{}/search/movie", self.config.api_base);
        let page_param = page.to_string();
        tracing::debug!(%url, page, "issuing catalog search");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("query", text),
                ("page", page_param.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await?;

        Self::check_status(response.status())?;

        let raw: TmdbSearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(
            results = raw.results.len(),
            total_pages = raw.total_pages,
            "catalog search returned"
        );

        Ok(map_search_response(raw, self.config.page_cap))
    }

    async fn details(&self, id: MovieId, api_key: &str) -> Result<MovieDetails, CatalogError> {
        let url = format!("{}/movie/{}", self.config.api_base, id);
        tracing::debug!(%url, "fetching movie details");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("language", self.config.language.as_str()),
                ("append_to_response", "credits"),
            ])
            .send()
            .await?;

        Self::check_status(response.status())?;

        let raw: TmdbMovieDetails = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(map_details(raw, self.config.cast_limit))
    }
}
