//! Scripted catalog double shared by the controller tests.
//!
//! Every call is surfaced to the test as a message carrying a oneshot
//! responder, so tests decide when and in which order requests resolve —
//! which is exactly what the supersession properties need.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use cineseek_core::providers::{CatalogError, CatalogProvider};
use cineseek_model::{MovieDetails, MovieId, MovieSummary, SearchResultPage};

pub struct SearchCall {
    pub text: String,
    pub page: u32,
    pub api_key: String,
    pub respond: oneshot::Sender<Result<SearchResultPage, CatalogError>>,
}

pub struct DetailsCall {
    pub id: MovieId,
    pub api_key: String,
    pub respond: oneshot::Sender<Result<MovieDetails, CatalogError>>,
}

pub struct ScriptedCatalog {
    searches: mpsc::UnboundedSender<SearchCall>,
    details: mpsc::UnboundedSender<DetailsCall>,
}

impl ScriptedCatalog {
    pub fn new() -> (
        Arc<Self>,
        mpsc::UnboundedReceiver<SearchCall>,
        mpsc::UnboundedReceiver<DetailsCall>,
    ) {
        // Controller trace output when a scenario fails under --nocapture.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let (search_tx, search_rx) = mpsc::unbounded_channel();
        let (details_tx, details_rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                searches: search_tx,
                details: details_tx,
            }),
            search_rx,
            details_rx,
        )
    }
}

#[async_trait]
impl CatalogProvider for ScriptedCatalog {
    async fn search(
        &self,
        text: &str,
        page: u32,
        api_key: &str,
    ) -> Result<SearchResultPage, CatalogError> {
        let (respond, rx) = oneshot::channel();
        self.searches
            .send(SearchCall {
                text: text.to_string(),
                page,
                api_key: api_key.to_string(),
                respond,
            })
            .expect("test dropped the search script");
        rx.await
            .unwrap_or_else(|_| Err(CatalogError::Parse("responder dropped".to_string())))
    }

    async fn details(&self, id: MovieId, api_key: &str) -> Result<MovieDetails, CatalogError> {
        let (respond, rx) = oneshot::channel();
        self.details
            .send(DetailsCall {
                id,
                api_key: api_key.to_string(),
                respond,
            })
            .expect("test dropped the details script");
        rx.await
            .unwrap_or_else(|_| Err(CatalogError::Parse("responder dropped".to_string())))
    }
}

pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id: MovieId(id),
        title: title.to_string(),
        poster_path: None,
        release_date: None,
        vote_average: None,
    }
}

pub fn result_page(ids: &[u64], page: u32, total_pages: u32) -> SearchResultPage {
    SearchResultPage {
        items: ids.iter().map(|&id| movie(id, "Result")).collect(),
        page,
        total_pages,
    }
}

pub fn details_record(id: u64, director: &str) -> MovieDetails {
    MovieDetails {
        id: MovieId(id),
        overview: Some("An extended record.".to_string()),
        homepage: None,
        director: Some(director.to_string()),
        cast: vec!["Lead".to_string(), "Support".to_string()],
    }
}
