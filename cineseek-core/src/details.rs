use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use cineseek_model::{MovieDetails, MovieId};

use crate::error::SearchError;
use crate::providers::CatalogProvider;

/// Lifecycle of the currently open detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    /// No item is open.
    Closed,
    /// The extended record for this item is being fetched.
    Loading(MovieId),
    /// The extended record arrived.
    Loaded(MovieDetails),
    /// The record could not be loaded; `error` distinguishes a missing
    /// credential from a failed fetch.
    Unavailable { id: MovieId, error: SearchError },
}

/// On-demand loader for a single item's extended record.
///
/// Keyed to the currently open item: re-invoking [`DetailsLoader::open`]
/// with a different item supersedes the previous in-flight load, whose
/// resolution is then ignored. Entirely independent of the search
/// controller's lifecycle.
pub struct DetailsLoader {
    catalog: Arc<dyn CatalogProvider>,
    state_tx: watch::Sender<DetailsState>,
    inflight: Mutex<Option<CancellationToken>>,
}

impl std::fmt::Debug for DetailsLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailsLoader")
            .field("state", &*self.state_tx.borrow())
            .finish()
    }
}

impl DetailsLoader {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        let (state_tx, _) = watch::channel(DetailsState::Closed);
        Self {
            catalog,
            state_tx,
            inflight: Mutex::new(None),
        }
    }

    /// Subscribe to detail-state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.state_tx.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> DetailsState {
        self.state_tx.borrow().clone()
    }

    /// Open `id` and start loading its extended record. Must be called
    /// within a tokio runtime.
    pub fn open(&self, id: MovieId, api_key: Option<&str>) {
        let token = self.supersede();

        let Some(api_key) = api_key.filter(|k| !k.is_empty()) else {
            self.state_tx.send_replace(DetailsState::Unavailable {
                id,
                error: SearchError::MissingCredential,
            });
            return;
        };

        self.state_tx.send_replace(DetailsState::Loading(id));

        let catalog = Arc::clone(&self.catalog);
        let api_key = api_key.to_string();
        let state_tx = self.state_tx.clone();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = catalog.details(id, &api_key) => result,
            };
            let next = match result {
                Ok(details) => DetailsState::Loaded(details),
                Err(error) => {
                    tracing::warn!(%id, %error, "details fetch failed");
                    DetailsState::Unavailable {
                        id,
                        error: SearchError::DetailsUnavailable(id),
                    }
                }
            };
            // The token is re-checked inside the send critical section: a
            // newer open()/close() cancels first and then writes, so a stale
            // resolution can never overwrite the newer state.
            state_tx.send_if_modified(|state| {
                if token.is_cancelled() {
                    return false;
                }
                *state = next;
                true
            });
        });
    }

    /// Close the detail view and discard any in-flight load.
    pub fn close(&self) {
        self.supersede();
        self.state_tx.send_replace(DetailsState::Closed);
    }

    /// Cancel the previous load and install a fresh token for the next one.
    fn supersede(&self) -> CancellationToken {
        let mut inflight = self
            .inflight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(previous) = inflight.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        *inflight = Some(token.clone());
        token
    }
}
