use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::providers::CatalogProvider;

use super::state::{FetchOutcome, SearchPhase, SearchState};

/// User intents accepted by the controller.
#[derive(Debug)]
enum Intent {
    SetText(String),
    SetPage(u32),
    SetApiKey(Option<String>),
}

/// Generation-tagged resolution of a spawned request.
type Outcome = (u64, FetchOutcome);

/// Handle to the search controller actor.
///
/// All mutation happens inside a single spawned task, so there is exactly
/// one logical thread of state transitions and no locks. Dropping the handle
/// shuts the actor down and cancels any in-flight request.
#[derive(Debug)]
pub struct SearchController {
    intents: mpsc::UnboundedSender<Intent>,
    state_rx: watch::Receiver<SearchState>,
}

impl SearchController {
    /// Spawn the controller actor. Must be called within a tokio runtime.
    pub fn spawn(
        catalog: Arc<dyn CatalogProvider>,
        api_key: Option<String>,
        config: SearchConfig,
    ) -> Self {
        let (intents, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SearchState::idle());
        let inner = Inner {
            catalog,
            api_key: api_key.filter(|k| !k.is_empty()),
            config,
            state: SearchState::idle(),
            state_tx,
            generation: 0,
            inflight: None,
            debounce_deadline: None,
        };
        tokio::spawn(run(intent_rx, inner));
        Self { intents, state_rx }
    }

    /// The query text changed. Restarts the debounce window; empty text
    /// short-circuits straight to `Idle` without touching the network.
    pub fn set_text(&self, text: impl Into<String>) {
        let _ = self.intents.send(Intent::SetText(text.into()));
    }

    /// Navigate to another result page. Only honored from `Ready`/`Failed`,
    /// and only within the known page bounds.
    pub fn set_page(&self, page: u32) {
        let _ = self.intents.send(Intent::SetPage(page));
    }

    /// Swap the catalog credential. Takes effect at the next issued request.
    pub fn set_api_key(&self, api_key: Option<String>) {
        let _ = self.intents.send(Intent::SetApiKey(api_key));
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_rx.clone()
    }

    /// Current snapshot.
    pub fn state(&self) -> SearchState {
        self.state_rx.borrow().clone()
    }
}

/// Actor-owned state. Only `run` touches this.
struct Inner {
    catalog: Arc<dyn CatalogProvider>,
    api_key: Option<String>,
    config: SearchConfig,
    state: SearchState,
    state_tx: watch::Sender<SearchState>,
    /// Monotonic counter identifying the authoritative request. Bumped on
    /// every issue and on every cancellation, so any outcome carrying an
    /// older generation is stale by definition.
    generation: u64,
    inflight: Option<CancellationToken>,
    debounce_deadline: Option<Instant>,
}

async fn run(mut intents: mpsc::UnboundedReceiver<Intent>, mut inner: Inner) {
    let (outcome_tx, mut outcomes) = mpsc::unbounded_channel::<Outcome>();
    loop {
        let deadline = inner.debounce_deadline;
        tokio::select! {
            maybe_intent = intents.recv() => match maybe_intent {
                Some(intent) => inner.on_intent(intent, &outcome_tx),
                // Handle dropped; shut down.
                None => break,
            },
            Some((generation, outcome)) = outcomes.recv() => {
                inner.on_outcome(generation, outcome);
            },
            _ = debounce_elapsed(deadline), if deadline.is_some() => {
                inner.on_debounce_elapsed(&outcome_tx);
            },
        }
    }
    inner.cancel_inflight();
}

async fn debounce_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        // Guarded out by `if deadline.is_some()`.
        None => std::future::pending().await,
    }
}

impl Inner {
    fn on_intent(&mut self, intent: Intent, outcomes: &mpsc::UnboundedSender<Outcome>) {
        match intent {
            Intent::SetText(text) => self.on_set_text(text),
            Intent::SetPage(page) => self.on_set_page(page, outcomes),
            Intent::SetApiKey(api_key) => {
                self.api_key = api_key.filter(|k| !k.is_empty());
            }
        }
    }

    /// Text changed: both the pending timer and any in-flight request are
    /// dead, whatever state we were in.
    fn on_set_text(&mut self, text: String) {
        self.cancel_inflight();
        self.debounce_deadline = None;
        self.state.query.text = text;

        if self.state.query.text.is_empty() {
            self.state.query.page = 1;
            self.state.phase = SearchPhase::Idle;
            self.state.results = None;
            self.state.error = None;
        } else {
            self.state.phase = SearchPhase::Debouncing;
            self.state.error = None;
            self.debounce_deadline = Some(Instant::now() + self.config.debounce);
        }
        self.publish();
    }

    fn on_set_page(&mut self, page: u32, outcomes: &mpsc::UnboundedSender<Outcome>) {
        if !matches!(self.state.phase, SearchPhase::Ready | SearchPhase::Failed) {
            return;
        }
        let Some(total_pages) = self.state.total_pages() else {
            return;
        };
        if page < 1 || page > total_pages {
            tracing::debug!(page, total_pages, "rejecting out-of-range page intent");
            return;
        }
        if page == self.state.query.page {
            return;
        }
        self.state.query.page = page;
        self.issue_request(outcomes);
    }

    /// The quiet period elapsed; the tracked text is now authoritative.
    fn on_debounce_elapsed(&mut self, outcomes: &mpsc::UnboundedSender<Outcome>) {
        self.debounce_deadline = None;
        self.state.query.page = 1;
        self.issue_request(outcomes);
    }

    fn issue_request(&mut self, outcomes: &mpsc::UnboundedSender<Outcome>) {
        self.cancel_inflight();

        let Some(api_key) = self.api_key.clone() else {
            self.state.phase = SearchPhase::Failed;
            self.state.error = Some(SearchError::MissingCredential);
            self.publish();
            return;
        };

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        self.inflight = Some(token.clone());

        let catalog = Arc::clone(&self.catalog);
        let text = self.state.query.text.clone();
        let page = self.state.query.page;
        let outcome_tx = outcomes.clone();
        tracing::debug!(%text, page, generation, "issuing search request");

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => FetchOutcome::Canceled,
                result = catalog.search(&text, page, &api_key) => match result {
                    Ok(results) => FetchOutcome::Resolved(results),
                    Err(e) => FetchOutcome::Failed(e.into()),
                },
            };
            let _ = outcome_tx.send((generation, outcome));
        });

        self.state.phase = SearchPhase::Loading;
        self.state.error = None;
        self.publish();
    }

    fn on_outcome(&mut self, generation: u64, outcome: FetchOutcome) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding superseded response"
            );
            return;
        }
        match outcome {
            FetchOutcome::Resolved(mut page) => {
                self.inflight = None;
                page.total_pages = page.total_pages.min(self.config.page_cap);
                self.state.query.page = page.page;
                self.state.phase = SearchPhase::Ready;
                self.state.results = Some(page);
                self.state.error = None;
                self.publish();
            }
            FetchOutcome::Failed(error) => {
                self.inflight = None;
                tracing::warn!(%error, "search request failed");
                self.state.phase = SearchPhase::Failed;
                self.state.error = Some(error);
                self.publish();
            }
            // Cancelling bumps the generation first, so a Canceled outcome
            // always fails the generation check above. Nothing to apply.
            FetchOutcome::Canceled => {}
        }
    }

    /// Invalidate the in-flight request, if any. Bumping the generation here
    /// closes the race where a response was already queued before the token
    /// was cancelled.
    fn cancel_inflight(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
            self.generation += 1;
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}
