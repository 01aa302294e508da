use cineseek_model::{SearchQuery, SearchResultPage};

use crate::error::SearchError;

/// Where the controller currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Query text is empty; nothing pending, nothing shown.
    Idle,
    /// Text changed; the quiet-period timer is running.
    Debouncing,
    /// A request is in flight.
    Loading,
    /// Results are populated for the current query.
    Ready,
    /// The last issued request failed; `error` says how.
    Failed,
}

/// Snapshot of controller state, published over a watch channel on every
/// transition.
///
/// `results` holds the last page that actually arrived; it survives
/// `Debouncing`/`Loading` so consumers can keep stale results on screen
/// until the replacement lands, and is cleared only on return to `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: SearchQuery,
    pub phase: SearchPhase,
    pub results: Option<SearchResultPage>,
    pub error: Option<SearchError>,
}

impl SearchState {
    pub fn idle() -> Self {
        Self {
            query: SearchQuery::empty(),
            phase: SearchPhase::Idle,
            results: None,
            error: None,
        }
    }

    /// Known pagination bound, once at least one page has resolved.
    pub fn total_pages(&self) -> Option<u32> {
        self.results.as_ref().map(|r| r.total_pages)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Terminal outcome of one issued request.
///
/// Outcomes travel back to the controller tagged with the generation that
/// issued them; a mismatched generation is discarded before this enum is
/// even inspected, so a superseded `Resolved` can never overwrite newer
/// results.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Resolved(SearchResultPage),
    Failed(SearchError),
    Canceled,
}
