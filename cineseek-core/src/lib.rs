//! Incremental movie search core.
//!
//! The interesting problem here is the [`search::SearchController`]: it turns
//! free-text keystrokes into debounced, cancellable, paginated catalog
//! queries and reconciles out-of-order responses so that displayed results
//! always correspond to the most recently *issued* request. Around it sit a
//! persistent favorites registry, an on-demand detail loader with the same
//! supersession rule, and the catalog provider seam.
//!
//! No presentation concerns live here; consumers subscribe to state
//! snapshots over `tokio::sync::watch` channels and feed intents back in.

pub mod config;
pub mod details;
pub mod error;
pub mod favorites;
pub mod providers;
pub mod search;
pub mod store;

pub use config::SearchConfig;
pub use details::{DetailsLoader, DetailsState};
pub use error::SearchError;
pub use favorites::FavoritesRegistry;
pub use providers::{CatalogError, CatalogProvider, TmdbCatalog};
pub use search::{FetchOutcome, SearchController, SearchPhase, SearchState};
pub use store::PersistentStore;
