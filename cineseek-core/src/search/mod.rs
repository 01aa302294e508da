//! Incremental search domain: state machine, controller actor, and the
//! generation-tagged fetch outcomes that make stale responses impossible to
//! apply.

pub mod controller;
pub mod state;

pub use controller::SearchController;
pub use state::{FetchOutcome, SearchPhase, SearchState};
