use serde::{Deserialize, Serialize};

use crate::ids::MovieId;

/// Extended record for a single opened movie.
///
/// Derived from the catalog's detail endpoint on demand and discarded when
/// the detail view closes; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub overview: Option<String>,
    pub homepage: Option<String>,
    /// First crew entry credited with the "Director" job, if any.
    pub director: Option<String>,
    /// Leading cast names in the catalog's listed order, bounded by the
    /// configured cast limit.
    pub cast: Vec<String>,
}
