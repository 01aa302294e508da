use serde::{Deserialize, Serialize};

/// Strongly typed catalog identity for a movie.
///
/// The remote catalog assigns these; they are never minted locally, so there
/// is no constructor beyond wrapping the raw integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MovieId {
    fn from(raw: u64) -> Self {
        MovieId(raw)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
