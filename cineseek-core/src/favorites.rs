use std::collections::HashSet;

use cineseek_model::{FavoriteRecord, MovieId, MovieSummary};

use crate::store::{self, PersistentStore};

/// Deduplicated, ordered set of favorited movies, newest first.
///
/// The in-memory sequence and the persisted representation are kept
/// consistent after every mutation; persistence itself is best-effort (the
/// store swallows substrate failures), so toggling can never crash the
/// application.
#[derive(Debug)]
pub struct FavoritesRegistry {
    store: PersistentStore,
    records: Vec<FavoriteRecord>,
    index: HashSet<MovieId>,
}

impl FavoritesRegistry {
    /// Load the persisted set, tolerating absent or corrupt data.
    pub fn load(store: PersistentStore) -> Self {
        let records: Vec<FavoriteRecord> = store.get(store::FAVORITES, Vec::new());
        let index = records.iter().map(|r| r.id).collect();
        Self {
            store,
            records,
            index,
        }
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.index.contains(&id)
    }

    /// Add `movie` to the front of the set, or remove it if already present.
    pub fn toggle(&mut self, movie: &MovieSummary) {
        if self.index.remove(&movie.id) {
            self.records.retain(|r| r.id != movie.id);
        } else {
            self.index.insert(movie.id);
            self.records.insert(0, FavoriteRecord::from(movie));
        }
        self.persist();
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
        self.persist();
    }

    /// Current sequence, most recently added first.
    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        self.store.set(store::FAVORITES, &self.records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id: MovieId(id),
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    fn registry() -> (tempfile::TempDir, FavoritesRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let registry = FavoritesRegistry::load(PersistentStore::open(dir.path()));
        (dir, registry)
    }

    #[test]
    fn toggle_prepends_then_removes() {
        let (_dir, mut favorites) = registry();
        favorites.toggle(&movie(1, "Alien"));
        favorites.toggle(&movie(2, "Aliens"));

        assert!(favorites.is_favorite(MovieId(1)));
        assert!(favorites.is_favorite(MovieId(2)));
        assert_eq!(favorites.records()[0].id, MovieId(2));

        favorites.toggle(&movie(2, "Aliens"));
        assert!(!favorites.is_favorite(MovieId(2)));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn toggle_is_its_own_inverse_and_preserves_order() {
        let (_dir, mut favorites) = registry();
        favorites.toggle(&movie(1, "Alien"));
        favorites.toggle(&movie(2, "Aliens"));
        favorites.toggle(&movie(3, "Alien 3"));
        let before = favorites.records().to_vec();

        favorites.toggle(&movie(7, "Prometheus"));
        favorites.toggle(&movie(7, "Prometheus"));

        assert_eq!(favorites.records(), before.as_slice());
    }

    #[test]
    fn membership_tracks_odd_toggle_parity() {
        let (_dir, mut favorites) = registry();
        for _ in 0..3 {
            favorites.toggle(&movie(5, "Heat"));
        }
        for _ in 0..2 {
            favorites.toggle(&movie(6, "Ronin"));
        }
        assert!(favorites.is_favorite(MovieId(5)));
        assert!(!favorites.is_favorite(MovieId(6)));
    }

    #[test]
    fn survives_reload_from_the_same_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut favorites = FavoritesRegistry::load(PersistentStore::open(dir.path()));
            favorites.toggle(&movie(1, "Alien"));
            favorites.toggle(&movie(2, "Aliens"));
        }
        let reloaded = FavoritesRegistry::load(PersistentStore::open(dir.path()));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.records()[0].id, MovieId(2));
        assert!(reloaded.is_favorite(MovieId(1)));
    }

    #[test]
    fn clear_empties_set_and_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut favorites = FavoritesRegistry::load(PersistentStore::open(dir.path()));
        favorites.toggle(&movie(1, "Alien"));
        favorites.clear();
        assert!(favorites.is_empty());

        let reloaded = FavoritesRegistry::load(PersistentStore::open(dir.path()));
        assert!(reloaded.is_empty());
    }
}
