use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Store key for the catalog API credential.
pub const API_KEY: &str = "api_key";
/// Store key for the persisted favorites sequence.
pub const FAVORITES: &str = "favorites";

/// String-keyed JSON store, one file per key under a root directory.
///
/// Reads never fail: absent or corrupt data falls back to the caller's
/// default. Writes are best-effort; an unavailable substrate degrades to
/// "did not persist" rather than an error, so callers above never have to
/// handle storage faults.
#[derive(Debug, Clone)]
pub struct PersistentStore {
    root: PathBuf,
}

impl PersistentStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if let Err(e) = fs::create_dir_all(&root) {
            tracing::warn!(root = %root.display(), error = %e, "could not create store directory");
        }
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read and decode the value under `key`, or return `fallback`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let path = self.path_for(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            // Absent key is the common cold-start case, not worth a log line.
            Err(_) => return fallback,
        };
        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt store entry");
                fallback
            }
        }
    }

    /// Encode and write `value` under `key`, best-effort.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_vec(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key, error = %e, "could not encode store entry");
                return;
            }
        };
        if let Err(e) = fs::write(self.path_for(key), encoded) {
            tracing::warn!(key, error = %e, "could not persist store entry");
        }
    }
}
