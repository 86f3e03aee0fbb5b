//! JSON-file persistence for feeds and saved articles.
//!
//! Loads are lenient: corrupt files, legacy wrapper shapes, and malformed
//! entries all degrade to "whatever was decodable", logged at warn level.
//! Saves return typed errors for the caller to surface.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use newsloom_model::{Article, Feed};
use serde_json::Value;
use thiserror::Error;

const FEEDS_FILE: &str = "feeds.json";
const SAVED_FILE: &str = "saved.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no platform data directory available")]
    NoDataDir,
}

/// File-backed store for the user's feeds and saved-article list.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store rooted at the platform data directory.
    pub fn open() -> Result<Self, StoreError> {
        let dir = dirs::data_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("newsloom");
        Ok(Store::at(dir))
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    /// Load the saved feeds. Accepts either a bare array or a legacy
    /// `{ "feeds": [...] }` wrapper; undecodable entries are dropped.
    pub fn load_feeds(&self) -> Vec<Feed> {
        let Some(value) = self.read_json(FEEDS_FILE) else {
            return Vec::new();
        };

        let entries = match &value {
            Value::Array(entries) => entries.as_slice(),
            Value::Object(obj) => {
                match obj.get("feeds").and_then(Value::as_array) {
                    Some(entries) => entries.as_slice(),
                    None => return Vec::new(),
                }
            }
            _ => return Vec::new(),
        };

        let feeds: Vec<Feed> =
            entries.iter().filter_map(Feed::decode).collect();
        if feeds.len() < entries.len() {
            log::warn!(
                "dropped {} undecodable feed entries",
                entries.len() - feeds.len()
            );
        }
        feeds
    }

    pub fn save_feeds(&self, feeds: &[Feed]) -> Result<(), StoreError> {
        self.write_json(FEEDS_FILE, serde_json::to_vec_pretty(feeds)?)
    }

    /// Load the saved-article list; anything undecodable is dropped.
    pub fn load_saved(&self) -> Vec<Article> {
        let Some(value) = self.read_json(SAVED_FILE) else {
            return Vec::new();
        };
        let Some(entries) = value.as_array() else {
            return Vec::new();
        };
        entries.iter().filter_map(Article::decode).collect()
    }

    pub fn save_saved(&self, articles: &[Article]) -> Result<(), StoreError> {
        self.write_json(SAVED_FILE, serde_json::to_vec_pretty(articles)?)
    }

    fn read_json(&self, file: &str) -> Option<Value> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!(
                    "discarding corrupt {}: {err}",
                    path.display()
                );
                None
            }
        }
    }

    fn write_json(
        &self,
        file: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(file), bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsloom_model::CategoryId;

    fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path());
        (dir, store)
    }

    #[test]
    fn missing_files_load_as_empty() {
        let (_dir, store) = store();
        assert!(store.load_feeds().is_empty());
        assert!(store.load_saved().is_empty());
    }

    #[test]
    fn feeds_round_trip_through_disk() {
        let (_dir, store) = store();
        let feed = Feed::new(
            "Morning",
            vec![CategoryId::Economy, CategoryId::Politics],
            crate::mix::normalize_weights(&[
                CategoryId::Economy,
                CategoryId::Politics,
            ]),
            1_700_000_000_000,
        );

        store.save_feeds(std::slice::from_ref(&feed)).unwrap();
        let loaded = store.load_feeds();
        assert_eq!(loaded, vec![feed]);
    }

    #[test]
    fn corrupt_feed_file_loads_as_empty() {
        let (dir, store) = store();
        fs::write(dir.path().join(FEEDS_FILE), b"{ not json").unwrap();
        assert!(store.load_feeds().is_empty());
    }

    #[test]
    fn legacy_wrapper_shape_is_accepted() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(FEEDS_FILE),
            br#"{ "feeds": [
                { "id": "f1", "name": "Tech", "selected": ["technology"] },
                { "name": "no id, dropped" }
            ] }"#,
        )
        .unwrap();

        let feeds = store.load_feeds();
        assert_eq!(feeds.len(), 1);
        assert_eq!(feeds[0].name, "Tech");
        assert_eq!(feeds[0].selected, vec![CategoryId::Technology]);
    }

    #[test]
    fn saved_articles_round_trip_and_drop_garbage() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(SAVED_FILE),
            br#"[
                { "id": "a1", "title": "Kept", "url": "https://e.com/1" },
                { "title": "no url, dropped" },
                42
            ]"#,
        )
        .unwrap();

        let saved = store.load_saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "a1");

        store.save_saved(&saved).unwrap();
        assert_eq!(store.load_saved(), saved);
    }
}
