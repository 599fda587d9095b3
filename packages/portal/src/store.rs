//! Durable mirror of the portal collections.
//!
//! Each collection is one JSON array under its own key and is rewritten as a
//! whole on every save. Absent or unreadable values load as empty
//! collections.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use common::storage::{KeyValueStore, StorageError};
use common::{Content, Playlist, User};

use crate::config::SeedConfig;
use crate::error::Result;
use crate::password::PasswordHashing;
use crate::seed;
use crate::session::SessionUser;

pub const USERS_KEY: &str = "cultur_users";
pub const CONTENT_KEY: &str = "cultur_content";
pub const PLAYLISTS_KEY: &str = "cultur_playlists";
pub const SESSION_KEY: &str = "cultur_user";

/// All three collections as read from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub content: Vec<Content>,
    pub playlists: Vec<Playlist>,
}

#[derive(Clone)]
pub struct PersistentStore {
    kv: Arc<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read the collections and apply first-run seeding.
    ///
    /// Plain-text passwords are replaced by hashes and a missing admin
    /// account is created; either change writes the users collection back
    /// immediately. An empty content collection is filled with the
    /// sample feed (unless disabled) and written back.
    pub fn load(&self, seed: &SeedConfig, hashing: &PasswordHashing) -> Result<Snapshot> {
        let mut snapshot = self.read_collections()?;

        let rehashed = seed::hash_plaintext_passwords(&mut snapshot.users, hashing)?;
        let seeded = seed::ensure_admin(&mut snapshot.users, seed, hashing)?;
        if rehashed > 0 || seeded {
            self.save_users(&snapshot.users)?;
        }

        if seed.sample_content && snapshot.content.is_empty() {
            snapshot.content = seed::sample_content(seed::sample_author(&snapshot.users));
            self.save_content(&snapshot.content)?;
        }

        Ok(snapshot)
    }

    /// Read the collections exactly as stored, without seeding.
    pub fn read_collections(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            users: self.read_collection(USERS_KEY)?,
            content: self.read_collection(CONTENT_KEY)?,
            playlists: self.read_collection(PLAYLISTS_KEY)?,
        })
    }

    pub fn save_users(&self, users: &[User]) -> Result<()> {
        self.write_collection(USERS_KEY, users)
    }

    pub fn save_content(&self, content: &[Content]) -> Result<()> {
        self.write_collection(CONTENT_KEY, content)
    }

    pub fn save_playlists(&self, playlists: &[Playlist]) -> Result<()> {
        self.write_collection(PLAYLISTS_KEY, playlists)
    }

    /// The stored session record, if one exists and is readable.
    ///
    /// An unreadable record is deleted.
    pub fn load_session(&self) -> Result<Option<SessionUser>> {
        let Some(raw) = self.read_raw(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session record");
                self.kv.remove(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    pub fn save_session(&self, user: &SessionUser) -> Result<()> {
        self.kv.set(SESSION_KEY, &serde_json::to_string(user)?)?;
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        self.kv.remove(SESSION_KEY)?;
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed stored collection");
                Ok(Vec::new())
            }
        }
    }

    /// Empty collections are written too, so a legitimate empty state is
    /// never replaced by an older non-empty one on the next load.
    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.kv.set(key, &json)?;
        tracing::debug!(key, count = items.len(), "Persisted collection");
        Ok(())
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        match self.kv.get(key) {
            Ok(value) => Ok(value),
            Err(StorageError::NotUtf8(_)) => {
                warn!(key, "Ignoring stored value that is not valid UTF-8");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
