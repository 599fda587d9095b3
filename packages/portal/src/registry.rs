//! In-memory registry of users, content and playlists.
//!
//! Every mutator rewrites the changed collection to the [`PersistentStore`]
//! and only then replaces the in-memory copy, so a failed write changes
//! nothing. Unknown identifiers are silent no-ops and no operation checks
//! that referenced users or content exist.

use chrono::Utc;
use tracing::debug;

use common::{Content, ContentDraft, Playlist, Role, User, generate_id};

use crate::config::SeedConfig;
use crate::error::Result;
use crate::password::PasswordHashing;
use crate::store::PersistentStore;

pub struct Registry {
    store: PersistentStore,
    hashing: PasswordHashing,
    users: Vec<User>,
    content: Vec<Content>,
    playlists: Vec<Playlist>,
}

impl Registry {
    /// Load (and, on first run, seed) the collections from `store`.
    pub fn open(store: PersistentStore, seed: &SeedConfig, hashing: PasswordHashing) -> Result<Self> {
        let snapshot = store.load(seed, &hashing)?;
        debug!(
            users = snapshot.users.len(),
            content = snapshot.content.len(),
            playlists = snapshot.playlists.len(),
            "Registry loaded"
        );

        Ok(Self {
            store,
            hashing,
            users: snapshot.users,
            content: snapshot.content,
            playlists: snapshot.playlists,
        })
    }

    pub fn hashing(&self) -> &PasswordHashing {
        &self.hashing
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Content, most recently published first.
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Case-insensitive lookup by login key.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email_matches(email))
    }

    pub fn find_content(&self, id: &str) -> Option<&Content> {
        self.content.iter().find(|c| c.id == id)
    }

    pub fn find_playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn playlists_for<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Playlist> {
        self.playlists.iter().filter(move |p| p.is_owned_by(user_id))
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Create a `USER` account. The password is stored only as a hash.
    pub fn add_user(&mut self, nickname: &str, email: &str, password: &str) -> Result<User> {
        let user = User {
            id: generate_id("user"),
            nickname: nickname.to_string(),
            email: email.to_string(),
            password_hash: self.hashing.hash(password)?,
            role: Role::User,
        };

        let mut users = self.users.clone();
        users.push(user.clone());
        self.commit_users(users)?;
        debug!(user_id = %user.id, "Added user");

        Ok(user)
    }

    /// Replace the user with the same identifier.
    pub fn update_user(&mut self, user: User) -> Result<()> {
        let mut users = self.users.clone();
        if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
            *slot = user;
        }
        self.commit_users(users)
    }

    pub fn delete_user(&mut self, id: &str) -> Result<()> {
        let mut users = self.users.clone();
        users.retain(|u| u.id != id);
        self.commit_users(users)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Publish `draft` as a new item at the head of the feed.
    pub fn add_content(&mut self, draft: ContentDraft, author_id: &str) -> Result<Content> {
        let content = Content {
            id: generate_id("content"),
            content_type: draft.content_type,
            title: draft.title,
            description: draft.description,
            url: draft.url,
            image_url: draft.image_url,
            author_id: author_id.to_string(),
            created_at: Utc::now(),
        };

        let mut feed = self.content.clone();
        feed.insert(0, content.clone());
        self.commit_content(feed)?;
        debug!(content_id = %content.id, "Added content");

        Ok(content)
    }

    /// Replace the content item with the same identifier.
    pub fn update_content(&mut self, content: Content) -> Result<()> {
        let mut feed = self.content.clone();
        if let Some(slot) = feed.iter_mut().find(|c| c.id == content.id) {
            *slot = content;
        }
        self.commit_content(feed)
    }

    /// Remove a content item. Playlist snapshots of it are kept.
    pub fn delete_content(&mut self, id: &str) -> Result<()> {
        let mut feed = self.content.clone();
        feed.retain(|c| c.id != id);
        self.commit_content(feed)
    }

    // =========================================================================
    // Playlists
    // =========================================================================

    pub fn add_playlist(&mut self, name: &str, user_id: &str) -> Result<Playlist> {
        let playlist = Playlist {
            id: generate_id("playlist"),
            name: name.to_string(),
            user_id: user_id.to_string(),
            items: Vec::new(),
        };

        let mut playlists = self.playlists.clone();
        playlists.push(playlist.clone());
        self.commit_playlists(playlists)?;
        debug!(playlist_id = %playlist.id, "Added playlist");

        Ok(playlist)
    }

    pub fn delete_playlist(&mut self, id: &str) -> Result<()> {
        let mut playlists = self.playlists.clone();
        playlists.retain(|p| p.id != id);
        self.commit_playlists(playlists)
    }

    /// Append a snapshot of `content` to the playlist.
    ///
    /// Adding content that is already in the playlist changes nothing.
    pub fn add_content_to_playlist(&mut self, playlist_id: &str, content: &Content) -> Result<()> {
        let mut playlists = self.playlists.clone();
        if let Some(playlist) = playlists.iter_mut().find(|p| p.id == playlist_id) {
            playlist.push_snapshot(content);
        }
        self.commit_playlists(playlists)
    }

    pub fn remove_content_from_playlist(&mut self, playlist_id: &str, content_id: &str) -> Result<()> {
        let mut playlists = self.playlists.clone();
        if let Some(playlist) = playlists.iter_mut().find(|p| p.id == playlist_id) {
            playlist.remove_item(content_id);
        }
        self.commit_playlists(playlists)
    }

    fn commit_users(&mut self, users: Vec<User>) -> Result<()> {
        self.store.save_users(&users)?;
        self.users = users;
        Ok(())
    }

    fn commit_content(&mut self, content: Vec<Content>) -> Result<()> {
        self.store.save_content(&content)?;
        self.content = content;
        Ok(())
    }

    fn commit_playlists(&mut self, playlists: Vec<Playlist>) -> Result<()> {
        self.store.save_playlists(&playlists)?;
        self.playlists = playlists;
        Ok(())
    }
}
