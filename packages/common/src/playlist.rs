use serde::{Deserialize, Serialize};

use crate::content::Content;

/// Snapshot of a content item taken when it was added to a playlist.
///
/// Items are copies, not references: editing or deleting the content later
/// leaves the snapshot untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_id: String,
    pub title: String,
    pub image_url: String,
    pub url: String,
}

impl From<&Content> for PlaylistItem {
    fn from(content: &Content) -> Self {
        Self {
            content_id: content.id.clone(),
            title: content.title.clone(),
            image_url: content.image_url.clone(),
            url: content.url.clone(),
        }
    }
}

/// A user-owned ordered list of content snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

impl Playlist {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn contains(&self, content_id: &str) -> bool {
        self.items.iter().any(|item| item.content_id == content_id)
    }

    /// Append a snapshot of `content` unless its id is already present.
    ///
    /// Returns `true` if an item was added.
    pub fn push_snapshot(&mut self, content: &Content) -> bool {
        if self.contains(&content.id) {
            return false;
        }
        self.items.push(PlaylistItem::from(content));
        true
    }

    /// Drop the item for `content_id`. Returns `true` if one was removed.
    pub fn remove_item(&mut self, content_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.content_id != content_id);
        self.items.len() != before
    }
}
