use std::fmt;
use std::str::FromStr;

use common::{Content, ContentType, Playlist};

use crate::error::AppError;
use crate::policy::{Permission, can_manage_playlist};
use crate::registry::Registry;
use crate::session::SessionUser;

/// Feed filter of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedFilter {
    #[default]
    All,
    Only(ContentType),
}

impl FeedFilter {
    pub fn matches(&self, content: &Content) -> bool {
        match self {
            Self::All => true,
            Self::Only(content_type) => content.content_type == *content_type,
        }
    }
}

impl fmt::Display for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(content_type) => write!(f, "{content_type}"),
        }
    }
}

impl FromStr for FeedFilter {
    type Err = common::content::ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// One item of the feed.
#[derive(Debug)]
pub struct FeedCard<'a> {
    pub content: &'a Content,
    /// Only video and music offer "add to playlist".
    pub can_add_to_playlist: bool,
}

/// The logged-in landing view: filtered feed plus the user's playlists.
#[derive(Debug)]
pub struct Dashboard<'a> {
    pub filter: FeedFilter,
    pub feed: Vec<FeedCard<'a>>,
    pub playlists: Vec<&'a Playlist>,
}

impl<'a> Dashboard<'a> {
    pub fn build(registry: &'a Registry, user: &'a SessionUser, filter: FeedFilter) -> Self {
        let feed = registry
            .content()
            .iter()
            .filter(|c| filter.matches(c))
            .map(|content| FeedCard {
                content,
                can_add_to_playlist: content.content_type.is_media(),
            })
            .collect();

        Self {
            filter,
            feed,
            playlists: registry.playlists_for(&user.id).collect(),
        }
    }
}

/// Create a playlist owned by `user`.
///
/// The name is trimmed; a blank name creates nothing and yields `None`.
pub fn create_playlist(
    registry: &mut Registry,
    user: &SessionUser,
    name: &str,
) -> Result<Option<Playlist>, AppError> {
    user.require_permission(Permission::PlaylistManage)?;

    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    Ok(Some(registry.add_playlist(name, &user.id)?))
}

pub fn delete_playlist(
    registry: &mut Registry,
    user: &SessionUser,
    playlist_id: &str,
) -> Result<(), AppError> {
    owned_playlist(registry, user, playlist_id)?;
    registry.delete_playlist(playlist_id)?;
    Ok(())
}

/// Add a snapshot of a media item to one of the user's playlists.
///
/// Returns `false` if the item was already in the playlist.
pub fn add_to_playlist(
    registry: &mut Registry,
    user: &SessionUser,
    playlist_id: &str,
    content_id: &str,
) -> Result<bool, AppError> {
    let already_present = owned_playlist(registry, user, playlist_id)?.contains(content_id);

    let content = registry
        .find_content(content_id)
        .ok_or_else(|| AppError::NotFound(format!("Content '{content_id}' not found")))?
        .clone();
    if !content.content_type.is_media() {
        return Err(AppError::Validation(format!(
            "Only video and music can be added to playlists, '{}' is {}",
            content.title, content.content_type
        )));
    }

    registry.add_content_to_playlist(playlist_id, &content)?;
    Ok(!already_present)
}

/// Remove an item from one of the user's playlists.
///
/// Works by content id alone, so snapshots of deleted content can be removed.
pub fn remove_from_playlist(
    registry: &mut Registry,
    user: &SessionUser,
    playlist_id: &str,
    content_id: &str,
) -> Result<(), AppError> {
    owned_playlist(registry, user, playlist_id)?;
    registry.remove_content_from_playlist(playlist_id, content_id)?;
    Ok(())
}

/// Look up a playlist the user is allowed to change.
pub fn owned_playlist<'a>(
    registry: &'a Registry,
    user: &SessionUser,
    playlist_id: &str,
) -> Result<&'a Playlist, AppError> {
    let playlist = registry
        .find_playlist(playlist_id)
        .ok_or_else(|| AppError::NotFound(format!("Playlist '{playlist_id}' not found")))?;

    if !can_manage_playlist(user, playlist) {
        return Err(AppError::PermissionDenied);
    }
    Ok(playlist)
}
