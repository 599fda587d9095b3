use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a publishable item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    #[default]
    News,
    Video,
    Music,
}

impl ContentType {
    pub const ALL: &'static [ContentType] = &[Self::News, Self::Video, Self::Music];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "NEWS",
            Self::Video => "VIDEO",
            Self::Music => "MUSIC",
        }
    }

    /// Media items (video and music) are the ones that can go into playlists.
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Video | Self::Music)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid content type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContentTypeError {
    invalid: String,
}

impl fmt::Display for ParseContentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid content type '{}'. Valid values: {}",
            self.invalid,
            ContentType::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseContentTypeError {}

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEWS" => Ok(Self::News),
            "VIDEO" | "VIDEOS" => Ok(Self::Video),
            "MUSIC" => Ok(Self::Music),
            _ => Err(ParseContentTypeError {
                invalid: s.to_string(),
            }),
        }
    }
}

/// A published news, video or music item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    /// Link to the article, video or audio file.
    pub url: String,
    pub image_url: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

impl Content {
    /// Overwrite the editable fields with those of `draft`.
    ///
    /// Identifier, author and creation time are preserved.
    pub fn apply(&mut self, draft: ContentDraft) {
        self.content_type = draft.content_type;
        self.title = draft.title;
        self.description = draft.description;
        self.url = draft.url;
        self.image_url = draft.image_url;
    }
}

/// The author-supplied fields of a content item, as filled in on the
/// publish/edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
}

impl From<&Content> for ContentDraft {
    fn from(content: &Content) -> Self {
        Self {
            content_type: content.content_type,
            title: content.title.clone(),
            description: content.description.clone(),
            url: content.url.clone(),
            image_url: content.image_url.clone(),
        }
    }
}
