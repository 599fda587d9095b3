pub mod content;
pub mod id;
pub mod playlist;
pub mod role;
pub mod storage;
pub mod user;

pub use content::{Content, ContentDraft, ContentType};
pub use id::generate_id;
pub use playlist::{Playlist, PlaylistItem};
pub use role::Role;
pub use user::User;
