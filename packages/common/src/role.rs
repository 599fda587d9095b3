use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authorization tier of a user.
///
/// Serialized as the upper-case tag (`"USER"`, `"EDITOR"`, `"ADMIN"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular account: browses the feed and manages its own playlists.
    #[default]
    User,
    /// May publish, edit and delete content.
    Editor,
    /// Full access, including the admin panel and user management.
    Admin,
}

impl Role {
    /// All roles, lowest tier first.
    pub const ALL: &'static [Role] = &[Self::User, Self::Editor, Self::Admin];

    /// Returns the string representation (upper case).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Editor => "EDITOR",
            Self::Admin => "ADMIN",
        }
    }

    /// The role an admin's promote/demote action switches to.
    ///
    /// Editors drop back to users and users become editors. Admins cannot be
    /// toggled and yield `None`.
    pub fn toggled_editor(&self) -> Option<Role> {
        match self {
            Self::User => Some(Self::Editor),
            Self::Editor => Some(Self::User),
            Self::Admin => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    invalid: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid role '{}'. Valid values: {}",
            self.invalid,
            Role::ALL
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "EDITOR" => Ok(Self::Editor),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseRoleError {
                invalid: s.to_string(),
            }),
        }
    }
}
