use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A registered account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nickname: String,
    /// Login key. Compared case-insensitively.
    pub email: String,
    /// Argon2 PHC string. Never the raw password.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Case-insensitive comparison against the login key.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
