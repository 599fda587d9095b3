use std::fmt;

use common::{Playlist, Role};

use crate::session::SessionUser;

/// Something a role may be allowed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Open the admin panel.
    AdminPanel,
    /// Publish, edit and delete content.
    ContentManage,
    /// Change roles and delete accounts.
    UserManage,
    /// Create playlists and edit the ones the user owns.
    PlaylistManage,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminPanel => "admin:panel",
            Self::ContentManage => "content:manage",
            Self::UserManage => "user:manage",
            Self::PlaylistManage => "playlist:manage",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-permission grants.
const ROLE_PERMISSIONS: &[(Role, Permission)] = &[
    // Admin: all permissions
    (Role::Admin, Permission::AdminPanel),
    (Role::Admin, Permission::ContentManage),
    (Role::Admin, Permission::UserManage),
    (Role::Admin, Permission::PlaylistManage),
    // Editor
    (Role::Editor, Permission::ContentManage),
    (Role::Editor, Permission::PlaylistManage),
    // User
    (Role::User, Permission::PlaylistManage),
];

pub fn role_allows(role: Role, permission: Permission) -> bool {
    ROLE_PERMISSIONS
        .iter()
        .any(|&(r, p)| r == role && p == permission)
}

pub fn permissions_for(role: Role) -> Vec<Permission> {
    ROLE_PERMISSIONS
        .iter()
        .filter(|(r, _)| *r == role)
        .map(|(_, p)| *p)
        .collect()
}

/// Playlists are managed by their owner only, whatever the owner's role.
pub fn can_manage_playlist(user: &SessionUser, playlist: &Playlist) -> bool {
    role_allows(user.role, Permission::PlaylistManage) && playlist.is_owned_by(&user.id)
}
