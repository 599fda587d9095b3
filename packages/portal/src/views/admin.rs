use common::{Content, ContentDraft, Role, User};
use tracing::info;

use crate::error::AppError;
use crate::policy::{Permission, role_allows};
use crate::registry::Registry;
use crate::session::SessionUser;

/// A row of the user management table.
#[derive(Debug)]
pub struct UserRow<'a> {
    pub user: &'a User,
    /// Role the promote/demote button switches to. `None` for admin rows,
    /// which offer no actions at all.
    pub toggle_to: Option<Role>,
}

impl UserRow<'_> {
    pub fn can_delete(&self) -> bool {
        self.toggle_to.is_some()
    }
}

/// The admin panel: user management plus, when permitted, content management.
#[derive(Debug)]
pub struct AdminPanel<'a> {
    pub users: Vec<UserRow<'a>>,
    /// `None` when the viewer lacks content management rights.
    pub content: Option<&'a [Content]>,
}

impl<'a> AdminPanel<'a> {
    pub fn build(registry: &'a Registry, viewer: &SessionUser) -> Result<Self, AppError> {
        viewer.require_permission(Permission::AdminPanel)?;

        let users = registry
            .users()
            .iter()
            .map(|user| UserRow {
                user,
                toggle_to: user.role.toggled_editor(),
            })
            .collect();

        let content = role_allows(viewer.role, Permission::ContentManage).then(|| registry.content());

        Ok(Self { users, content })
    }
}

/// Switch a user between `USER` and `EDITOR`. Returns the new role.
pub fn toggle_role(
    registry: &mut Registry,
    actor: &SessionUser,
    user_id: &str,
) -> Result<Role, AppError> {
    actor.require_permission(Permission::UserManage)?;

    let mut user = find_user(registry, user_id)?.clone();
    let new_role = user.role.toggled_editor().ok_or(AppError::PermissionDenied)?;
    user.role = new_role;
    registry.update_user(user)?;

    info!(user_id, role = %new_role, "Changed user role");
    Ok(new_role)
}

/// Delete a non-admin account. The account's playlists stay in storage.
pub fn delete_user(
    registry: &mut Registry,
    actor: &SessionUser,
    user_id: &str,
) -> Result<(), AppError> {
    actor.require_permission(Permission::UserManage)?;

    if find_user(registry, user_id)?.is_admin() {
        return Err(AppError::PermissionDenied);
    }
    registry.delete_user(user_id)?;

    info!(user_id, "Deleted user");
    Ok(())
}

/// Every field of the publish form is required.
pub fn validate_draft(draft: &ContentDraft) -> Result<(), AppError> {
    let required = [
        ("Title", &draft.title),
        ("Description", &draft.description),
        ("Image URL", &draft.image_url),
        ("Content URL", &draft.url),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{label} must not be empty")));
        }
    }
    Ok(())
}

pub fn publish_content(
    registry: &mut Registry,
    actor: &SessionUser,
    draft: ContentDraft,
) -> Result<Content, AppError> {
    actor.require_permission(Permission::ContentManage)?;
    validate_draft(&draft)?;

    let content = registry.add_content(draft, &actor.id)?;
    info!(content_id = %content.id, "Published content");
    Ok(content)
}

/// Replace the editable fields of an existing item with `draft`.
pub fn edit_content(
    registry: &mut Registry,
    actor: &SessionUser,
    content_id: &str,
    draft: ContentDraft,
) -> Result<Content, AppError> {
    actor.require_permission(Permission::ContentManage)?;
    validate_draft(&draft)?;

    let mut content = registry
        .find_content(content_id)
        .ok_or_else(|| AppError::NotFound(format!("Content '{content_id}' not found")))?
        .clone();
    content.apply(draft);
    registry.update_content(content.clone())?;

    Ok(content)
}

/// Delete an item from the feed. Playlist snapshots of it remain.
pub fn delete_content(
    registry: &mut Registry,
    actor: &SessionUser,
    content_id: &str,
) -> Result<(), AppError> {
    actor.require_permission(Permission::ContentManage)?;
    registry.delete_content(content_id)?;
    Ok(())
}

fn find_user<'a>(registry: &'a Registry, user_id: &str) -> Result<&'a User, AppError> {
    registry
        .find_user(user_id)
        .ok_or_else(|| AppError::NotFound(format!("User '{user_id}' not found")))
}
