use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use common::{Role, User};

use crate::error::{AppError, Result};
use crate::models::auth::{
    LoginRequest, RegisterRequest, validate_login_request, validate_register_request,
};
use crate::policy::{Permission, role_allows};
use crate::registry::Registry;
use crate::store::PersistentStore;

/// The authenticated identity, as persisted in the session record.
///
/// Carries no credential material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub nickname: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

impl SessionUser {
    /// Returns `Ok(())` if the role grants `permission`, `Err(PermissionDenied)` otherwise.
    pub fn require_permission(&self, permission: Permission) -> std::result::Result<(), AppError> {
        if role_allows(self.role, permission) {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }
}

/// Tracks who is logged in.
///
/// A restored session is trusted as stored: it is not checked against the
/// registry, so a deleted or demoted user keeps the stored identity until the
/// next login or logout.
pub struct SessionManager {
    store: PersistentStore,
    current: Option<SessionUser>,
}

impl SessionManager {
    /// Resume the session persisted in `store`, if any.
    pub fn restore(store: PersistentStore) -> Result<Self> {
        let current = store.load_session()?;
        if let Some(user) = &current {
            info!(user_id = %user.id, "Restored session");
        }
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    /// The logged-in user, or `NotAuthenticated`.
    pub fn require_user(&self) -> std::result::Result<&SessionUser, AppError> {
        self.current.as_ref().ok_or(AppError::NotAuthenticated)
    }

    /// The logged-in user, provided their role grants `permission`.
    pub fn require(&self, permission: Permission) -> std::result::Result<&SessionUser, AppError> {
        let user = self.require_user()?;
        user.require_permission(permission)?;
        Ok(user)
    }

    #[instrument(skip(self, registry, password))]
    pub fn login(
        &mut self,
        registry: &Registry,
        email: &str,
        password: &str,
    ) -> std::result::Result<&SessionUser, AppError> {
        validate_login_request(&LoginRequest { email, password })?;

        let user = registry
            .find_user_by_email(email.trim())
            .ok_or(AppError::InvalidCredentials)?;

        if !registry.hashing().verify(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(self.establish(user)?)
    }

    /// Create a `USER` account and log it in.
    ///
    /// Fails with `EmailTaken` when the email is already registered, ignoring
    /// case; no account is created in that case.
    #[instrument(skip(self, registry, password))]
    pub fn register(
        &mut self,
        registry: &mut Registry,
        nickname: &str,
        email: &str,
        password: &str,
    ) -> std::result::Result<&SessionUser, AppError> {
        validate_register_request(&RegisterRequest {
            nickname,
            email,
            password,
        })?;

        let email = email.trim();
        if registry.find_user_by_email(email).is_some() {
            return Err(AppError::EmailTaken);
        }

        let user = registry.add_user(nickname.trim(), email, password)?;
        Ok(self.establish(&user)?)
    }

    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "Logged out");
        }
        self.store.clear_session()
    }

    fn establish(&mut self, user: &User) -> Result<&SessionUser> {
        let session = SessionUser::from(user);
        self.store.save_session(&session)?;
        info!(user_id = %session.id, role = %session.role, "Session established");
        Ok(&*self.current.insert(session))
    }
}
