use common::Role;

use crate::session::SessionUser;

pub const ROOT: &str = "/";
pub const AUTH: &str = "/auth";
pub const ADMIN: &str = "/admin";

/// A top-level screen of the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Login and registration forms.
    Auth,
    /// Content feed and playlist panel.
    Dashboard,
    /// User and content management.
    AdminPanel,
}

/// Where a navigation request ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(View),
    Redirect(&'static str),
}

/// Resolve `path` for the given session.
///
/// Unauthorized requests are redirected rather than rejected: a logged-in
/// user asking for the auth forms and a non-admin asking for the admin panel
/// both land on `/`, a visitor asking for `/` lands on `/auth`, and unknown
/// paths go to `/`.
pub fn navigate(path: &str, session: Option<&SessionUser>) -> Navigation {
    let path = normalize(path);

    if path == AUTH {
        return match session {
            None => Navigation::Render(View::Auth),
            Some(_) => Navigation::Redirect(ROOT),
        };
    }

    if path == ADMIN || path.starts_with("/admin/") {
        return match session {
            Some(user) if user.role == Role::Admin => Navigation::Render(View::AdminPanel),
            _ => Navigation::Redirect(ROOT),
        };
    }

    if path == ROOT {
        return match session {
            Some(_) => Navigation::Render(View::Dashboard),
            None => Navigation::Redirect(AUTH),
        };
    }

    Navigation::Redirect(ROOT)
}

/// Follow redirects until a view is rendered.
///
/// The route table never redirects more than twice (`/x` -> `/` -> `/auth`),
/// so the loop is bounded.
pub fn resolve(path: &str, session: Option<&SessionUser>) -> (View, &'static str) {
    let mut target = match navigate(path, session) {
        Navigation::Render(view) => return (view, canonical(view)),
        Navigation::Redirect(next) => next,
    };

    loop {
        match navigate(target, session) {
            Navigation::Render(view) => return (view, target),
            Navigation::Redirect(next) => target = next,
        }
    }
}

fn canonical(view: View) -> &'static str {
    match view {
        View::Auth => AUTH,
        View::Dashboard => ROOT,
        View::AdminPanel => ADMIN,
    }
}

/// Accept hash-router style paths (`#/admin`) and trailing slashes.
fn normalize(path: &str) -> String {
    let path = path.trim().trim_start_matches('#');
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return ROOT.to_string();
    }
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
