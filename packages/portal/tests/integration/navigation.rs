use portal::views::navigation::{ADMIN, AUTH, ROOT};
use portal::views::{Navigation, View, resolve};

use crate::support::TestApp;

#[test]
fn visitor_lands_on_the_auth_view() {
    let app = TestApp::spawn();

    assert_eq!(app.state.navigate("/"), Navigation::Redirect(AUTH));
    assert_eq!(resolve("/", app.state.session.current()), (View::Auth, AUTH));
    assert_eq!(resolve("/admin", app.state.session.current()), (View::Auth, AUTH));
}

#[test]
fn registered_user_sees_the_dashboard_but_not_the_admin_panel() {
    let mut app = TestApp::spawn();
    app.register("Alice", "alice@example.com", "securepass");

    assert_eq!(app.state.navigate("/"), Navigation::Render(View::Dashboard));
    assert_eq!(app.state.navigate("/auth"), Navigation::Redirect(ROOT));
    assert_eq!(app.state.navigate("/admin"), Navigation::Redirect(ROOT));
    assert_eq!(
        resolve("/admin", app.state.session.current()),
        (View::Dashboard, ROOT)
    );
}

#[test]
fn editors_are_kept_out_of_the_admin_panel() {
    let mut app = TestApp::spawn();
    app.editor("ed@example.com");

    assert_eq!(app.state.navigate("/admin"), Navigation::Redirect(ROOT));
}

#[test]
fn admin_reaches_the_admin_panel() {
    let mut app = TestApp::spawn();
    app.login_as_admin();

    assert_eq!(app.state.navigate("/admin"), Navigation::Render(View::AdminPanel));
    assert_eq!(
        resolve("#/admin/content", app.state.session.current()),
        (View::AdminPanel, ADMIN)
    );
}

#[test]
fn restored_session_decides_the_landing_view() {
    let mut app = TestApp::spawn();
    app.login_as_admin();

    app.reload();
    assert_eq!(app.state.navigate("/admin"), Navigation::Render(View::AdminPanel));

    app.state.session.logout().unwrap();
    app.reload();
    assert_eq!(app.state.navigate("/admin"), Navigation::Redirect(ROOT));
}
