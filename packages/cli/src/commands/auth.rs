use console::style;
use portal::AppState;
use portal::policy::permissions_for;
use portal::views::{FeedFilter, Navigation, View, resolve};

use super::{password_or_prompt, success};

pub fn register(
    state: &mut AppState,
    nickname: &str,
    email: &str,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = password_or_prompt(password, true)?;
    let AppState {
        registry, session, ..
    } = state;

    let user = session.register(registry, nickname, email, &password)?;
    success(format!(
        "Registered and logged in as {}",
        style(&user.nickname).bold()
    ));
    Ok(())
}

pub fn login(state: &mut AppState, email: &str, password: Option<String>) -> anyhow::Result<()> {
    let password = password_or_prompt(password, false)?;
    let AppState {
        registry, session, ..
    } = state;

    let user = session.login(registry, email, &password)?;
    success(format!(
        "Logged in as {} ({})",
        style(&user.nickname).bold(),
        user.role
    ));
    Ok(())
}

pub fn logout(state: &mut AppState) -> anyhow::Result<()> {
    state.session.logout()?;
    success("Logged out");
    Ok(())
}

pub fn whoami(state: &AppState) {
    match state.session.current() {
        Some(user) => {
            println!(
                "{} <{}> {} {}",
                style(&user.nickname).bold(),
                user.email,
                style(user.role).cyan(),
                style(&user.id).dim()
            );
            let permissions: Vec<_> = permissions_for(user.role)
                .iter()
                .map(|p| p.as_str())
                .collect();
            println!("  {}", style(permissions.join(", ")).dim());
        }
        None => println!("Not logged in"),
    }
}

/// Follow the portal's routing for `path` and render the resulting view.
pub fn open(state: &AppState, path: &str) -> anyhow::Result<()> {
    if let Navigation::Redirect(target) = state.navigate(path) {
        println!("{} {path} redirects to {target}", style("→").dim());
    }

    let (view, landed) = resolve(path, state.session.current());
    println!("{}", style(landed).bold().underlined());

    match view {
        View::Auth => {
            println!("Log in with `cultur login` or create an account with `cultur register`.");
        }
        View::Dashboard => {
            super::content::feed(state, FeedFilter::All)?;
            println!();
            super::playlist::list(state)?;
        }
        View::AdminPanel => {
            super::users::list(state)?;
            println!();
            super::content::list(state)?;
        }
    }
    Ok(())
}
