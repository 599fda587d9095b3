pub mod auth;
pub mod content;
pub mod playlist;
pub mod users;

use anyhow::Context;
use console::style;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;
use portal::AppError;

/// Print a refused action as a notice rather than a failure report.
pub fn notice(err: &AppError) {
    eprintln!("{} {}", style("notice:").yellow().bold(), err);
    if matches!(err, AppError::NotAuthenticated) {
        eprintln!("  Log in first with `cultur login`.");
    }
}

/// Use the password given on the command line, or ask for it without echo.
pub fn password_or_prompt(password: Option<String>, confirm: bool) -> anyhow::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt.interact().context("Failed to read password")
}

fn success(message: impl std::fmt::Display) {
    println!("{} {}", style("✔").green(), message);
}
