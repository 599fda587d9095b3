use console::style;
use portal::AppState;
use portal::views::AdminPanel;
use portal::views::admin;

use super::success;

pub fn list(state: &AppState) -> anyhow::Result<()> {
    let viewer = state.session.require_user()?;
    let panel = AdminPanel::build(&state.registry, viewer)?;

    println!("{}", style("Users").bold());
    for row in &panel.users {
        let action = match row.toggle_to {
            Some(role) => format!("toggle-role -> {role}, delete"),
            None => "-".to_string(),
        };
        println!(
            "  {:<28} {:<16} {:<24} {:<6} {}",
            style(&row.user.id).dim(),
            row.user.nickname,
            row.user.email,
            style(row.user.role).cyan(),
            style(action).dim()
        );
    }
    Ok(())
}

pub fn toggle_role(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let actor = state.session.require_user()?;
    let role = admin::toggle_role(&mut state.registry, actor, id)?;
    success(format!("{id} is now {role}"));
    Ok(())
}

pub fn delete(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let actor = state.session.require_user()?;
    admin::delete_user(&mut state.registry, actor, id)?;
    success(format!("Deleted user {id}"));
    Ok(())
}
