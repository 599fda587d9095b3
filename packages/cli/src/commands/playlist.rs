use console::style;
use portal::AppState;
use portal::views::dashboard::{
    add_to_playlist, create_playlist, delete_playlist, owned_playlist, remove_from_playlist,
};

use super::success;

pub fn list(state: &AppState) -> anyhow::Result<()> {
    let user = state.session.require_user()?;

    println!("{}", style("My playlists").bold());
    let mut empty = true;
    for playlist in state.registry.playlists_for(&user.id) {
        empty = false;
        println!(
            "  {} {} ({} items)",
            style(&playlist.id).dim(),
            playlist.name,
            playlist.items.len()
        );
    }
    if empty {
        println!("  No playlists yet, create one with `cultur playlist create <name>`");
    }
    Ok(())
}

pub fn create(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    let user = state.session.require_user()?;

    match create_playlist(&mut state.registry, user, name)? {
        Some(playlist) => success(format!(
            "Created {} {}",
            style(&playlist.name).bold(),
            style(&playlist.id).dim()
        )),
        None => println!("Playlist name is blank, nothing created"),
    }
    Ok(())
}

pub fn delete(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let user = state.session.require_user()?;
    delete_playlist(&mut state.registry, user, id)?;
    success(format!("Deleted playlist {id}"));
    Ok(())
}

pub fn show(state: &AppState, id: &str) -> anyhow::Result<()> {
    let user = state.session.require_user()?;
    let playlist = owned_playlist(&state.registry, user, id)?;

    println!("{}", style(&playlist.name).bold());
    if playlist.items.is_empty() {
        println!("  Empty");
    }
    for item in &playlist.items {
        let removed = state.registry.find_content(&item.content_id).is_none();
        println!(
            "  {} {} {}{}",
            style(&item.content_id).dim(),
            item.title,
            item.url,
            if removed { " (no longer in the feed)" } else { "" }
        );
    }
    Ok(())
}

pub fn add(state: &mut AppState, playlist_id: &str, content_id: &str) -> anyhow::Result<()> {
    let user = state.session.require_user()?;

    if add_to_playlist(&mut state.registry, user, playlist_id, content_id)? {
        success(format!("Added {content_id}"));
    } else {
        println!("{content_id} is already in the playlist");
    }
    Ok(())
}

pub fn remove(state: &mut AppState, playlist_id: &str, content_id: &str) -> anyhow::Result<()> {
    let user = state.session.require_user()?;
    remove_from_playlist(&mut state.registry, user, playlist_id, content_id)?;
    success(format!("Removed {content_id}"));
    Ok(())
}
