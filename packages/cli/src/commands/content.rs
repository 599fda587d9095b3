use common::{Content, ContentDraft, ContentType};
use console::style;
use portal::describe::describe_or_empty;
use portal::policy::Permission;
use portal::views::admin::{delete_content, edit_content, publish_content};
use portal::views::{Dashboard, FeedFilter};
use portal::{AppError, AppState};
use tracing::warn;

use super::success;

pub fn feed(state: &AppState, filter: FeedFilter) -> anyhow::Result<()> {
    let user = state.session.require_user()?;
    let dashboard = Dashboard::build(&state.registry, user, filter);

    println!("{} [{}]", style("Feed").bold(), dashboard.filter);
    if dashboard.feed.is_empty() {
        println!("  Nothing to show");
    }
    for card in &dashboard.feed {
        print_content(card.content);
        if card.can_add_to_playlist {
            println!("    {}", style("can be added to playlists").dim());
        }
    }
    Ok(())
}

/// The content management table.
pub fn list(state: &AppState) -> anyhow::Result<()> {
    state.session.require(Permission::ContentManage)?;

    println!("{}", style("Content").bold());
    for content in state.registry.content() {
        println!(
            "  {:<28} {:<6} {}",
            style(&content.id).dim(),
            content.content_type,
            content.title
        );
    }
    Ok(())
}

pub async fn add(
    state: &mut AppState,
    mut draft: ContentDraft,
    generate_description: bool,
) -> anyhow::Result<()> {
    let actor = state.session.require(Permission::ContentManage)?;

    if generate_description {
        match &state.describer {
            Some(generator) => {
                draft.description =
                    describe_or_empty(generator.as_ref(), &draft.title, draft.content_type).await;
            }
            None => warn!("No description service configured, set describe.endpoint"),
        }
    }

    let content = publish_content(&mut state.registry, actor, draft)?;
    success(format!("Published {}", style(&content.id).bold()));
    Ok(())
}

/// Fields to overwrite on an existing item. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct ContentChanges {
    pub content_type: Option<ContentType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl ContentChanges {
    fn apply_to(self, draft: &mut ContentDraft) {
        if let Some(content_type) = self.content_type {
            draft.content_type = content_type;
        }
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(url) = self.url {
            draft.url = url;
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = image_url;
        }
    }
}

pub fn edit(state: &mut AppState, id: &str, changes: ContentChanges) -> anyhow::Result<()> {
    let actor = state.session.require(Permission::ContentManage)?;

    let existing = state
        .registry
        .find_content(id)
        .ok_or_else(|| AppError::NotFound(format!("Content '{id}' not found")))?;
    let mut draft = ContentDraft::from(existing);
    changes.apply_to(&mut draft);

    let content = edit_content(&mut state.registry, actor, id, draft)?;
    success(format!("Updated {}", style(&content.title).bold()));
    Ok(())
}

pub fn delete(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let actor = state.session.require(Permission::ContentManage)?;
    delete_content(&mut state.registry, actor, id)?;
    success(format!("Deleted {id}"));
    Ok(())
}

fn print_content(content: &Content) {
    println!(
        "  {} {} {}",
        style(content.content_type).cyan(),
        style(&content.title).bold(),
        style(&content.id).dim()
    );
    println!("    {}", content.description);
    println!(
        "    {} · {}",
        content.url,
        content.created_at.format("%Y-%m-%d %H:%M")
    );
}
