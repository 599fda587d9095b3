//! Cultur CLI - browse the feed, manage playlists and administer the portal.
//!
//! # Usage
//!
//! ```bash
//! # Log in as the seeded admin (prompts for the password)
//! cultur login -e Admin
//!
//! # Show the music feed
//! cultur feed --type music
//!
//! # Publish a video, drafting its description with the configured service
//! cultur content add -t video --title "Live Set" --url https://... --image-url https://... --generate-description
//!
//! # Check where a path leads for the current session
//! cultur open /admin
//! ```
//!
//! Data lives under `storage.data_dir` (default `./data`); see `config/config.toml`.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use common::ContentType;
use common::storage::memory::MemoryKvStore;
use portal::config::AppConfig;
use portal::views::FeedFilter;
use portal::{AppError, AppState};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cultur")]
#[command(author, version, about = "Cultur multimedia portal")]
struct Cli {
    /// Storage directory, overriding `storage.data_dir`
    #[arg(long, global = true, env = "CULTUR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep all data in memory for this invocation only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        #[arg(short, long)]
        nickname: String,

        #[arg(short, long)]
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log in with email (or "Admin") and password
    Login {
        #[arg(short, long)]
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Resolve a portal path and render the view it lands on
    Open {
        /// e.g. `/`, `/auth`, `/admin`
        #[arg(default_value = "/")]
        path: String,
    },
    /// Show the content feed
    Feed {
        /// `all`, `news`, `video` or `music`
        #[arg(short = 't', long = "type", default_value = "all")]
        filter: FeedFilter,
    },
    /// Publish, edit and delete content (editors and admins)
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Manage your playlists
    Playlist {
        #[command(subcommand)]
        action: PlaylistAction,
    },
    /// Manage accounts (admins)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    /// List every content item with its id
    List,
    /// Publish a new item at the top of the feed
    Add {
        #[arg(short = 't', long = "type")]
        content_type: ContentType,

        #[arg(long)]
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        url: String,

        #[arg(long)]
        image_url: String,

        /// Draft the description with the configured text service
        #[arg(long, conflicts_with = "description")]
        generate_description: bool,
    },
    /// Change fields of an existing item
    Edit {
        id: String,

        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        image_url: Option<String>,
    },
    /// Remove an item from the feed (playlist copies stay)
    Delete { id: String },
}

#[derive(Subcommand)]
enum PlaylistAction {
    /// List your playlists
    List,
    /// Create an empty playlist
    Create { name: String },
    /// Delete one of your playlists
    Delete { id: String },
    /// Show the items of a playlist
    Show { id: String },
    /// Add a video or music item to a playlist
    Add { playlist: String, content: String },
    /// Remove an item from a playlist
    Remove { playlist: String, content: String },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all accounts
    List,
    /// Switch an account between USER and EDITOR
    ToggleRole { id: String },
    /// Delete a non-admin account
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<AppError>() {
            Some(app_error) if !matches!(app_error, AppError::Portal(_)) => {
                commands::notice(app_error);
            }
            _ => tracing::error!("Command failed: {e:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load().context("Failed to load config")?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let opened = if cli.ephemeral {
        let kv = Arc::new(MemoryKvStore::new(config.storage.max_value_bytes));
        AppState::with_store(kv, &config)
    } else {
        AppState::open(&config)
    };
    let mut state = opened.with_context(|| {
        format!(
            "Failed to open portal data in {}",
            config.storage.data_dir.display()
        )
    })?;

    match cli.command {
        Commands::Register {
            nickname,
            email,
            password,
        } => commands::auth::register(&mut state, &nickname, &email, password)?,
        Commands::Login { email, password } => commands::auth::login(&mut state, &email, password)?,
        Commands::Logout => commands::auth::logout(&mut state)?,
        Commands::Whoami => commands::auth::whoami(&state),
        Commands::Open { path } => commands::auth::open(&state, &path)?,
        Commands::Feed { filter } => commands::content::feed(&state, filter)?,
        Commands::Content { action } => match action {
            ContentAction::List => commands::content::list(&state)?,
            ContentAction::Add {
                content_type,
                title,
                description,
                url,
                image_url,
                generate_description,
            } => {
                let draft = common::ContentDraft {
                    content_type,
                    title,
                    description: description.unwrap_or_default(),
                    url,
                    image_url,
                };
                commands::content::add(&mut state, draft, generate_description).await?
            }
            ContentAction::Edit {
                id,
                content_type,
                title,
                description,
                url,
                image_url,
            } => commands::content::edit(
                &mut state,
                &id,
                commands::content::ContentChanges {
                    content_type,
                    title,
                    description,
                    url,
                    image_url,
                },
            )?,
            ContentAction::Delete { id } => commands::content::delete(&mut state, &id)?,
        },
        Commands::Playlist { action } => match action {
            PlaylistAction::List => commands::playlist::list(&state)?,
            PlaylistAction::Create { name } => commands::playlist::create(&mut state, &name)?,
            PlaylistAction::Delete { id } => commands::playlist::delete(&mut state, &id)?,
            PlaylistAction::Show { id } => commands::playlist::show(&state, &id)?,
            PlaylistAction::Add { playlist, content } => {
                commands::playlist::add(&mut state, &playlist, &content)?
            }
            PlaylistAction::Remove { playlist, content } => {
                commands::playlist::remove(&mut state, &playlist, &content)?
            }
        },
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list(&state)?,
            UserAction::ToggleRole { id } => commands::users::toggle_role(&mut state, &id)?,
            UserAction::Delete { id } => commands::users::delete(&mut state, &id)?,
        },
    }

    Ok(())
}
