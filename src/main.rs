//! Statboard CLI
//!
//! Thin consumer of the dashboard engine:
//! - run a fetch cycle and print the derived view-model
//! - on-demand child lookups (todos for a user, comments for a post)
//! - show or toggle the persisted dark-mode preference

use clap::{Parser, Subcommand};
use statboard::config::Config;
use statboard::dashboard::Dashboard;
use statboard::prefs::PreferenceStore;
use statboard::provider::{HttpProvider, ProviderConfig, ResourceProvider};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "statboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard statistics over a remote collection provider")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: standard locations, then environment)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one fetch cycle and print the dashboard view-model
    Dashboard,

    /// List todos for a single user
    Todos {
        /// User id
        user_id: u64,
    },

    /// List comments for a single post
    Comments {
        /// Post id
        post_id: u64,
    },

    /// Show the dark-mode preference
    Theme {
        /// Flip the flag and persist it
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("statboard={}", config.logging.level)),
    );
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let provider = Arc::new(HttpProvider::new(ProviderConfig {
        base_url: config.provider.base_url.clone(),
        timeout_ms: config.provider.timeout_ms,
    }));

    match cli.command {
        Commands::Dashboard => {
            let dashboard = Dashboard::new(provider);
            let snapshot = dashboard.refresh().await?;
            let view = &snapshot.view;

            println!("Totals");
            let totals = view.totals_series();
            for (label, value) in totals.labels.iter().zip(&totals.values) {
                println!("  {:<10} {}", label, value);
            }

            println!("\nTodos per user (posts alongside)");
            for aggregate in &view.todos_per_user {
                println!(
                    "  #{:<3} {:<25} {:>3} todos  {:>3} posts",
                    aggregate.parent_id,
                    aggregate.label,
                    aggregate.count,
                    aggregate.secondary_count.unwrap_or(0)
                );
            }
        }
        Commands::Todos { user_id } => {
            let todos = provider.todos_for_user(user_id).await?;
            println!("{} todos for user {}", todos.len(), user_id);
            for todo in todos {
                let mark = if todo.completed { "x" } else { " " };
                println!("  [{}] {}", mark, todo.title);
            }
        }
        Commands::Comments { post_id } => {
            let comments = provider.comments_for_post(post_id).await?;
            println!("{} comments on post {}", comments.len(), post_id);
            for comment in comments {
                println!("  {}: {}", comment.email, comment.body);
            }
        }
        Commands::Theme { toggle } => {
            let store = PreferenceStore::hydrate(&config.preferences.path);
            let value = if toggle { store.toggle()? } else { store.dark_mode() };
            println!("dark mode: {}", value);
        }
    }

    Ok(())
}
