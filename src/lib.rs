//! # Statboard
//!
//! Multi-resource dashboard engine. Concurrently fetches independent
//! collections from a remote read-only provider, joins them in memory by
//! foreign-key relationships, and derives an immutable, render-ready
//! view-model snapshot per fetch cycle.
//!
//! ## Features
//!
//! - **Concurrent fetch**: all collections in parallel, fail-fast on any error
//! - **Linear joins**: one O(n) grouping pass per relation, stable parent order
//! - **Immutable snapshots**: a cycle yields a whole view-model or nothing
//! - **Stale-result protection**: the newest initiated cycle always wins
//! - **Persisted preference**: dark-mode flag hydrated and toggled through one store
//!
//! ## Modules
//!
//! - [`model`]: record types for the provider's collections
//! - [`provider`]: resource client trait and HTTP implementation
//! - [`dashboard`]: fetch coordination, aggregation, view-model assembly
//! - [`prefs`]: persisted display preference
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use statboard::dashboard::Dashboard;
//! use statboard::provider::{HttpProvider, ProviderConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(HttpProvider::new(ProviderConfig::default()));
//!     let dashboard = Dashboard::new(provider);
//!
//!     let snapshot = dashboard.refresh().await?;
//!     println!(
//!         "{} users, {} todos",
//!         snapshot.view.totals.users, snapshot.view.totals.todos
//!     );
//!
//!     for aggregate in &snapshot.view.todos_per_user {
//!         println!("{}: {} todos", aggregate.label, aggregate.count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod model;
pub mod prefs;
pub mod provider;

// Re-export top-level types for convenience
pub use dashboard::{
    aggregate_by, aggregate_with_secondary, assemble, fetch_all, Aggregate, Collections,
    Dashboard, Series, Snapshot, Totals, ViewModel,
};

pub use model::{Comment, Post, Resource, Todo, User};

pub use provider::{FetchError, HttpProvider, ProviderConfig, ResourceProvider};

pub use prefs::{PreferenceStore, PrefsError, DEFAULT_DARK_MODE};

pub use config::{Config, ConfigError, LoggingConfig, PreferencesConfig};
