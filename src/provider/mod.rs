//! Remote Resource Provider
//!
//! This module defines the seam between the dashboard pipeline and the
//! remote collection provider:
//! - [`ResourceProvider`]: trait over the provider's read-only surface
//! - [`HttpProvider`]: reqwest-backed implementation
//! - [`FetchError`]: typed failure taxonomy for a single resource fetch

mod client;

pub use client::{HttpProvider, ProviderConfig};

use crate::model::{Comment, Post, Resource, Todo, User};
use async_trait::async_trait;

/// Read-only surface of the remote collection provider.
///
/// The four bulk methods back the concurrent fetch cycle; the filtered
/// variants serve on-demand child lookups outside the bulk cycle.
/// Implementations must never cache: every call is a fresh fetch.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Fetch the full users collection.
    async fn users(&self) -> Result<Vec<User>, FetchError>;

    /// Fetch the full posts collection.
    async fn posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Fetch the full comments collection.
    async fn comments(&self) -> Result<Vec<Comment>, FetchError>;

    /// Fetch the full todos collection.
    async fn todos(&self) -> Result<Vec<Todo>, FetchError>;

    /// Fetch only the todos belonging to one user.
    async fn todos_for_user(&self, user_id: u64) -> Result<Vec<Todo>, FetchError>;

    /// Fetch only the comments belonging to one post.
    async fn comments_for_post(&self, post_id: u64) -> Result<Vec<Comment>, FetchError>;
}

/// Errors that can occur fetching a single resource
///
/// Every variant carries the resource it happened on, so a failed fetch
/// cycle can report exactly which collection broke it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Provider unreachable, timed out, or the connection broke
    #[error("fetching {0} failed: {1}")]
    Transport(Resource, String),

    /// Provider responded with a non-success status
    #[error("{0} request returned status {1}")]
    Status(Resource, u16),

    /// Response body was not the expected record shape
    #[error("decoding {0} response failed: {1}")]
    Decode(Resource, String),
}

impl FetchError {
    /// The resource the failure occurred on.
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Transport(r, _) | FetchError::Status(r, _) | FetchError::Decode(r, _) => {
                *r
            }
        }
    }
}
