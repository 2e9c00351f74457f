//! Concurrent Fetch Coordinator
//!
//! Issues all bulk resource fetches in parallel and waits for every one,
//! so a cycle's latency is bounded by the slowest call rather than the
//! sum of all calls. Any single failure fails the whole cycle: downstream
//! joins need every collection present, so there is no partial result.

use crate::model::{Comment, Post, Todo, User};
use crate::provider::{FetchError, ResourceProvider};

/// The raw collections of one fetch cycle.
///
/// Built fresh per cycle and consumed by the assembler; never cached or
/// patched across cycles. Record order is provider order.
#[derive(Debug, Clone)]
pub struct Collections {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub todos: Vec<Todo>,
}

/// Fetch all four collections concurrently.
///
/// Fail-fast: returns the first observed failure and discards any
/// collections that did arrive. Every call performs fresh fetches.
pub async fn fetch_all<P: ResourceProvider>(provider: &P) -> Result<Collections, FetchError> {
    let (users, posts, comments, todos) = tokio::try_join!(
        provider.users(),
        provider.posts(),
        provider.comments(),
        provider.todos(),
    )?;

    tracing::debug!(
        users = users.len(),
        posts = posts.len(),
        comments = comments.len(),
        todos = todos.len(),
        "Fetched all collections"
    );

    Ok(Collections {
        users,
        posts,
        comments,
        todos,
    })
}
