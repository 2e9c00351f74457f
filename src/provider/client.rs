//! HTTP Resource Provider
//!
//! reqwest-backed [`ResourceProvider`] for a jsonplaceholder-style REST
//! provider: one GET per named collection, JSON array response bodies.

use super::{FetchError, ResourceProvider};
use crate::model::{Comment, Post, Resource, Todo, User};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Configuration for the HTTP provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider (no trailing slash)
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// HTTP client for the remote collection provider
pub struct HttpProvider {
    client: Client,
    config: ProviderConfig,
}

impl HttpProvider {
    /// Create a new provider client with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// The current configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// GET one collection, optionally filtered by a single query pair.
    async fn get_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: Option<(&str, u64)>,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            resource.path()
        );

        let mut request = self.client.get(&url);
        if let Some((key, value)) = query {
            request = request.query(&[(key, value)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(resource, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(resource, status.as_u16()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FetchError::Decode(resource, e.to_string()))
    }
}

#[async_trait]
impl ResourceProvider for HttpProvider {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        self.get_collection(Resource::Users, None).await
    }

    async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get_collection(Resource::Posts, None).await
    }

    async fn comments(&self) -> Result<Vec<Comment>, FetchError> {
        self.get_collection(Resource::Comments, None).await
    }

    async fn todos(&self) -> Result<Vec<Todo>, FetchError> {
        self.get_collection(Resource::Todos, None).await
    }

    async fn todos_for_user(&self, user_id: u64) -> Result<Vec<Todo>, FetchError> {
        self.get_collection(Resource::Todos, Some(("userId", user_id)))
            .await
    }

    async fn comments_for_post(&self, post_id: u64) -> Result<Vec<Comment>, FetchError> {
        self.get_collection(Resource::Comments, Some(("postId", post_id)))
            .await
    }
}
