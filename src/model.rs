//! Record Types
//!
//! Flat record shapes for the four remote collections, plus the
//! `Resource` enum naming them. The provider returns ordered JSON arrays
//! of these records; order is preserved as received.

use serde::{Deserialize, Serialize};

/// The collections the remote provider serves in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Posts,
    Comments,
    Todos,
}

impl Resource {
    /// All bulk resources, in the order a fetch cycle requests them.
    pub const ALL: [Resource; 4] = [
        Resource::Users,
        Resource::Posts,
        Resource::Comments,
        Resource::Todos,
    ];

    /// URL path segment for this resource on the provider.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Posts => "posts",
            Resource::Comments => "comments",
            Resource::Todos => "todos",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A user record. The parent entity of both todos and posts.
///
/// `name` is optional: a user that decodes without one is still usable
/// and gets a fallback display label during assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// A post record, keyed to its author via `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A comment record, keyed to its post via `postId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub body: String,
}

/// A todo record, keyed to its owner via `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Users.path(), "users");
        assert_eq!(Resource::Todos.to_string(), "todos");
        assert_eq!(Resource::ALL.len(), 4);
    }

    #[test]
    fn test_user_decodes_provider_shape() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name.as_deref(), Some("Leanne Graham"));
        assert_eq!(user.username, "Bret");
    }

    #[test]
    fn test_user_without_name_still_decodes() {
        let user: User = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.name.is_none());
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_camel_case_foreign_keys() {
        let todo: Todo =
            serde_json::from_str(r#"{"id": 5, "userId": 2, "title": "t", "completed": true}"#)
                .unwrap();
        assert_eq!(todo.user_id, 2);
        assert!(todo.completed);

        let comment: Comment =
            serde_json::from_str(r#"{"id": 9, "postId": 3, "body": "nice"}"#).unwrap();
        assert_eq!(comment.post_id, 3);
    }
}
