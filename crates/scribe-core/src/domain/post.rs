use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - an article owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i32,
    pub author_id: i32,
}

/// How a new post names its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorRef {
    Id(i32),
    Email(String),
}

/// Raw creation input, checked by the post service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorRef>,
}

/// A checked post ready to be persisted. Whether the author exists is
/// decided by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: AuthorRef,
}
