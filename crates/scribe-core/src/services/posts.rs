use std::sync::Arc;

use crate::domain::{CreatePost, NewPost, Post};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Read and create rules for the posts resource.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_all().await?;
        if posts.is_empty() {
            return Err(DomainError::not_found("No posts found"));
        }
        Ok(posts)
    }

    pub async fn get(&self, id: i32) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post not found"))
    }

    /// Author existence is left to the store; an unknown author surfaces as
    /// a repository failure.
    pub async fn create(&self, input: CreatePost) -> Result<Post, DomainError> {
        let title = input.title.filter(|t| !t.is_empty());
        let content = input.content.filter(|c| !c.is_empty());
        let (Some(title), Some(content)) = (title, content) else {
            return Err(DomainError::validation("Please provide a title and content"));
        };
        let Some(author) = input.author else {
            return Err(DomainError::validation("Please provide an author id or email"));
        };

        let post = self
            .repo
            .create(NewPost {
                title,
                content,
                author,
            })
            .await?;
        tracing::info!(post_id = post.id, author_id = post.author_id, "Post created");
        Ok(post)
    }
}
