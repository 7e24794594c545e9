use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User, UserChanges};
use crate::error::RepoError;

/// Generic repository trait covering the operations every resource shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID and return what was removed.
    ///
    /// Fails with [`RepoError::NotFound`] when no row matches.
    async fn delete(&self, id: ID) -> Result<T, RepoError>;

    /// Delete every entity, returning how many rows went away.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user; the store assigns the id.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// Write exactly the fields present in `changes`.
    ///
    /// Fails with [`RepoError::NotFound`] when no user has this id.
    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a new post, resolving its author by id or email.
    ///
    /// An author that does not exist is rejected with
    /// [`RepoError::Constraint`].
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;
}
