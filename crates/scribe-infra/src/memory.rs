//! In-memory repositories - used when no database is configured and in tests.
//!
//! Data is lost on process restart. Ids are assigned from a per-table
//! counter starting at 1 and never reused, like a database sequence.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use scribe_core::domain::{AuthorRef, NewPost, NewUser, Post, User, UserChanges};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository, UserRepository};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

type Shared<T> = Arc<RwLock<Table<T>>>;

/// In-memory user store enforcing the unique email constraint.
///
/// The store also owns the post table so that removing a user removes their
/// posts, as the `posts.author_id` foreign key does. Locks are always taken
/// users first, then posts.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
    posts: Shared<Post>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(table: &Table<User>, email: &str, except: Option<i32>) -> bool {
        table
            .rows
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

#[async_trait]
impl BaseRepository<User, i32> for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<User, RepoError> {
        let mut users = self.table.write().await;
        let removed = users.rows.remove(&id).ok_or(RepoError::NotFound)?;
        self.posts
            .write()
            .await
            .rows
            .retain(|_, post| post.author_id != id);
        Ok(removed)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut users = self.table.write().await;
        let removed = users.rows.len() as u64;
        users.rows.clear();
        self.posts.write().await.rows.clear();
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut table = self.table.write().await;
        if Self::email_taken(&table, &user.email, None) {
            return Err(RepoError::Constraint(
                "Unique constraint failed on the fields: (`email`)".to_string(),
            ));
        }

        let created = User {
            id: table.next_id(),
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepoError> {
        let mut table = self.table.write().await;
        if let Some(email) = &changes.email {
            if Self::email_taken(&table, email, Some(id)) {
                return Err(RepoError::Constraint(
                    "Unique constraint failed on the fields: (`email`)".to_string(),
                ));
            }
        }

        let user = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        changes.apply_to(user);
        Ok(user.clone())
    }
}

/// In-memory post store over the table owned by the user store.
pub struct InMemoryPostRepository {
    users: Arc<InMemoryUserRepository>,
    table: Shared<Post>,
}

impl InMemoryPostRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        let table = users.posts.clone();
        Self { users, table }
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<Post, RepoError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .ok_or(RepoError::NotFound)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    /// The author stays locked until the post is stored, so a concurrent
    /// user delete cannot leave it orphaned.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let users = self.users.table.read().await;
        let author_id = match &post.author {
            AuthorRef::Id(id) => users.rows.get(id),
            AuthorRef::Email(email) => users.rows.values().find(|u| &u.email == email),
        }
        .map(|u| u.id)
        .ok_or_else(|| RepoError::Constraint(format!("No author matches {:?}", post.author)))?;
        let now = Utc::now();

        let mut table = self.table.write().await;
        let created = Post {
            id: table.next_id(),
            title: post.title,
            content: post.content,
            published: false,
            created_at: now,
            updated_at: now,
            view_count: 0,
            author_id,
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }
}
