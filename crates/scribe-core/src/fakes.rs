//! Test doubles for the ports, recording the calls services make.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{AuthorRef, NewPost, NewUser, Post, User, UserChanges};
use crate::error::RepoError;
use crate::ports::{
    AuthError, BaseRepository, PasswordService, PostRepository, TokenClaims, TokenService,
    UserRepository,
};

pub fn john_doe() -> User {
    User {
        id: 1,
        name: "John Doe".to_string(),
        last_name: None,
        email: "john@email.com".to_string(),
        password_hash: None,
    }
}

pub fn first_post() -> Post {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    Post {
        id: 1,
        title: "My first post".to_string(),
        content: "This is my first post".to_string(),
        published: false,
        created_at: at,
        updated_at: at,
        view_count: 0,
        author_id: 1,
    }
}

/// Mutating calls observed by [`FakeUserRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCall {
    Create(NewUser),
    Update(i32, UserChanges),
    Delete(i32),
    DeleteAll,
}

#[derive(Default)]
pub struct FakeUserRepository {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<UserCall>>,
}

impl FakeUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<UserCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: UserCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BaseRepository<User, i32> for FakeUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<User, RepoError> {
        self.record(UserCall::Delete(id));
        let mut users = self.users.lock().unwrap();
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RepoError::NotFound)?;
        Ok(users.remove(index))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        self.record(UserCall::DeleteAll);
        let mut users = self.users.lock().unwrap();
        let removed = users.len() as u64;
        users.clear();
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        self.record(UserCall::Create(user.clone()));
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users_email_key".to_string()));
        }
        let created = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepoError> {
        self.record(UserCall::Update(id, changes.clone()));
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepoError::NotFound)?;
        changes.apply_to(user);
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct FakePostRepository {
    authors: Vec<User>,
    posts: Mutex<Vec<Post>>,
}

impl FakePostRepository {
    pub fn with_authors(authors: Vec<User>) -> Self {
        Self {
            authors,
            posts: Mutex::default(),
        }
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.lock().unwrap() = posts;
        self
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for FakePostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<Post, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        Ok(posts.remove(index))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}

#[async_trait]
impl PostRepository for FakePostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let author = self
            .authors
            .iter()
            .find(|a| match &post.author {
                AuthorRef::Id(id) => a.id == *id,
                AuthorRef::Email(email) => &a.email == email,
            })
            .ok_or_else(|| RepoError::Constraint("posts_author_id_fkey".to_string()))?;

        let mut posts = self.posts.lock().unwrap();
        let now = Utc::now();
        let created = Post {
            id: posts.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            title: post.title,
            content: post.content,
            published: false,
            created_at: now,
            updated_at: now,
            view_count: 0,
            author_id: author.id,
        };
        posts.push(created.clone());
        Ok(created)
    }
}

/// "Hashes" by prefixing, so tests can assert on stored values.
pub struct FakePasswordService;

impl FakePasswordService {
    pub fn hashed(password: &str) -> String {
        format!("hashed:{password}")
    }
}

impl PasswordService for FakePasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(Self::hashed(password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(Self::hashed(password) == hash)
    }
}

pub struct FakeTokenService;

impl TokenService for FakeTokenService {
    fn generate_token(&self, user_id: i32, _email: &str) -> Result<String, AuthError> {
        Ok(format!("token-for-{user_id}"))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let user_id = token
            .strip_prefix("token-for-")
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| AuthError::InvalidToken(token.to_string()))?;
        Ok(TokenClaims {
            user_id,
            email: String::new(),
            exp: 0,
        })
    }
}
