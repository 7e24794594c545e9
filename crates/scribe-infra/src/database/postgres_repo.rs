//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use scribe_core::domain::{AuthorRef, NewPost, NewUser, Post, User, UserChanges};
use scribe_core::error::RepoError;
use scribe_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::errors::map_db_err;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            last_name: Set(new_user.last_name),
            email: Set(new_user.email),
            password: Set(new_user.password_hash),
        }
        .insert(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepoError> {
        let mut active = user::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }

        // An id with no row comes back as `RecordNotUpdated`.
        let model = active.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(model.into())
    }
}

impl PostgresPostRepository {
    async fn resolve_author(&self, author: AuthorRef) -> Result<i32, RepoError> {
        match author {
            AuthorRef::Id(id) => Ok(id),
            AuthorRef::Email(email) => UserEntity::find()
                .filter(user::Column::Email.eq(email.as_str()))
                .one(self.db.as_ref())
                .await
                .map_err(map_db_err)?
                .map(|u| u.id)
                .ok_or_else(|| {
                    RepoError::Constraint(format!(
                        "No author found with email {}",
                        mask_email(&email)
                    ))
                }),
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    /// An unknown author id is rejected by the `posts.author_id` foreign key.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let author_id = self.resolve_author(new_post.author).await?;
        let now = Utc::now();

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new_post.title),
            content: Set(new_post.content),
            published: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            view_count: Set(0),
            author_id: Set(author_id),
        }
        .insert(self.db.as_ref())
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }
}
