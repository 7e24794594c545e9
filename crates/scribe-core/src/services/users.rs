use std::sync::Arc;

use crate::domain::{CreateUser, NewUser, User, UserChanges};
use crate::error::DomainError;
use crate::ports::UserRepository;

const USER_NOT_FOUND: &str = "User not found";

/// A removed user together with the confirmation shown to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedUser {
    pub message: &'static str,
    pub user: User,
}

/// CRUD rules for the users resource.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.repo.find_all().await?;
        if users.is_empty() {
            return Err(DomainError::not_found("No users found"));
        }
        Ok(users)
    }

    pub async fn get(&self, id: i32) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    pub async fn create(&self, input: CreateUser) -> Result<User, DomainError> {
        let (Some(name), Some(email)) = (non_empty(input.name), non_empty(input.email)) else {
            return Err(DomainError::validation("Please provide a name and an email"));
        };

        let user = self
            .repo
            .create(NewUser::new(name, email).with_last_name(input.last_name))
            .await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User, DomainError> {
        if changes.is_empty() {
            return Err(DomainError::validation(
                "Please provide at least one field to update (name, last name, email)",
            ));
        }

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| e.or_not_found(USER_NOT_FOUND))
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedUser, DomainError> {
        let user = self
            .repo
            .delete(id)
            .await
            .map_err(|e| e.or_not_found(USER_NOT_FOUND))?;
        tracing::info!(user_id = user.id, "User deleted");

        Ok(DeletedUser {
            message: "User deleted",
            user,
        })
    }

    pub async fn delete_all(&self) -> Result<&'static str, DomainError> {
        let removed = self.repo.delete_all().await?;
        tracing::info!(removed, "All users deleted");
        Ok("All users deleted")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
