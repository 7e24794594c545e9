use serde::{Deserialize, Serialize};

/// User entity - a registered or directly created account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
    /// Argon2 hash; absent for users created through the users resource.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
}

/// Raw creation input. Presence of `name` and `email` is checked by the
/// user service, not by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUser {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// A checked user ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_name: None,
            email: email.into(),
            password_hash: None,
        }
    }

    pub fn with_last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }
}

/// Partial update of a user.
///
/// A field is changed when it is `Some`, whatever its value: an empty
/// string is written as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.last_name.is_none() && self.email.is_none()
    }

    /// Apply the present fields to an existing user.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}
