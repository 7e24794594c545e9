use std::sync::Arc;

use crate::domain::{AuthSession, Credentials, NewUser, Registration, User};
use crate::error::DomainError;
use crate::ports::{PasswordService, TokenService, UserRepository};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login and registration over the user store.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    pub fn tokens(&self) -> &Arc<dyn TokenService> {
        &self.tokens
    }

    pub async fn login(&self, credentials: Credentials) -> Result<AuthSession, DomainError> {
        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))?;

        // Users created through the users resource have no password and
        // cannot log in.
        let Some(hash) = user.password_hash.as_deref() else {
            tracing::debug!(user_id = user.id, "Login attempt for user without password");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        };
        if !self.passwords.verify(&credentials.password, hash)? {
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        }

        self.issue(user)
    }

    /// Duplicate emails are left to the store's unique constraint.
    pub async fn register(&self, registration: Registration) -> Result<AuthSession, DomainError> {
        let hash = self.passwords.hash(&registration.password)?;
        let user = self
            .users
            .create(NewUser::new(registration.name, registration.email).with_password_hash(hash))
            .await?;
        tracing::info!(user_id = user.id, "User registered");

        self.issue(user)
    }

    /// The user behind an already authenticated identity.
    pub async fn current_user(&self, user_id: i32) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    fn issue(&self, user: User) -> Result<AuthSession, DomainError> {
        let token = self.tokens.generate_token(user.id, &user.email)?;
        Ok(AuthSession { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use crate::fakes::{FakePasswordService, FakeTokenService, FakeUserRepository, john_doe};

    fn service(repo: Arc<FakeUserRepository>) -> AuthService {
        AuthService::new(
            repo,
            Arc::new(FakePasswordService),
            Arc::new(FakeTokenService),
        )
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn with_password(password: &str) -> User {
        User {
            password_hash: Some(FakePasswordService::hashed(password)),
            ..john_doe()
        }
    }

    #[tokio::test]
    async fn login_returns_token_and_user() {
        let repo = Arc::new(FakeUserRepository::with_users(vec![with_password("password")]));

        let session = service(repo)
            .login(credentials("john@email.com", "password"))
            .await
            .unwrap();

        assert_eq!(session.token, "token-for-1");
        assert_eq!(session.user.email, "john@email.com");
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_not_found() {
        let repo = Arc::new(FakeUserRepository::default());

        let err = service(repo)
            .login(credentials("nobody@email.com", "password"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let repo = Arc::new(FakeUserRepository::with_users(vec![with_password("password")]));

        let err = service(repo)
            .login(credentials("john@email.com", "letmein"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), 401);
        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn login_without_stored_password_is_unauthorized() {
        let repo = Arc::new(FakeUserRepository::with_users(vec![john_doe()]));

        let err = service(repo)
            .login(credentials("john@email.com", "password"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), 401);
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let repo = Arc::new(FakeUserRepository::default());
        let registration = Registration {
            email: "adrian@email.com".to_string(),
            name: "Adrian".to_string(),
            password: "password123".to_string(),
        };

        let session = service(repo.clone()).register(registration).await.unwrap();

        assert_eq!(session.token, "token-for-1");
        let stored = repo.find_by_email("adrian@email.com").await.unwrap().unwrap();
        assert_eq!(
            stored.password_hash.as_deref(),
            Some(FakePasswordService::hashed("password123").as_str())
        );
    }

    #[tokio::test]
    async fn register_with_taken_email_surfaces_the_constraint() {
        let repo = Arc::new(FakeUserRepository::with_users(vec![john_doe()]));
        let registration = Registration {
            email: "john@email.com".to_string(),
            name: "Johnny".to_string(),
            password: "password123".to_string(),
        };

        let err = service(repo).register(registration).await.unwrap_err();

        assert!(matches!(err, DomainError::Repository(RepoError::Constraint(_))));
        assert_eq!(err.status(), 400);
    }

    #[tokio::test]
    async fn current_user_resolves_identity() {
        let repo = Arc::new(FakeUserRepository::with_users(vec![john_doe()]));

        let user = service(repo.clone()).current_user(1).await.unwrap();
        assert_eq!(user, john_doe());

        let err = service(repo).current_user(2).await.unwrap_err();
        assert_eq!(err.status(), 404);
    }
}
