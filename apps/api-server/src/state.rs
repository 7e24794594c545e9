//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{PasswordService, PostRepository, TokenService, UserRepository};
use scribe_core::services::{AuthService, PostService, UserService};
use scribe_infra::{
    Argon2PasswordService, DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository,
    JwtConfig, JwtTokenService,
};

#[cfg(feature = "postgres")]
use scribe_infra::database::{PostgresPostRepository, PostgresUserRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    pub auth: AuthService,
}

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

fn in_memory() -> Repositories {
    let users = Arc::new(InMemoryUserRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new(users.clone()));
    (users, posts)
}

impl AppState {
    /// Wire the services over the given stores.
    pub fn from_parts(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users: UserService::new(users.clone()),
            posts: PostService::new(posts),
            auth: AuthService::new(users, passwords, tokens),
        }
    }

    /// State over fresh in-memory stores.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        let (users, posts) = in_memory();
        Self::from_parts(
            users,
            posts,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(jwt)),
        )
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>, jwt: JwtConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (users, posts): Repositories = {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => {
                        let conn = Arc::new(conn);
                        (
                            Arc::new(PostgresUserRepository::new(conn.clone())),
                            Arc::new(PostgresPostRepository::new(conn)),
                        )
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, posts): Repositories = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory()
        };

        tracing::info!("Application state initialized");

        Self::from_parts(
            users,
            posts,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(jwt)),
        )
    }
}
