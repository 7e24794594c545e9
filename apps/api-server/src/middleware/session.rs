//! Cookie session middleware.

use actix_session::config::PersistentSession;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, time::Duration};

use crate::config::SessionConfig;

/// Shortest secret accepted as signing key material.
pub const MIN_SECRET_LEN: usize = 64;

/// Key used to sign session cookies. Without a usable secret a random key
/// is generated, so sessions do not survive a restart.
pub fn session_key(config: &SessionConfig) -> Key {
    match config.secret.as_deref() {
        Some(secret) if secret.len() >= MIN_SECRET_LEN => Key::from(secret.as_bytes()),
        Some(_) => {
            tracing::warn!(
                min_len = MIN_SECRET_LEN,
                "SESSION_SECRET too short, using temporary session key"
            );
            Key::generate()
        }
        None => {
            tracing::warn!("SESSION_SECRET not set, using temporary session key");
            Key::generate()
        }
    }
}

pub fn session_middleware(
    config: &SessionConfig,
    key: Key,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(config.cookie_name.clone())
        .cookie_path("/".into())
        .cookie_secure(config.secure)
        .cookie_http_only(config.http_only)
        .cookie_same_site(config.same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(config.ttl_hours)),
        )
        .build()
}
