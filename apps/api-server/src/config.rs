//! Application configuration loaded from environment variables.

use std::env;

use actix_web::cookie::SameSite;
use scribe_infra::{DatabaseConfig, JwtConfig};

use crate::telemetry::TelemetryConfig;

const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "https://itsecwb-aawj.xyz",
    "http://localhost:4173",
];

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Cross-origin allow-list; credentials are always allowed.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_secs: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
            max_age_secs: 3600,
        }
    }
}

impl CorsConfig {
    /// Parse a comma separated origin list, ignoring blanks.
    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Cookie session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Signing key material; at least 64 bytes to be used.
    pub secret: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
    pub http_only: bool,
    pub ttl_hours: i64,
}

impl SessionConfig {
    pub fn for_environment(environment: Environment) -> Self {
        let production = environment.is_production();
        Self {
            cookie_name: "scribe-session".to_string(),
            secret: None,
            secure: production,
            same_site: if production { SameSite::None } else { SameSite::Lax },
            http_only: false,
            ttl_hours: 24,
        }
    }
}

/// Response hardening headers.
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    pub cross_origin_resource_policy: String,
    /// `Strict-Transport-Security` is only sent when set.
    pub hsts_max_age_secs: Option<u64>,
}

impl SecurityHeadersConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            cross_origin_resource_policy: "cross-origin".to_string(),
            hsts_max_age_secs: environment.is_production().then_some(15_552_000),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
    pub session: SessionConfig,
    pub security: SecurityHeadersConfig,
    pub jwt: JwtConfig,
    pub telemetry: TelemetryConfig,
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Development);

        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parsed("DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parsed("DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        let mut cors = CorsConfig::default();
        if let Ok(origins) = env::var("CORS_ALLOWED_ORIGINS") {
            let origins = CorsConfig::parse_origins(&origins);
            if !origins.is_empty() {
                cors.allowed_origins = origins;
            }
        }

        let mut session = SessionConfig::for_environment(environment);
        session.secret = env::var("SESSION_SECRET").ok();
        if let Ok(name) = env::var("SESSION_COOKIE_NAME") {
            session.cookie_name = name;
        }

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(5000),
            environment,
            database,
            cors,
            session,
            security: SecurityHeadersConfig::for_environment(environment),
            jwt: JwtConfig::from_env(environment.is_production()),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_environment_is_development() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" PROD "), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Development);
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = CorsConfig::parse_origins("http://a.test, https://b.test,,");

        assert_eq!(origins, vec!["http://a.test", "https://b.test"]);
    }

    #[test]
    fn production_cookies_are_cross_site() {
        let prod = SessionConfig::for_environment(Environment::Production);
        let dev = SessionConfig::for_environment(Environment::Development);

        assert!(prod.secure);
        assert_eq!(prod.same_site, SameSite::None);
        assert!(!dev.secure);
        assert_eq!(dev.same_site, SameSite::Lax);
        assert!(!dev.http_only);
    }
}
