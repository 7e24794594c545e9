//! Response hardening headers and the CORS policy.

use actix_cors::Cors;
use actix_web::http::{Method, header};
use actix_web::middleware::DefaultHeaders;

use crate::config::{CorsConfig, SecurityHeadersConfig};

/// Headers added to every response unless a handler already set them.
pub fn security_headers(config: &SecurityHeadersConfig) -> DefaultHeaders {
    let headers = DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add((header::X_XSS_PROTECTION, "0"))
        .add((header::REFERRER_POLICY, "no-referrer"))
        .add((header::X_DNS_PREFETCH_CONTROL, "off"))
        .add(("X-Download-Options", "noopen"))
        .add(("X-Permitted-Cross-Domain-Policies", "none"))
        .add(("Origin-Agent-Cluster", "?1"))
        .add(("Cross-Origin-Opener-Policy", "same-origin"))
        .add((
            "Cross-Origin-Resource-Policy",
            config.cross_origin_resource_policy.clone(),
        ));

    match config.hsts_max_age_secs {
        Some(max_age) => headers.add((
            header::STRICT_TRANSPORT_SECURITY,
            format!("max-age={max_age}; includeSubDomains"),
        )),
        None => headers,
    }
}

/// CORS allow-list with credentials.
pub fn cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(config.max_age_secs)
}
