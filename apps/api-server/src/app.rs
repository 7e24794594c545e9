//! Application assembly shared by the server and the HTTP tests.

use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::{security, session};
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Build the app with its global middleware. Outermost first: request
/// logging, request id, CORS, security headers, session. The config is
/// taken by value so the returned app borrows nothing.
pub fn build_app(
    state: web::Data<AppState>,
    config: AppConfig,
    key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(session::session_middleware(&config.session, key))
        .wrap(security::security_headers(&config.security))
        .wrap(security::cors(&config.cors))
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .configure(handlers::configure_routes)
}
