//! HTTP handlers and route configuration.

pub mod auth;
pub mod health;
pub mod posts;
pub mod users;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::error::{json_error_handler, path_error_handler, query_error_handler};

/// Configure all application routes. Every resource falls back to the JSON
/// 404, so a known path with an unsupported method never yields an empty 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/users")
                        .service(
                            web::resource("")
                                .route(web::get().to(users::list_users))
                                .route(web::post().to(users::create_user))
                                .route(web::delete().to(users::delete_all_users))
                                .default_service(web::to(health::not_found)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(users::get_user))
                                .route(web::put().to(users::update_user))
                                .route(web::delete().to(users::delete_user))
                                .default_service(web::to(health::not_found)),
                        ),
                )
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(posts::list_posts))
                                .route(web::post().to(posts::create_post))
                                .default_service(web::to(health::not_found)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(posts::get_post))
                                .default_service(web::to(health::not_found)),
                        ),
                )
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login))
                        .route("/register", web::post().to(auth::register))
                        .route("/me", web::get().to(auth::me))
                        .default_service(web::to(health::not_found)),
                ),
        )
        .route("/health", web::get().to(health::health_check))
        .route("/", web::get().to(health::banner))
        .service(web::redirect("/docs", "/docs/"))
        .service(SwaggerUi::new("/docs/{_:.*}").url("/docs.json", ApiDoc::openapi()))
        .default_service(web::route().to(health::not_found));
}
