//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{RepositoryPorts, build_http_state};

use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::http::error::FlashErrors;
use crate::inbound::http::locals::LocalsMiddleware;
use crate::inbound::http::method_override::MethodOverride;
use crate::inbound::http::security::SecurityHeaders;
use crate::inbound::http::session_config::build_session_middleware;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{campgrounds, home, reviews, users};
use crate::middleware::Trace;

/// Per-worker inputs of [`build_app`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Domain ports shared by every handler.
    pub http_state: web::Data<HttpState>,
    /// Session cookie key.
    pub key: Key,
    /// Whether the session cookie is `Secure`.
    pub cookie_secure: bool,
}

/// Assemble the application: middleware stack plus every route.
///
/// Middleware runs outermost first: tracing, security headers, method
/// override, session, the error-to-flash pipeline, then request locals.
/// No catch-all route is registered; unmatched paths get the framework 404.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
    } = deps;

    App::new()
        .app_data(http_state)
        .wrap(LocalsMiddleware)
        .wrap(FlashErrors)
        .wrap(build_session_middleware(key, cookie_secure))
        .wrap(MethodOverride)
        .wrap(SecurityHeaders::default())
        .wrap(Trace)
        .service(home::home)
        .service(users::register_form)
        .service(users::register)
        .service(users::login_form)
        .service(users::login)
        .service(users::logout)
        .service(campgrounds::index)
        .service(campgrounds::new_form)
        .service(campgrounds::create)
        .service(campgrounds::show)
        .service(campgrounds::edit_form)
        .service(campgrounds::update)
        .service(campgrounds::destroy)
        .service(reviews::create)
        .service(reviews::destroy)
}

/// Construct the HTTP server.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        repositories,
    } = config;
    let http_state = build_http_state(repositories);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    Ok(server)
}
