//! Login gate for handlers that need a signed-in user.
//!
//! Taking [`AuthenticatedUser`] as a handler argument is the whole check: an
//! anonymous request is answered with a redirect to the login form before the
//! handler runs.

use std::fmt;

use actix_web::http::{Method, StatusCode};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload};
use futures_util::future::{Ready, ready};
use tracing::warn;

use crate::domain::User;

use super::error::redirect_to;
use super::flash::{FlashKind, FlashMessages};
use super::locals::Locals;
use super::session::SessionContext;

/// Flash text shown when a login is required.
pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be signed in first!";
/// Login form location.
pub const LOGIN_PATH: &str = "/login";

/// The signed-in user of the current request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(User);

impl AuthenticatedUser {
    /// Borrow the user.
    pub const fn user(&self) -> &User {
        &self.0
    }

    /// Take ownership of the user.
    pub fn into_inner(self) -> User {
        self.0
    }
}

/// Rejection for anonymous requests to protected routes.
///
/// Renders as a `302` to [`LOGIN_PATH`], so the flash error pipeline leaves
/// it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRequired;

impl fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LOGIN_REQUIRED_MESSAGE)
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        redirect_to(LOGIN_PATH)
    }
}

/// Remember a `GET` target so the user lands there after logging in.
/// Form submissions are not replayable, so they are not remembered.
fn remember_target(req: &HttpRequest) {
    if req.method() != Method::GET {
        return;
    }
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.path().to_owned(), ToString::to_string);
    if let Err(err) = SessionContext::from_http_request(req).set_return_to(&target) {
        warn!(error = %err, "failed to remember login target");
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match Locals::of(req).current_user {
            Some(user) => Ok(Self(user)),
            None => {
                remember_target(req);
                FlashMessages::from_http_request(req)
                    .push(FlashKind::Error, LOGIN_REQUIRED_MESSAGE);
                Err(LoginRequired.into())
            }
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::dev::Service;
    use actix_web::{App, HttpMessage, test as actix_test, web};
    use rstest::rstest;

    use crate::domain::{Email, UserId, Username};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    async fn protected(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user().username().to_string())
    }

    async fn peek(session: SessionContext, flash: FlashMessages) -> HttpResponse {
        HttpResponse::Ok().body(format!(
            "{}|{}",
            session.take_return_to().unwrap_or_default(),
            flash.take(FlashKind::Error).join(",")
        ))
    }

    #[actix_web::test]
    async fn signed_in_users_pass() {
        let locals = Locals {
            current_user: Some(User::new(
                UserId::random(),
                Username::new("colt").expect("username"),
                Email::new("colt@example.com").expect("email"),
            )),
            ..Locals::default()
        };
        let app = actix_test::init_service(
            App::new()
                .wrap_fn(move |req, srv| {
                    req.extensions_mut().insert(locals.clone());
                    srv.call(req)
                })
                .wrap(test_session_middleware())
                .route("/private", web::get().to(protected)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/private").to_request();

        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(actix_test::read_body(res).await, "colt");
    }

    #[rstest]
    #[case(Method::GET, "/private?tab=1", "/private?tab=1")]
    #[case(Method::POST, "/private", "")]
    #[actix_web::test]
    async fn anonymous_requests_are_sent_to_login(
        #[case] method: Method,
        #[case] uri: &str,
        #[case] remembered: &str,
    ) {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/private", web::route().to(protected))
                .route("/peek", web::get().to(peek)),
        )
        .await;

        let req = actix_test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some(LOGIN_PATH)
        );
        let cookie = session_cookie(&res);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/peek").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(
            actix_test::read_body(res).await,
            format!("{remembered}|{LOGIN_REQUIRED_MESSAGE}")
        );
    }
}
