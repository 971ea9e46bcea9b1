//! Session and request fixtures for handler tests.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::web;

use crate::domain::ports::{
    MockCampgroundsCommand, MockCampgroundsQuery, MockIdentityAdapter, MockLoginService,
    MockRegistrationService, MockReviewsCommand,
};
use crate::domain::{Email, User, UserId, Username};

use super::session_config::SESSION_COOKIE_NAME;
use super::state::{AccountPorts, HttpState, ListingPorts};

/// Session middleware with a fixed test key.
///
/// Generates a fresh key per invocation and leaves the `Secure` flag off so
/// plain HTTP test requests carry the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by `res`.
///
/// Panics when the response did not set one.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Port doubles for handler tests; set expectations, then call
/// [`MockPorts::into_state`].
#[derive(Default)]
pub struct MockPorts {
    pub registration: MockRegistrationService,
    pub login: MockLoginService,
    pub identity: MockIdentityAdapter,
    pub campgrounds_query: MockCampgroundsQuery,
    pub campgrounds: MockCampgroundsCommand,
    pub reviews: MockReviewsCommand,
}

impl MockPorts {
    /// Bundle the doubles into handler state.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            AccountPorts {
                registration: Arc::new(self.registration),
                login: Arc::new(self.login),
                identity: Arc::new(self.identity),
            },
            ListingPorts {
                campgrounds_query: Arc::new(self.campgrounds_query),
                campgrounds: Arc::new(self.campgrounds),
                reviews: Arc::new(self.reviews),
            },
        ))
    }
}

/// A valid user named `name`.
pub fn sample_user(name: &str) -> User {
    User::new(
        UserId::random(),
        Username::new(name).expect("username"),
        Email::new(format!("{name}@example.com")).expect("email"),
    )
}

/// Location header of `res`.
pub fn location<B>(res: &ServiceResponse<B>) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
