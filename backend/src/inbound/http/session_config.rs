//! Session cookie configuration.
//!
//! Sessions live entirely in an encrypted cookie, so the only inputs are the
//! process secret and whether the cookie must travel over HTTPS only.

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite, time::Duration};
use sha2::{Digest, Sha512};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";
/// Fixed lifetime of a session cookie.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Derive the cookie key from the configured secret.
///
/// Cookie keys need 64 bytes of material; SHA-512 stretches a secret of any
/// length to exactly that.
///
/// # Examples
/// ```
/// use yelp_camp::inbound::http::session_config::session_key;
///
/// assert_eq!(session_key("a").master(), session_key("a").master());
/// assert_ne!(session_key("a").master(), session_key("b").master());
/// ```
#[must_use]
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Cookie-backed session middleware signed and encrypted with `key`.
pub(crate) fn build_session_middleware(
    key: Key,
    cookie_secure: bool,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::days(SESSION_TTL_DAYS)),
        )
        .build()
}
