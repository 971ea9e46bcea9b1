//! Typed access to the session cookie.
//!
//! Handlers store the signed-in identity and the post-login `returnTo` path
//! here; flash queues live alongside in [`super::flash`].

use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::Error;
use crate::domain::ports::IdentityToken;

pub(crate) const IDENTITY_KEY: &str = "identity";
pub(crate) const RETURN_TO_KEY: &str = "returnTo";

/// Identity and `returnTo` operations over the request's session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Borrow the session attached to `req`.
    pub fn from_http_request(req: &HttpRequest) -> Self {
        Self(req.get_session())
    }

    /// Persist the authenticated identity in the session cookie.
    pub fn persist_identity(&self, token: &IdentityToken) -> Result<(), Error> {
        self.0
            .insert(IDENTITY_KEY, token.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the stored identity, if present.
    pub fn identity(&self) -> Result<Option<IdentityToken>, Error> {
        self.0
            .get::<String>(IDENTITY_KEY)
            .map(|raw| raw.map(IdentityToken::new))
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Drop the stored identity while keeping the rest of the session, so
    /// flash messages queued afterwards still reach the next page.
    pub fn forget_identity(&self) {
        self.0.remove(IDENTITY_KEY);
    }

    /// Issue a fresh cookie for the current session state.
    pub fn renew(&self) {
        self.0.renew();
    }

    /// Remember where to send the user after they log in.
    pub fn set_return_to(&self, path: &str) -> Result<(), Error> {
        self.0
            .insert(RETURN_TO_KEY, path)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Take the remembered path, clearing it.
    pub fn take_return_to(&self) -> Option<String> {
        let path = self.0.get::<String>(RETURN_TO_KEY).ok().flatten();
        self.0.remove(RETURN_TO_KEY);
        path.filter(|path| is_local_path(path))
    }
}

/// Only same-site absolute paths are followed after login.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    #[actix_web::test]
    async fn round_trips_identity() {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_identity(&IdentityToken::new("abc"))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let token = session.identity()?.map(|t| t.to_string());
                        Ok::<_, Error>(HttpResponse::Ok().body(token.unwrap_or_default()))
                    }),
                ),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/set").to_request();

        let set_res = actix_test::call_service(&app, req).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res);

        let get_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(actix_test::read_body(get_res).await, "abc");
    }

    #[actix_web::test]
    async fn missing_identity_is_none() {
        let app = actix_test::init_service(App::new().wrap(test_session_middleware()).route(
            "/get",
            web::get().to(|session: SessionContext| async move {
                let present = session.identity()?.is_some();
                Ok::<_, Error>(HttpResponse::Ok().body(present.to_string()))
            }),
        ))
        .await;

        let req = actix_test::TestRequest::get().uri("/get").to_request();

        let res = actix_test::call_service(&app, req).await;
        assert_eq!(actix_test::read_body(res).await, "false");
    }

    #[actix_web::test]
    async fn return_to_is_taken_once() {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/remember",
                    web::get().to(|session: SessionContext| async move {
                        session.set_return_to("/campgrounds/new")?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/take",
                    web::get().to(|session: SessionContext| async move {
                        HttpResponse::Ok().body(session.take_return_to().unwrap_or_default())
                    }),
                ),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/remember").to_request();

        let res = actix_test::call_service(&app, req).await;
        let cookie = session_cookie(&res);
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/take").cookie(cookie).to_request(),
        )
        .await;
        let cookie = session_cookie(&res);
        assert_eq!(actix_test::read_body(res).await, "/campgrounds/new");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/take").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(actix_test::read_body(res).await, "");
    }

    #[rstest]
    #[case("/campgrounds", true)]
    #[case("//evil.example", false)]
    #[case("https://evil.example", false)]
    fn only_local_paths_are_followed(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_local_path(path), expected);
    }
}
