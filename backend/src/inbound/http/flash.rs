//! One-shot flash messages stored in the session.
//!
//! Each kind has its own queue. Reading a queue returns every queued message
//! and clears it in the same step, so a message is shown exactly once.

use std::fmt;

use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};
use tracing::warn;

/// Category of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// Confirmation of a completed action.
    Success,
    /// Explanation of a failed action.
    Error,
}

impl FlashKind {
    const fn session_key(self) -> &'static str {
        match self {
            Self::Success => "flash.success",
            Self::Error => "flash.error",
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

/// Flash queues of the current session.
#[derive(Clone)]
pub struct FlashMessages(Session);

impl FlashMessages {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Borrow the flash queues of the session attached to `req`.
    pub fn from_http_request(req: &HttpRequest) -> Self {
        Self(req.get_session())
    }

    /// Append `message` to the `kind` queue.
    ///
    /// Failures are logged rather than returned: a lost notice must not turn
    /// a completed action into an error.
    pub fn push(&self, kind: FlashKind, message: impl Into<String>) {
        let mut queue = self.read(kind);
        queue.push(message.into());
        if let Err(error) = self.0.insert(kind.session_key(), queue) {
            warn!(%error, %kind, "failed to queue flash message");
        }
    }

    /// Return every queued `kind` message and clear the queue.
    pub fn take(&self, kind: FlashKind) -> Vec<String> {
        let queue = self.read(kind);
        if !queue.is_empty() {
            self.0.remove(kind.session_key());
        }
        queue
    }

    fn read(&self, kind: FlashKind) -> Vec<String> {
        match self.0.get::<Vec<String>>(kind.session_key()) {
            Ok(queue) => queue.unwrap_or_default(),
            Err(error) => {
                warn!(%error, %kind, "discarding unreadable flash queue");
                self.0.remove(kind.session_key());
                Vec::new()
            }
        }
    }
}

impl FromRequest for FlashMessages {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    #[actix_web::test]
    async fn take_drains_queue_in_order() {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/push",
                    web::get().to(|flash: FlashMessages| async move {
                        flash.push(FlashKind::Success, "first");
                        flash.push(FlashKind::Success, "second");
                        flash.push(FlashKind::Error, "oops");
                        HttpResponse::Ok()
                    }),
                )
                .route(
                    "/take",
                    web::get().to(|flash: FlashMessages| async move {
                        let success = flash.take(FlashKind::Success).join(",");
                        let error = flash.take(FlashKind::Error).join(",");
                        HttpResponse::Ok().body(format!("{success}|{error}"))
                    }),
                ),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/push").to_request();

        let res = actix_test::call_service(&app, req).await;
        let cookie = session_cookie(&res);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/take").cookie(cookie).to_request(),
        )
        .await;
        let cookie = session_cookie(&res);
        assert_eq!(actix_test::read_body(res).await, "first,second|oops");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/take").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(actix_test::read_body(res).await, "|");
    }

    #[test]
    fn kinds_use_distinct_keys() {
        assert_ne!(
            FlashKind::Success.session_key(),
            FlashKind::Error.session_key()
        );
    }
}
