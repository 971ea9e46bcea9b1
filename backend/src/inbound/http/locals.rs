//! Request-scoped values every page renders: the signed-in user and the
//! flash messages queued by the previous request.
//!
//! [`LocalsMiddleware`] resolves them once per request, before routing, and
//! handlers read them through the [`Locals`] extractor.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, warn};

use crate::domain::User;

use super::flash::{FlashKind, FlashMessages};
use super::session::SessionContext;
use super::state::HttpState;

/// Values shared with every view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locals {
    /// User bound to the session, if any.
    pub current_user: Option<User>,
    /// Success messages queued by the previous request.
    pub success: Vec<String>,
    /// Error messages queued by the previous request.
    pub error: Vec<String>,
}

impl Locals {
    /// Locals attached to `req`, or empty locals when the middleware did not
    /// run.
    pub fn of(req: &HttpRequest) -> Self {
        req.extensions().get::<Self>().cloned().unwrap_or_default()
    }
}

impl FromRequest for Locals {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::of(req)))
    }
}

async fn current_user(req: &HttpRequest) -> Option<User> {
    let Some(state) = req.app_data::<web::Data<HttpState>>() else {
        warn!("HTTP state missing; treating request as anonymous");
        return None;
    };
    let token = match SessionContext::from_http_request(req).identity() {
        Ok(token) => token?,
        Err(err) => {
            warn!(error = %err, "unreadable session identity");
            return None;
        }
    };
    match state.identity.deserialize_identity(&token).await {
        Ok(user) => user,
        Err(err) => {
            error!(error = %err, "failed to resolve session identity");
            None
        }
    }
}

async fn resolve(req: &HttpRequest) -> Locals {
    let current_user = current_user(req).await;
    let flash = FlashMessages::from_http_request(req);
    Locals {
        current_user,
        success: flash.take(FlashKind::Success),
        error: flash.take(FlashKind::Error),
    }
}

/// Middleware populating [`Locals`]. Must run inside the session middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use yelp_camp::inbound::http::locals::LocalsMiddleware;
///
/// let _app = App::new().wrap(LocalsMiddleware);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LocalsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LocalsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocalsService {
            service: Rc::new(service),
        }))
    }
}

/// Service wrapper produced by [`LocalsMiddleware`].
pub struct LocalsService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LocalsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let locals = resolve(req.request()).await;
            req.extensions_mut().insert(locals);
            service.call(req).await
        })
    }
}
