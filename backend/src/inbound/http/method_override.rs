//! `?_method=` tunnelling for HTML forms.
//!
//! Browsers only submit `GET` and `POST`. A `POST` whose query string carries
//! `_method=PUT`, `_method=PATCH` or `_method=DELETE` is rewritten to that
//! method before routing. Other methods and values are left alone.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use futures_util::future::{Ready, ready};
use tracing::debug;
use url::form_urlencoded;

/// Query parameter naming the tunnelled method.
pub const METHOD_PARAM: &str = "_method";

fn tunnelled_method(req: &ServiceRequest) -> Option<Method> {
    if req.method() != Method::POST {
        return None;
    }
    let (_, requested) = form_urlencoded::parse(req.query_string().as_bytes())
        .find(|(key, _)| key == METHOD_PARAM)?;
    match requested.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

/// Middleware applying `?_method=` overrides.
///
/// Register it on the `App` so the rewrite happens before route matching.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use yelp_camp::inbound::http::method_override::MethodOverride;
///
/// let _app = App::new().wrap(MethodOverride);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MethodOverrideMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideMiddleware { service }))
    }
}

/// Service wrapper produced by [`MethodOverride`].
pub struct MethodOverrideMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if let Some(method) = tunnelled_method(&req) {
            debug!(path = %req.path(), %method, "method override");
            req.head_mut().method = method;
        }
        self.service.call(req)
    }
}
