//! Turning failures into flash messages.
//!
//! Handlers return [`Error`] and never render failures themselves. The
//! [`FlashErrors`] middleware turns every failed response into a flashed
//! message and a redirect to the listings page; the status code is only
//! logged.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error};

use crate::domain::{DEFAULT_ERROR_MESSAGE, Error, ErrorCode};

use super::flash::{FlashKind, FlashMessages};

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Where every failed request ends up.
pub const ERROR_REDIRECT: &str = "/campgrounds";

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.status()
            .and_then(|raw| StatusCode::from_u16(raw).ok())
            .unwrap_or_else(|| status_for(self.code()))
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(header::ContentType::plaintext())
            .body(self.message().to_owned())
    }
}

/// A redirect answering any failed request.
pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Answer a `Forbidden` failure with a flash and a redirect to `location`
/// instead of the listings page. Other results pass through.
pub(crate) fn back_on_forbidden(
    result: ApiResult<HttpResponse>,
    flash: &FlashMessages,
    location: &str,
) -> ApiResult<HttpResponse> {
    match result {
        Err(err) if err.code() == ErrorCode::Forbidden => {
            flash.push(FlashKind::Error, err.message());
            Ok(redirect_to(location))
        }
        other => other,
    }
}

/// Message flashed for `error`: the domain message when there is one,
/// otherwise the generic fallback.
fn flash_text(error: &actix_web::Error) -> String {
    error
        .as_error::<Error>()
        .map_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned(), |e| e.message().to_owned())
}

fn record(req: &HttpRequest, error: &actix_web::Error, status: StatusCode) {
    let flash = flash_text(error);
    if status.is_server_error() {
        error!(
            method = %req.method(),
            path = %req.path(),
            status = status.as_u16(),
            %error,
            "request failed"
        );
    } else {
        debug!(
            method = %req.method(),
            path = %req.path(),
            status = status.as_u16(),
            %error,
            "request rejected"
        );
    }
    FlashMessages::from_http_request(req).push(FlashKind::Error, flash);
}

/// Middleware converting failed responses into flash + redirect.
///
/// Must be wrapped by the session middleware so the queued message is saved
/// with the session cookie. Responses without an attached error, such as
/// the router's default `404`, pass through untouched.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use yelp_camp::inbound::http::error::FlashErrors;
///
/// let _app = App::new().wrap(FlashErrors);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FlashErrors;

impl<S, B> Transform<S, ServiceRequest> for FlashErrors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = FlashErrorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(FlashErrorsMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service wrapper produced by [`FlashErrors`].
pub struct FlashErrorsMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for FlashErrorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // The router needs sole ownership of the request while it matches,
        // so nothing here may hold a clone across the inner call.
        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            let status = res.status();
            if !(status.is_client_error() || status.is_server_error()) {
                return Ok(res.map_into_left_body());
            }
            let Some(error) = res.response().error() else {
                return Ok(res.map_into_left_body());
            };
            record(res.request(), error, status);
            let (req, _) = res.into_parts();
            Ok(ServiceResponse::new(req, redirect_to(ERROR_REDIRECT)).map_into_right_body())
        })
    }
}

#[cfg(test)]
mod tests;
