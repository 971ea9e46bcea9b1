//! Security response headers.
//!
//! Every response carries a fixed Content-Security-Policy plus the usual
//! browser hardening headers. Header values are built once when the
//! middleware is constructed.

use std::fmt;
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha3/dist/css/bootstrap.min.css";

const SCRIPT_SOURCES: &[&str] = &[
    BOOTSTRAP_CSS,
    "https://stackpath.bootstrapcdn.com/",
    "https://api.tiles.mapbox.com/",
    "https://api.mapbox.com/",
    "https://kit.fontawesome.com/",
    "https://cdnjs.cloudflare.com/",
    "https://cdn.jsdelivr.net",
];

const STYLE_SOURCES: &[&str] = &[
    BOOTSTRAP_CSS,
    "https://kit-free.fontawesome.com/",
    "https://stackpath.bootstrapcdn.com/",
    "https://api.mapbox.com/",
    "https://api.tiles.mapbox.com/",
    "https://fonts.googleapis.com/",
    "https://use.fontawesome.com/",
];

const CONNECT_SOURCES: &[&str] = &[
    "https://api.mapbox.com/",
    "https://a.tiles.mapbox.com/",
    "https://b.tiles.mapbox.com/",
    "https://events.mapbox.com/",
];

const IMAGE_SOURCES: &[&str] = &[
    "https://res.cloudinary.com/dsxspcjcm/",
    "https://images.unsplash.com/",
];

/// A Content-Security-Policy as an ordered list of directives.
///
/// A directive with no sources renders as `'none'`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSecurityPolicy {
    directives: Vec<(&'static str, Vec<&'static str>)>,
}

impl ContentSecurityPolicy {
    /// Append a directive.
    #[must_use]
    pub fn directive(mut self, name: &'static str, sources: &[&'static str]) -> Self {
        self.directives.push((name, sources.to_vec()));
        self
    }

    /// Sources allowed for `name`, if the directive is present.
    pub fn sources(&self, name: &str) -> Option<&[&'static str]> {
        self.directives
            .iter()
            .find(|(directive, _)| *directive == name)
            .map(|(_, sources)| sources.as_slice())
    }

    /// The policy served by the application: CDN styles and scripts, Mapbox
    /// tiles and the two image hosts.
    ///
    /// # Examples
    /// ```
    /// use yelp_camp::inbound::http::security::ContentSecurityPolicy;
    ///
    /// let policy = ContentSecurityPolicy::yelp_camp().to_string();
    /// assert!(policy.starts_with("default-src 'none'"));
    /// assert!(policy.contains("https://images.unsplash.com/"));
    /// ```
    #[must_use]
    pub fn yelp_camp() -> Self {
        let with = |fixed: &[&'static str], extra: &[&'static str]| -> Vec<&'static str> {
            fixed.iter().chain(extra).copied().collect()
        };
        Self::default()
            .directive("default-src", &[])
            .directive("connect-src", &with(&["'self'"], CONNECT_SOURCES))
            .directive(
                "script-src",
                &with(&["'unsafe-inline'", "'self'"], SCRIPT_SOURCES),
            )
            .directive(
                "style-src",
                &with(&["'self'", "'unsafe-inline'"], STYLE_SOURCES),
            )
            .directive("worker-src", &["'self'", "blob:"])
            .directive("object-src", &[])
            .directive(
                "img-src",
                &with(&["'self'", "blob:", "data:"], IMAGE_SOURCES),
            )
            .directive("font-src", &["'self'"])
            .directive("base-uri", &["'self'"])
            .directive("form-action", &["'self'"])
            .directive("frame-ancestors", &["'self'"])
            .directive("script-src-attr", &[])
    }
}

impl fmt::Display for ContentSecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, sources)) in self.directives.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            f.write_str(name)?;
            if sources.is_empty() {
                f.write_str(" 'none'")?;
            }
            for source in sources {
                write!(f, " {source}")?;
            }
        }
        Ok(())
    }
}

const BASELINE_HEADERS: &[(&str, &str)] = &[
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Middleware stamping the security headers onto every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use yelp_camp::inbound::http::security::SecurityHeaders;
///
/// let _app = App::new().wrap(SecurityHeaders::default());
/// ```
#[derive(Clone)]
pub struct SecurityHeaders {
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl SecurityHeaders {
    /// Serve `policy` alongside the baseline headers.
    pub fn new(policy: &ContentSecurityPolicy) -> Self {
        let mut headers = Vec::with_capacity(BASELINE_HEADERS.len() + 1);
        match HeaderValue::try_from(policy.to_string()) {
            Ok(value) => headers.push((
                HeaderName::from_static("content-security-policy"),
                value,
            )),
            Err(err) => error!(error = %err, "content security policy is not a valid header"),
        }
        headers.extend(BASELINE_HEADERS.iter().map(|&(name, value)| {
            (
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            )
        }));
        Self {
            headers: Rc::new(headers),
        }
    }
}

impl Default for SecurityHeaders {
    fn default() -> Self {
        Self::new(&ContentSecurityPolicy::yelp_camp())
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware {
            service,
            headers: Rc::clone(&self.headers),
        }))
    }
}

/// Service wrapper produced by [`SecurityHeaders`].
pub struct SecurityHeadersMiddleware<S> {
    service: S,
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
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
        let headers = Rc::clone(&self.headers);
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            let response_headers = res.headers_mut();
            for (name, value) in headers.iter() {
                response_headers.insert(name.clone(), value.clone());
            }
            Ok(res)
        })
    }
}
