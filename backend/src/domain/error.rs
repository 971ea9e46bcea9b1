//! The error carrier shared by every domain operation.
//!
//! These errors are transport agnostic. Inbound adapters decide how a failure
//! reaches the client; the HTTP adapter turns every one of them into a flashed
//! message and a redirect.

use std::fmt;

use tracing::error;

/// Message used whenever an error carries no usable text.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something Went Wrong!";
/// Message shown while the database cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "The service is temporarily unavailable, please try again.";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The request clashes with existing state, such as a taken username.
    Conflict,
    /// A backing service such as the database is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

impl ErrorCode {
    /// Classify a raw HTTP status code.
    ///
    /// Codes without a dedicated category fall back to
    /// [`ErrorCode::InternalError`].
    ///
    /// # Examples
    /// ```
    /// use yelp_camp::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::from_status(404), ErrorCode::NotFound);
    /// assert_eq!(ErrorCode::from_status(418), ErrorCode::InternalError);
    /// ```
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            503 => Self::ServiceUnavailable,
            _ => Self::InternalError,
        }
    }

    /// Whether the failure was caused by the caller rather than the server.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::ServiceUnavailable | Self::InternalError)
    }
}

/// Domain error payload: a human-readable message plus a category.
///
/// ## Invariants
/// - `message` is never blank; blank input is replaced with
///   [`DEFAULT_ERROR_MESSAGE`].
///
/// # Examples
/// ```
/// use yelp_camp::domain::{Error, ErrorCode};
///
/// let err = Error::http("Page Not Found", 404);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Page Not Found");
///
/// let teapot = Error::http("I'm a teapot", 418);
/// assert_eq!(teapot.code(), ErrorCode::InternalError);
/// assert_eq!(teapot.status(), Some(418));
///
/// let fallback = Error::new(ErrorCode::InternalError, "   ");
/// assert_eq!(fallback.message(), "Something Went Wrong!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    status: Option<u16>,
}

impl Error {
    /// Create a new error. Blank messages fall back to the default text.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            status: None,
        }
    }

    /// Build an error from a message and a raw HTTP status code.
    ///
    /// The status is kept as raised even when [`ErrorCode`] has no category
    /// for it.
    pub fn http(message: impl Into<String>, status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::new(ErrorCode::from_status(status), message)
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Raw status passed to [`Error::http`], if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Human-readable message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Log an unreachable backing store and return a user-safe error.
    pub(crate) fn store_unavailable(detail: &str) -> Self {
        error!(detail, "backing store unavailable");
        Self::service_unavailable(UNAVAILABLE_MESSAGE)
    }

    /// Log a failed store operation and return a user-safe error.
    pub(crate) fn store_failure(detail: &str) -> Self {
        error!(detail, "backing store operation failed");
        Self::default()
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::internal(DEFAULT_ERROR_MESSAGE)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
