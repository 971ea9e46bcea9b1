//! Driving ports for account use-cases: sign-up, login and session identity.
//!
//! Inbound adapters call these without knowing the backing infrastructure,
//! so handler tests can substitute a test double instead of wiring storage.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, User};

/// Opaque identity value stored in the session between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Wrap a raw token read back from the session.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Create accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new account and return the stored user.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}

/// Verify credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}

/// Convert between users and the identity kept in the session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityAdapter: Send + Sync {
    /// Produce the token persisted for `user`.
    fn serialize_identity(&self, user: &User) -> IdentityToken;

    /// Resolve a token back into a user.
    ///
    /// Unknown or malformed tokens resolve to `Ok(None)`; only infrastructure
    /// failures are errors.
    async fn deserialize_identity(&self, token: &IdentityToken) -> Result<Option<User>, Error>;
}
