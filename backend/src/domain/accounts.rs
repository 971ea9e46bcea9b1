//! Account service: registration, credential checks and session identity.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::ports::{
    IdentityAdapter, IdentityToken, LoginService, RegistrationService, UserPersistenceError,
    UserRepository,
};
use super::{
    DEFAULT_ERROR_MESSAGE, Error, LoginCredentials, PasswordHash, Registration, StoredUser, User,
    UserId,
};

/// Flash text for a taken username.
pub const DUPLICATE_USERNAME_MESSAGE: &str = "A user with the given username is already registered";
/// Flash text for a taken email address.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user with the given email is already registered";
/// Flash text for any failed login, whichever part was wrong.
pub const BAD_CREDENTIALS_MESSAGE: &str = "Password or username is incorrect";

/// Map user persistence failures onto domain errors.
pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::store_unavailable(&message),
        UserPersistenceError::Query { message } => Error::store_failure(&message),
        UserPersistenceError::Conflict { column } if column == "email" => {
            Error::conflict(DUPLICATE_EMAIL_MESSAGE)
        }
        UserPersistenceError::Conflict { .. } => Error::conflict(DUPLICATE_USERNAME_MESSAGE),
    }
}

/// Implements the account driving ports over a [`UserRepository`].
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use yelp_camp::domain::AccountService;
/// use yelp_camp::domain::ports::UserRepository;
///
/// fn build(users: Arc<dyn UserRepository>) -> AccountService {
///     AccountService::new(users)
/// }
/// ```
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    /// Create the service over a user repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl RegistrationService for AccountService {
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        let password = PasswordHash::derive(registration.password()).map_err(|err| {
            error!(error = %err, "password hashing failed");
            Error::internal(DEFAULT_ERROR_MESSAGE)
        })?;
        let stored = StoredUser {
            user: User::new(
                UserId::random(),
                registration.username().clone(),
                registration.email().clone(),
            ),
            password,
        };
        self.users
            .insert(&stored)
            .await
            .map_err(map_user_persistence_error)?;
        Ok(stored.user)
    }
}

#[async_trait]
impl LoginService for AccountService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let stored = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_persistence_error)?;
        match stored {
            Some(stored) if stored.password.verify(credentials.password()) => Ok(stored.user),
            _ => Err(Error::unauthorized(BAD_CREDENTIALS_MESSAGE)),
        }
    }
}

#[async_trait]
impl IdentityAdapter for AccountService {
    fn serialize_identity(&self, user: &User) -> IdentityToken {
        IdentityToken::new(user.id().to_string())
    }

    async fn deserialize_identity(&self, token: &IdentityToken) -> Result<Option<User>, Error> {
        let Ok(id) = UserId::new(token) else {
            debug!(token = %token, "ignoring malformed identity token");
            return Ok(None);
        };
        self.users
            .find_by_id(&id)
            .await
            .map_err(map_user_persistence_error)
    }
}
