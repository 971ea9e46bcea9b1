//! Account storage port.
use async_trait::async_trait;

use crate::domain::{StoredUser, User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Failures reported by account storage.
    pub enum UserPersistenceError {
        /// No database connection was available.
        Connection { message: String } => "user repository connection failed: {message}",
        /// The statement failed.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique column already holds the submitted value.
        Conflict { column: String } => "user repository conflict on {column}",
    }
}

/// Account storage used by the account service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account. Duplicate usernames or emails yield
    /// [`UserPersistenceError::Conflict`] naming the column.
    async fn insert(&self, user: &StoredUser) -> Result<(), UserPersistenceError>;

    /// Fetch an account together with its credential material.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<StoredUser>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}
