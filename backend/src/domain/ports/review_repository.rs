//! Port abstraction for review persistence adapters.
use async_trait::async_trait;

use crate::domain::{Review, ReviewId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by review repository adapters.
    pub enum ReviewPersistenceError {
        /// No database connection was available.
        Connection { message: String } => "review repository connection failed: {message}",
        /// The statement failed.
        Query { message: String } => "review repository query failed: {message}",
    }
}

/// Storage for reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Store a new review.
    async fn insert(&self, review: &Review) -> Result<(), ReviewPersistenceError>;

    /// One review by id.
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewPersistenceError>;

    /// Remove a review. Returns `false` when nothing matched.
    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewPersistenceError>;
}
