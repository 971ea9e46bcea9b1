//! Port abstraction for campground persistence adapters.
use async_trait::async_trait;

use crate::domain::{Campground, CampgroundDetails, CampgroundId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by campground repository adapters.
    pub enum CampgroundPersistenceError {
        /// No database connection was available.
        Connection { message: String } => "campground repository connection failed: {message}",
        /// The statement failed.
        Query { message: String } => "campground repository query failed: {message}",
    }
}

/// Storage for campground listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampgroundRepository: Send + Sync {
    /// Every listing, newest first.
    async fn list_all(&self) -> Result<Vec<Campground>, CampgroundPersistenceError>;

    /// One listing by id.
    async fn find_by_id(
        &self,
        id: &CampgroundId,
    ) -> Result<Option<Campground>, CampgroundPersistenceError>;

    /// One listing with its author name and reviews.
    async fn find_details(
        &self,
        id: &CampgroundId,
    ) -> Result<Option<CampgroundDetails>, CampgroundPersistenceError>;

    /// Store a new listing.
    async fn insert(&self, campground: &Campground) -> Result<(), CampgroundPersistenceError>;

    /// Overwrite an existing listing. Returns `false` when it no longer exists.
    async fn update(&self, campground: &Campground) -> Result<bool, CampgroundPersistenceError>;

    /// Remove a listing and its reviews. Returns `false` when nothing matched.
    async fn delete(&self, id: &CampgroundId) -> Result<bool, CampgroundPersistenceError>;
}
