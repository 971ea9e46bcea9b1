//! Driving ports for listing and review use-cases.

use async_trait::async_trait;

use crate::domain::{
    Campground, CampgroundDetails, CampgroundDraft, CampgroundId, Error, Review, ReviewDraft,
    ReviewId, UserId,
};

/// Read-side campground use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampgroundsQuery: Send + Sync {
    /// Every listing.
    async fn list(&self) -> Result<Vec<Campground>, Error>;

    /// A listing with its reviews, or `NotFound`.
    async fn details(&self, id: &CampgroundId) -> Result<CampgroundDetails, Error>;
}

/// Write-side campground use-cases. Mutations are restricted to the author.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampgroundsCommand: Send + Sync {
    /// Create a listing owned by `author`.
    async fn create(&self, author: &UserId, draft: CampgroundDraft) -> Result<Campground, Error>;

    /// Fetch a listing for editing, or `Forbidden` when `actor` is not its author.
    async fn editable(&self, id: &CampgroundId, actor: &UserId) -> Result<Campground, Error>;

    /// Replace a listing's fields.
    async fn update(
        &self,
        id: &CampgroundId,
        actor: &UserId,
        draft: CampgroundDraft,
    ) -> Result<Campground, Error>;

    /// Delete a listing and its reviews.
    async fn delete(&self, id: &CampgroundId, actor: &UserId) -> Result<(), Error>;
}

/// Review use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsCommand: Send + Sync {
    /// Attach a review to an existing campground.
    async fn add(
        &self,
        campground: &CampgroundId,
        author: &UserId,
        draft: ReviewDraft,
    ) -> Result<Review, Error>;

    /// Delete a review; only its author may do so.
    async fn delete(
        &self,
        campground: &CampgroundId,
        review: &ReviewId,
        actor: &UserId,
    ) -> Result<(), Error>;
}
