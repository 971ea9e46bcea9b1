//! Campground and review services enforcing existence and authorship rules.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{
    CampgroundPersistenceError, CampgroundRepository, CampgroundsCommand, CampgroundsQuery,
    ReviewPersistenceError, ReviewRepository, ReviewsCommand,
};
use super::{
    Campground, CampgroundDetails, CampgroundDraft, CampgroundId, Error, Review, ReviewDraft,
    ReviewId, UserId,
};

/// Flash text for a missing or malformed campground id.
pub const CAMPGROUND_NOT_FOUND_MESSAGE: &str = "Cannot find that campground!";
/// Flash text for a missing review.
pub const REVIEW_NOT_FOUND_MESSAGE: &str = "Cannot find that review!";
/// Flash text when someone other than the author tries to change content.
pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to do that!";

fn map_campground_error(error: CampgroundPersistenceError) -> Error {
    match error {
        CampgroundPersistenceError::Connection { message } => Error::store_unavailable(&message),
        CampgroundPersistenceError::Query { message } => Error::store_failure(&message),
    }
}

fn map_review_error(error: ReviewPersistenceError) -> Error {
    match error {
        ReviewPersistenceError::Connection { message } => Error::store_unavailable(&message),
        ReviewPersistenceError::Query { message } => Error::store_failure(&message),
    }
}

fn campground_not_found() -> Error {
    Error::not_found(CAMPGROUND_NOT_FOUND_MESSAGE)
}

/// Listing use-cases over a [`CampgroundRepository`].
#[derive(Clone)]
pub struct CampgroundService {
    campgrounds: Arc<dyn CampgroundRepository>,
}

impl CampgroundService {
    /// Create the service.
    pub fn new(campgrounds: Arc<dyn CampgroundRepository>) -> Self {
        Self { campgrounds }
    }

    async fn owned_by(&self, id: &CampgroundId, actor: &UserId) -> Result<Campground, Error> {
        let campground = self
            .campgrounds
            .find_by_id(id)
            .await
            .map_err(map_campground_error)?
            .ok_or_else(campground_not_found)?;
        if campground.author() != actor {
            return Err(Error::forbidden(PERMISSION_DENIED_MESSAGE));
        }
        Ok(campground)
    }
}

#[async_trait]
impl CampgroundsQuery for CampgroundService {
    async fn list(&self) -> Result<Vec<Campground>, Error> {
        self.campgrounds
            .list_all()
            .await
            .map_err(map_campground_error)
    }

    async fn details(&self, id: &CampgroundId) -> Result<CampgroundDetails, Error> {
        self.campgrounds
            .find_details(id)
            .await
            .map_err(map_campground_error)?
            .ok_or_else(campground_not_found)
    }
}

#[async_trait]
impl CampgroundsCommand for CampgroundService {
    async fn create(&self, author: &UserId, draft: CampgroundDraft) -> Result<Campground, Error> {
        let campground = Campground::new(CampgroundId::random(), *author, draft);
        self.campgrounds
            .insert(&campground)
            .await
            .map_err(map_campground_error)?;
        Ok(campground)
    }

    async fn editable(&self, id: &CampgroundId, actor: &UserId) -> Result<Campground, Error> {
        self.owned_by(id, actor).await
    }

    async fn update(
        &self,
        id: &CampgroundId,
        actor: &UserId,
        draft: CampgroundDraft,
    ) -> Result<Campground, Error> {
        let updated = self.owned_by(id, actor).await?.with_fields(draft);
        let found = self
            .campgrounds
            .update(&updated)
            .await
            .map_err(map_campground_error)?;
        if !found {
            return Err(campground_not_found());
        }
        Ok(updated)
    }

    async fn delete(&self, id: &CampgroundId, actor: &UserId) -> Result<(), Error> {
        self.owned_by(id, actor).await?;
        self.campgrounds
            .delete(id)
            .await
            .map_err(map_campground_error)?;
        Ok(())
    }
}

/// Review use-cases over review and campground repositories.
#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    campgrounds: Arc<dyn CampgroundRepository>,
}

impl ReviewService {
    /// Create the service.
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        campgrounds: Arc<dyn CampgroundRepository>,
    ) -> Self {
        Self {
            reviews,
            campgrounds,
        }
    }
}

#[async_trait]
impl ReviewsCommand for ReviewService {
    async fn add(
        &self,
        campground: &CampgroundId,
        author: &UserId,
        draft: ReviewDraft,
    ) -> Result<Review, Error> {
        self.campgrounds
            .find_by_id(campground)
            .await
            .map_err(map_campground_error)?
            .ok_or_else(campground_not_found)?;
        let review = Review {
            id: ReviewId::random(),
            campground: *campground,
            author: *author,
            content: draft,
        };
        self.reviews
            .insert(&review)
            .await
            .map_err(map_review_error)?;
        Ok(review)
    }

    async fn delete(
        &self,
        campground: &CampgroundId,
        review: &ReviewId,
        actor: &UserId,
    ) -> Result<(), Error> {
        let stored = self
            .reviews
            .find_by_id(review)
            .await
            .map_err(map_review_error)?
            .filter(|stored| stored.campground == *campground)
            .ok_or_else(|| Error::not_found(REVIEW_NOT_FOUND_MESSAGE))?;
        if stored.author != *actor {
            return Err(Error::forbidden(PERMISSION_DENIED_MESSAGE));
        }
        self.reviews
            .delete(review)
            .await
            .map_err(map_review_error)?;
        Ok(())
    }
}
