//! Reviews left on campgrounds.

use std::fmt;

use uuid::Uuid;

use super::campground::CampgroundId;
use super::user::UserId;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Validation errors raised while building reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidationError {
    /// The id was not a UUID.
    InvalidId,
    /// Body was blank.
    EmptyBody,
    /// Rating was not an integer between [`MIN_RATING`] and [`MAX_RATING`].
    InvalidRating,
}

impl fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Cannot find that review!"),
            Self::EmptyBody => write!(f, "Review must not be empty"),
            Self::InvalidRating => {
                write!(f, "Rating must be between {MIN_RATING} and {MAX_RATING}")
            }
        }
    }
}

impl std::error::Error for ReviewValidationError {}

/// Stable review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(Uuid);

impl ReviewId {
    /// Parse an id taken from a request path.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ReviewValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| ReviewValidationError::InvalidId)
    }

    /// Generate a new random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated review text and rating.
///
/// # Examples
/// ```
/// use yelp_camp::domain::ReviewDraft;
///
/// let draft = ReviewDraft::try_from_parts("Lovely spot", "5").unwrap();
/// assert_eq!(draft.rating(), 5);
/// assert!(ReviewDraft::try_from_parts("Lovely spot", "6").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    body: String,
    rating: u8,
}

impl ReviewDraft {
    /// Validate a body and a rating typed into a form.
    pub fn try_from_parts(body: &str, rating: &str) -> Result<Self, ReviewValidationError> {
        let rating = rating
            .trim()
            .parse::<u8>()
            .map_err(|_| ReviewValidationError::InvalidRating)?;
        Self::try_new(body, rating)
    }

    /// Validate a body and a numeric rating.
    pub fn try_new(body: &str, rating: u8) -> Result<Self, ReviewValidationError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ReviewValidationError::EmptyBody);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewValidationError::InvalidRating);
        }
        Ok(Self {
            body: body.to_owned(),
            rating,
        })
    }

    /// Review text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Star rating.
    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }
}

/// A persisted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Stable identifier.
    pub id: ReviewId,
    /// Campground the review belongs to.
    pub campground: CampgroundId,
    /// Reviewer.
    pub author: UserId,
    /// Text and rating.
    pub content: ReviewDraft,
}
