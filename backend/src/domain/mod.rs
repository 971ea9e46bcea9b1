//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed domain entities and the use-cases that
//! operate on them, independent of HTTP and persistence.
//!
//! Public surface:
//! - Error (alias to `error::Error`) and `ErrorCode`, the carrier every
//!   handler failure is expressed as.
//! - Users, credentials and password hashing.
//! - Campgrounds and reviews with their validating constructors.
//! - `AccountService`, `CampgroundService`, `ReviewService` and
//!   `CampgroundSeeder`, which implement the ports in [`ports`].

pub mod accounts;
pub mod auth;
pub mod campground;
pub mod campground_service;
pub mod error;
pub mod password;
pub mod ports;
pub mod review;
pub mod seeding;
pub mod user;

pub use self::accounts::{
    AccountService, BAD_CREDENTIALS_MESSAGE, DUPLICATE_EMAIL_MESSAGE, DUPLICATE_USERNAME_MESSAGE,
};
pub use self::auth::{CredentialsValidationError, LoginCredentials, Registration};
pub use self::campground::{
    Campground, CampgroundDetails, CampgroundDraft, CampgroundId, CampgroundValidationError,
    GeoPoint, ImageRef, ReviewDetails, parse_price,
};
pub use self::campground_service::{
    CAMPGROUND_NOT_FOUND_MESSAGE, CampgroundService, PERMISSION_DENIED_MESSAGE,
    REVIEW_NOT_FOUND_MESSAGE, ReviewService,
};
pub use self::error::{DEFAULT_ERROR_MESSAGE, Error, ErrorCode, UNAVAILABLE_MESSAGE};
pub use self::password::{PasswordHash, PasswordHashingError, StoredUser};
pub use self::review::{MAX_RATING, MIN_RATING, Review, ReviewDraft, ReviewId, ReviewValidationError};
pub use self::seeding::{
    CampgroundSeedOutcome, CampgroundSeeder, CampgroundSeedingError, SEED_AUTHOR_EMAIL,
    SEED_AUTHOR_ID, SEED_AUTHOR_USERNAME,
};
pub use self::user::{Email, User, UserId, UserValidationError, Username};

