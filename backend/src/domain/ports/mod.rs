//! Traits at the edges of the domain.
//!
//! Driven ports (repositories) are implemented by outbound adapters; driving
//! ports (services) are called by inbound adapters.

mod account_services;
mod campground_repository;
mod campground_seed_repository;
mod campground_services;
mod macros;
mod review_repository;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use account_services::{IdentityAdapter, IdentityToken, LoginService, RegistrationService};
pub use campground_repository::{CampgroundPersistenceError, CampgroundRepository};
pub use campground_seed_repository::{
    CampgroundSeedRepository, CampgroundSeedRepositoryError, CampgroundSeedRequest,
};
pub use campground_services::{CampgroundsCommand, CampgroundsQuery, ReviewsCommand};
pub use review_repository::{ReviewPersistenceError, ReviewRepository};
pub use user_repository::{UserPersistenceError, UserRepository};

#[cfg(test)]
pub use account_services::{MockIdentityAdapter, MockLoginService, MockRegistrationService};
#[cfg(test)]
pub use campground_repository::MockCampgroundRepository;
#[cfg(test)]
pub use campground_seed_repository::MockCampgroundSeedRepository;
#[cfg(test)]
pub use campground_services::{MockCampgroundsCommand, MockCampgroundsQuery, MockReviewsCommand};
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
