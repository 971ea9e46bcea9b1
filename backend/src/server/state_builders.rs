//! Builders wiring repositories into the domain services behind `HttpState`.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{CampgroundRepository, ReviewRepository, UserRepository};
use crate::domain::{AccountService, CampgroundService, ReviewService};
use crate::inbound::http::state::{AccountPorts, HttpState, ListingPorts};
use crate::outbound::persistence::{
    DbPool, DieselCampgroundRepository, DieselReviewRepository, DieselUserRepository,
};

/// Driven ports the domain services are built on.
#[derive(Clone)]
pub struct RepositoryPorts {
    /// Account storage.
    pub users: Arc<dyn UserRepository>,
    /// Listing storage.
    pub campgrounds: Arc<dyn CampgroundRepository>,
    /// Review storage.
    pub reviews: Arc<dyn ReviewRepository>,
}

impl RepositoryPorts {
    /// PostgreSQL-backed repositories sharing one pool.
    #[must_use]
    pub fn diesel(pool: &DbPool) -> Self {
        Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            campgrounds: Arc::new(DieselCampgroundRepository::new(pool.clone())),
            reviews: Arc::new(DieselReviewRepository::new(pool.clone())),
        }
    }
}

/// Build the handler state from repositories.
#[must_use]
pub fn build_http_state(repositories: RepositoryPorts) -> web::Data<HttpState> {
    let RepositoryPorts {
        users,
        campgrounds,
        reviews,
    } = repositories;
    let accounts = AccountPorts::from_service(Arc::new(AccountService::new(users)));
    let review_service = Arc::new(ReviewService::new(reviews, campgrounds.clone()));
    let listings = ListingPorts::new(
        Arc::new(CampgroundService::new(campgrounds)),
        review_service,
    );
    web::Data::new(HttpState::new(accounts, listings))
}
