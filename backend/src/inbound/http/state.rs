//! Service handles shared by every handler.
//!
//! Handlers receive [`HttpState`] through `web::Data` and only see the
//! driving ports, so tests can swap in mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::ports::{
    CampgroundsCommand, CampgroundsQuery, IdentityAdapter, LoginService, RegistrationService,
    ReviewsCommand,
};

/// Services every handler can reach.
#[derive(Clone)]
pub struct HttpState {
    /// Account creation.
    pub registration: Arc<dyn RegistrationService>,
    /// Credential checks.
    pub login: Arc<dyn LoginService>,
    /// Session identity conversion.
    pub identity: Arc<dyn IdentityAdapter>,
    /// Listing reads.
    pub campgrounds_query: Arc<dyn CampgroundsQuery>,
    /// Listing writes.
    pub campgrounds: Arc<dyn CampgroundsCommand>,
    /// Review writes.
    pub reviews: Arc<dyn ReviewsCommand>,
}

/// Account-side ports, usually one service implementing all three.
#[derive(Clone)]
pub struct AccountPorts {
    /// Account creation.
    pub registration: Arc<dyn RegistrationService>,
    /// Credential checks.
    pub login: Arc<dyn LoginService>,
    /// Session identity conversion.
    pub identity: Arc<dyn IdentityAdapter>,
}

/// Listing-side ports.
#[derive(Clone)]
pub struct ListingPorts {
    /// Listing reads.
    pub campgrounds_query: Arc<dyn CampgroundsQuery>,
    /// Listing writes.
    pub campgrounds: Arc<dyn CampgroundsCommand>,
    /// Review writes.
    pub reviews: Arc<dyn ReviewsCommand>,
}

impl AccountPorts {
    /// Use one service for every account port.
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: RegistrationService + LoginService + IdentityAdapter + 'static,
    {
        Self {
            registration: service.clone(),
            login: service.clone(),
            identity: service,
        }
    }
}

impl ListingPorts {
    /// Use one service for listing reads and writes.
    pub fn new<T>(campgrounds: Arc<T>, reviews: Arc<dyn ReviewsCommand>) -> Self
    where
        T: CampgroundsQuery + CampgroundsCommand + 'static,
    {
        Self {
            campgrounds_query: campgrounds.clone(),
            campgrounds,
            reviews,
        }
    }
}

impl HttpState {
    /// Combine account and listing ports.
    pub fn new(accounts: AccountPorts, listings: ListingPorts) -> Self {
        let AccountPorts {
            registration,
            login,
            identity,
        } = accounts;
        let ListingPorts {
            campgrounds_query,
            campgrounds,
            reviews,
        } = listings;
        Self {
            registration,
            login,
            identity,
            campgrounds_query,
            campgrounds,
            reviews,
        }
    }
}
