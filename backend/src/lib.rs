//! Yelp Camp: a server-rendered campground listings site.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the entities,
//! services and ports; [`inbound`] adapts HTTP onto the services;
//! [`outbound`] implements the ports against PostgreSQL; [`server`] wires
//! everything into an Actix application.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use middleware::Trace;
