//! Repositories backed by PostgreSQL.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures map to the port error of
//!   each repository.
//!
//! ```ignore
//! use yelp_camp::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/yelp-camp")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_campground_repository;
mod diesel_campground_seed_repository;
mod diesel_error_mapping;
mod diesel_review_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_campground_repository::DieselCampgroundRepository;
pub use diesel_campground_seed_repository::DieselCampgroundSeedRepository;
pub use diesel_review_repository::DieselReviewRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
