//! Synthetic campground listings for demonstration databases.
//!
//! This crate produces believable sample listings from fixed word lists and a
//! generated city gazetteer. It is independent of backend domain types so the
//! seed binary can convert its output at the point of use.
//!
//! # Overview
//!
//! - [`SeedCatalogue`] holds the descriptor and place word lists plus the
//!   1000-entry city gazetteer.
//! - [`generate_campgrounds`] samples the catalogue into [`CampgroundSeed`]
//!   records. A fixed RNG seed reproduces the same batch.
//!
//! # Example
//!
//! ```
//! use seed_data::{SeedCatalogue, generate_campgrounds};
//!
//! let catalogue = SeedCatalogue::standard();
//! let camps = generate_campgrounds(&catalogue, 3, 42).expect("generation succeeds");
//!
//! assert_eq!(camps.len(), 3);
//! assert!(camps.iter().all(|camp| (10..=29).contains(&camp.price)));
//! ```

mod catalogue;
mod error;
mod gazetteer;
mod generator;
mod seed;

pub use catalogue::{DESCRIPTORS, PLACES, SeedCatalogue};
pub use error::GenerationError;
pub use gazetteer::{City, GAZETTEER_SIZE, generate_gazetteer};
pub use generator::{
    DEFAULT_CAMPGROUND_COUNT, SEED_DESCRIPTION, SEED_IMAGES, generate_campgrounds, random_seed,
};
pub use seed::{CampgroundSeed, GeoPointSeed, ImageSeed};
