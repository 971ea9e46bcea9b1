//! Generated city gazetteer.
//!
//! The gazetteer is produced from a fixed RNG seed so every process sees the
//! same 1000 cities. Coordinates fall inside the continental United States.

use fake::Fake;
use fake::faker::address::raw::{CityName, StateName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of cities in the gazetteer.
pub const GAZETTEER_SIZE: usize = 1000;

/// Fixed seed for the gazetteer RNG.
const GAZETTEER_SEED: u64 = 0x7965_6c70_6361_6d70;

const MIN_LATITUDE: f64 = 25.0;
const MAX_LATITUDE: f64 = 49.0;
const MIN_LONGITUDE: f64 = -124.0;
const MAX_LONGITUDE: f64 = -67.0;

/// A gazetteer entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// City name.
    pub city: String,
    /// State name.
    pub state: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl City {
    /// Human-readable `"{city}, {state}"` label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Generate the fixed 1000-city gazetteer.
///
/// # Example
///
/// ```
/// use seed_data::{GAZETTEER_SIZE, generate_gazetteer};
///
/// let first = generate_gazetteer();
/// let second = generate_gazetteer();
/// assert_eq!(first.len(), GAZETTEER_SIZE);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn generate_gazetteer() -> Vec<City> {
    let mut rng = ChaCha8Rng::seed_from_u64(GAZETTEER_SEED);
    (0..GAZETTEER_SIZE)
        .map(|_| {
            let city: String = CityName(EN).fake_with_rng(&mut rng);
            let state: String = StateName(EN).fake_with_rng(&mut rng);
            City {
                city,
                state,
                latitude: rng.random_range(MIN_LATITUDE..=MAX_LATITUDE),
                longitude: rng.random_range(MIN_LONGITUDE..=MAX_LONGITUDE),
            }
        })
        .collect()
}
