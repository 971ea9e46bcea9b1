//! Word lists and gazetteer sampled by the generator.

use crate::gazetteer::{City, generate_gazetteer};

/// Adjectives that open a generated campground title.
pub const DESCRIPTORS: [&str; 18] = [
    "Forest",
    "Ancient",
    "Petrified",
    "Roaring",
    "Cascade",
    "Tumbling",
    "Silent",
    "Redwood",
    "Bullfrog",
    "Maple",
    "Misty",
    "Elk",
    "Grizzly",
    "Ocean",
    "Sea",
    "Sky",
    "Dusty",
    "Diamond",
];

/// Nouns that close a generated campground title.
pub const PLACES: [&str; 21] = [
    "Flats",
    "Village",
    "Canyon",
    "Pond",
    "Group Camp",
    "Horse Camp",
    "Ghost Town",
    "Camp",
    "Dispersed Camp",
    "Backcountry",
    "River",
    "Creek",
    "Creekside",
    "Bay",
    "Spring",
    "Bayshore",
    "Sands",
    "Mule Camp",
    "Hunting Camp",
    "Cliffs",
    "Hollow",
];

/// Everything the generator samples from.
///
/// # Example
///
/// ```
/// use seed_data::{GAZETTEER_SIZE, SeedCatalogue};
///
/// let catalogue = SeedCatalogue::standard();
/// assert_eq!(catalogue.cities().len(), GAZETTEER_SIZE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalogue {
    descriptors: Vec<String>,
    places: Vec<String>,
    cities: Vec<City>,
}

impl SeedCatalogue {
    /// Build the standard catalogue: the fixed word lists and the generated
    /// 1000-city gazetteer.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            DESCRIPTORS.iter().map(|word| (*word).to_owned()).collect(),
            PLACES.iter().map(|word| (*word).to_owned()).collect(),
            generate_gazetteer(),
        )
    }

    /// Build a catalogue from explicit parts.
    #[must_use]
    pub const fn new(descriptors: Vec<String>, places: Vec<String>, cities: Vec<City>) -> Self {
        Self {
            descriptors,
            places,
            cities,
        }
    }

    /// Title descriptors.
    #[must_use]
    pub fn descriptors(&self) -> &[String] {
        &self.descriptors
    }

    /// Title places.
    #[must_use]
    pub fn places(&self) -> &[String] {
        &self.places
    }

    /// Gazetteer entries.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}
