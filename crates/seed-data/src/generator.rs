//! Campground generation from the seed catalogue.
//!
//! Each listing samples one city, one descriptor and one place uniformly, picks
//! a price in `10..=29` and carries the fixed description and image pair.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalogue::SeedCatalogue;
use crate::error::GenerationError;
use crate::gazetteer::City;
use crate::seed::{CampgroundSeed, GeoPointSeed, ImageSeed};

/// Number of listings the seed script writes by default.
pub const DEFAULT_CAMPGROUND_COUNT: usize = 50;

const MIN_PRICE: u32 = 10;
const MAX_PRICE: u32 = 29;

/// Placeholder description attached to every generated listing.
pub const SEED_DESCRIPTION: &str = "Lorem ipsum dolor sit amet consectetur, adipisicing elit. Enim ipsum distinctio in magnam at sapiente, earum, modi tempore quos fugiat possimus delectus veniam vel, alias perferendis. Corrupti quo odio atque.";

/// `(url, filename)` pairs attached to every generated listing.
pub const SEED_IMAGES: [(&str, &str); 2] = [
    (
        "https://res.cloudinary.com/dsxspcjcm/image/upload/v1685959878/YelpCamp/y9zlbankmvjoqsoeqgqb.jpg",
        "YelpCamp/y9zlbankmvjoqsoeqgqb",
    ),
    (
        "https://res.cloudinary.com/dsxspcjcm/image/upload/v1685960767/YelpCamp/d5sta3p0qeowdvddjntq.jpg",
        "YelpCamp/d5sta3p0qeowdvddjntq",
    ),
];

/// Draw a fresh RNG seed for callers that do not pin one.
#[must_use]
pub fn random_seed() -> u64 {
    rand::random()
}

/// Generate `count` campground listings.
///
/// The same `seed` and catalogue always produce the same listings.
///
/// # Errors
///
/// Returns [`GenerationError`] when any catalogue list is empty.
///
/// # Example
///
/// ```
/// use seed_data::{SeedCatalogue, generate_campgrounds};
///
/// let catalogue = SeedCatalogue::standard();
/// let first = generate_campgrounds(&catalogue, 5, 7).expect("generated");
/// let second = generate_campgrounds(&catalogue, 5, 7).expect("generated");
/// assert_eq!(first, second);
/// ```
pub fn generate_campgrounds(
    catalogue: &SeedCatalogue,
    count: usize,
    seed: u64,
) -> Result<Vec<CampgroundSeed>, GenerationError> {
    if catalogue.descriptors().is_empty() {
        return Err(GenerationError::NoDescriptors);
    }
    if catalogue.places().is_empty() {
        return Err(GenerationError::NoPlaces);
    }
    if catalogue.cities().is_empty() {
        return Err(GenerationError::NoCities);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut camps = Vec::with_capacity(count);
    for _ in 0..count {
        camps.push(generate_single_campground(&mut rng, catalogue)?);
    }
    Ok(camps)
}

fn generate_single_campground(
    rng: &mut ChaCha8Rng,
    catalogue: &SeedCatalogue,
) -> Result<CampgroundSeed, GenerationError> {
    let city: &City = sample(rng, catalogue.cities()).ok_or(GenerationError::NoCities)?;
    let price = rng.random_range(MIN_PRICE..=MAX_PRICE);
    let descriptor = sample(rng, catalogue.descriptors()).ok_or(GenerationError::NoDescriptors)?;
    let place = sample(rng, catalogue.places()).ok_or(GenerationError::NoPlaces)?;

    Ok(CampgroundSeed {
        title: format!("{descriptor} {place}"),
        description: SEED_DESCRIPTION.to_owned(),
        price,
        location: city.label(),
        geometry: GeoPointSeed {
            longitude: city.longitude,
            latitude: city.latitude,
        },
        images: SEED_IMAGES
            .iter()
            .map(|(url, filename)| ImageSeed {
                url: (*url).to_owned(),
                filename: (*filename).to_owned(),
            })
            .collect(),
    })
}

/// Uniformly pick one element, or `None` for an empty slice.
fn sample<'a, T>(rng: &mut ChaCha8Rng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}
