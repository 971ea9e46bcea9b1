//! Generated campground seed types.
//!
//! These types mirror the backend's campground shape without depending on it.
//! The seed binary converts them into validated domain values.

use serde::{Deserialize, Serialize};

/// GeoJSON point expressed as longitude/latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPointSeed {
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
}

/// Reference to an already-hosted image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSeed {
    /// Public URL of the image.
    pub url: String,
    /// Provider-side file name.
    pub filename: String,
}

/// A generated campground listing.
///
/// # Example
///
/// ```
/// use seed_data::{CampgroundSeed, GeoPointSeed};
///
/// let camp = CampgroundSeed {
///     title: "Misty Hollow".to_owned(),
///     description: "Quiet".to_owned(),
///     price: 12,
///     location: "Springfield, Ohio".to_owned(),
///     geometry: GeoPointSeed { longitude: -83.8, latitude: 39.9 },
///     images: vec![],
/// };
///
/// assert_eq!(camp.title, "Misty Hollow");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampgroundSeed {
    /// `"{descriptor} {place}"`.
    pub title: String,
    /// Fixed placeholder description.
    pub description: String,
    /// Nightly price in whole currency units.
    pub price: u32,
    /// `"{city}, {state}"`.
    pub location: String,
    /// Coordinates of the sampled city.
    pub geometry: GeoPointSeed,
    /// Image references attached to the listing.
    pub images: Vec<ImageSeed>,
}
