//! Campground listings and their value types.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::review::Review;
use super::user::{UserId, Username};

/// Validation errors raised while building campground values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampgroundValidationError {
    /// The id was not a UUID.
    InvalidId,
    /// Title was blank.
    EmptyTitle,
    /// Description was blank.
    EmptyDescription,
    /// Location was blank.
    EmptyLocation,
    /// Price was not a finite, non-negative number.
    InvalidPrice,
    /// Coordinates fell outside the valid longitude/latitude ranges.
    InvalidCoordinates,
    /// Image reference was not an absolute http(s) URL.
    InvalidImageUrl,
}

impl fmt::Display for CampgroundValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::InvalidId => "Cannot find that campground!",
            Self::EmptyTitle => "Title must not be empty",
            Self::EmptyDescription => "Description must not be empty",
            Self::EmptyLocation => "Location must not be empty",
            Self::InvalidPrice => "Price must be a number no less than 0",
            Self::InvalidCoordinates => "Coordinates are out of range",
            Self::InvalidImageUrl => "Image must be an http(s) URL",
        };
        f.write_str(message)
    }
}

impl std::error::Error for CampgroundValidationError {}

/// Stable campground identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CampgroundId(Uuid);

impl CampgroundId {
    /// Parse an id taken from a request path.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CampgroundValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| CampgroundValidationError::InvalidId)
    }

    /// Generate a new random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CampgroundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// GeoJSON point. Serialises as `{"type":"Point","coordinates":[lng,lat]}`.
///
/// # Examples
/// ```
/// use yelp_camp::domain::GeoPoint;
///
/// let point = GeoPoint::new(-122.4, 37.8).unwrap();
/// let json = serde_json::to_value(point).unwrap();
/// assert_eq!(json["type"], "Point");
/// assert_eq!(json["coordinates"][0], -122.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonPoint", into = "GeoJsonPoint")]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Validate coordinates given in decimal degrees.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, CampgroundValidationError> {
        let valid = longitude.is_finite()
            && latitude.is_finite()
            && (-180.0..=180.0).contains(&longitude)
            && (-90.0..=90.0).contains(&latitude);
        if !valid {
            return Err(CampgroundValidationError::InvalidCoordinates);
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }
}

#[derive(Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

impl From<GeoPoint> for GeoJsonPoint {
    fn from(value: GeoPoint) -> Self {
        Self {
            kind: "Point".to_owned(),
            coordinates: [value.longitude, value.latitude],
        }
    }
}

impl TryFrom<GeoJsonPoint> for GeoPoint {
    type Error = CampgroundValidationError;

    fn try_from(value: GeoJsonPoint) -> Result<Self, Self::Error> {
        if value.kind != "Point" {
            return Err(CampgroundValidationError::InvalidCoordinates);
        }
        let [longitude, latitude] = value.coordinates;
        Self::new(longitude, latitude)
    }
}

/// Reference to an image hosted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Public URL.
    pub url: String,
    /// Provider-side name, used as alt text.
    pub filename: String,
}

impl ImageRef {
    /// Build a reference from a pasted URL, naming it after its last path
    /// segment without extension.
    ///
    /// # Examples
    /// ```
    /// use yelp_camp::domain::ImageRef;
    ///
    /// let image = ImageRef::from_url("https://images.unsplash.com/photo/lake.jpg").unwrap();
    /// assert_eq!(image.filename, "lake");
    /// ```
    pub fn from_url(raw: &str) -> Result<Self, CampgroundValidationError> {
        let url = Url::parse(raw.trim()).map_err(|_| CampgroundValidationError::InvalidImageUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CampgroundValidationError::InvalidImageUrl);
        }
        let filename = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(|segment| segment.split('.').next().unwrap_or(segment))
            .filter(|stem| !stem.is_empty())
            .unwrap_or("image")
            .to_owned();
        Ok(Self {
            url: url.into(),
            filename,
        })
    }
}

/// Parse a price typed into a form field.
///
/// # Examples
/// ```
/// use yelp_camp::domain::parse_price;
///
/// assert_eq!(parse_price(" 12.50 "), Ok(12.5));
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("free").is_err());
/// ```
pub fn parse_price(raw: &str) -> Result<f64, CampgroundValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CampgroundValidationError::InvalidPrice)
        .and_then(validate_price)
}

fn validate_price(price: f64) -> Result<f64, CampgroundValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(CampgroundValidationError::InvalidPrice)
    }
}

fn require_text(
    value: &str,
    error: CampgroundValidationError,
) -> Result<String, CampgroundValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

/// Validated campground fields supplied by an author.
///
/// ## Invariants
/// - `title`, `description` and `location` are trimmed and non-empty.
/// - `price` is finite and `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CampgroundDraft {
    title: String,
    description: String,
    price: f64,
    location: String,
    geometry: Option<GeoPoint>,
    images: Vec<ImageRef>,
}

impl CampgroundDraft {
    /// Validate the required text fields and price.
    pub fn try_new(
        title: &str,
        description: &str,
        price: f64,
        location: &str,
    ) -> Result<Self, CampgroundValidationError> {
        Ok(Self {
            title: require_text(title, CampgroundValidationError::EmptyTitle)?,
            description: require_text(description, CampgroundValidationError::EmptyDescription)?,
            price: validate_price(price)?,
            location: require_text(location, CampgroundValidationError::EmptyLocation)?,
            geometry: None,
            images: Vec::new(),
        })
    }

    /// Attach coordinates.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Option<GeoPoint>) -> Self {
        self.geometry = geometry;
        self
    }

    /// Attach image references.
    #[must_use]
    pub fn with_images(mut self, images: Vec<ImageRef>) -> Self {
        self.images = images;
        self
    }

    /// Listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Nightly price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Human-readable location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Optional coordinates.
    #[must_use]
    pub const fn geometry(&self) -> Option<GeoPoint> {
        self.geometry
    }

    /// Image references.
    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }
}

/// A persisted campground listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Campground {
    id: CampgroundId,
    author: UserId,
    fields: CampgroundDraft,
}

impl Campground {
    /// Combine an id, author and validated fields.
    #[must_use]
    pub const fn new(id: CampgroundId, author: UserId, fields: CampgroundDraft) -> Self {
        Self { id, author, fields }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> &CampgroundId {
        &self.id
    }

    /// Author of the listing.
    #[must_use]
    pub const fn author(&self) -> &UserId {
        &self.author
    }

    /// Author-editable fields.
    #[must_use]
    pub const fn fields(&self) -> &CampgroundDraft {
        &self.fields
    }

    /// Replace the editable fields, keeping images when the update has none.
    #[must_use]
    pub fn with_fields(self, fields: CampgroundDraft) -> Self {
        let fields = if fields.images.is_empty() {
            let images = self.fields.images;
            fields.with_images(images)
        } else {
            fields
        };
        Self {
            id: self.id,
            author: self.author,
            fields,
        }
    }
}

/// A review annotated with its author's name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetails {
    /// The stored review.
    pub review: Review,
    /// Display name of the reviewer.
    pub author_name: Username,
}

/// Read model for the campground page.
#[derive(Debug, Clone, PartialEq)]
pub struct CampgroundDetails {
    /// The listing itself.
    pub campground: Campground,
    /// Display name of the listing author.
    pub author_name: Username,
    /// Reviews, oldest first.
    pub reviews: Vec<ReviewDetails>,
}
