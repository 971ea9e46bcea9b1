//! Campground seeding orchestration.
//!
//! Converts generated seed-data listings into validated domain campgrounds,
//! then delegates the replace-all write to the seeding repository port.

use std::sync::Arc;

use seed_data::{CampgroundSeed, GenerationError, SeedCatalogue, generate_campgrounds};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ports::{
    CampgroundSeedRepository, CampgroundSeedRepositoryError, CampgroundSeedRequest,
};
use crate::domain::{
    Campground, CampgroundDraft, CampgroundId, CampgroundValidationError, Email, GeoPoint,
    ImageRef, PasswordHash, StoredUser, User, UserId, UserValidationError, Username,
};

/// Fixed id of the account every seeded listing is attributed to.
pub const SEED_AUTHOR_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0001);
/// Username of the seed author.
pub const SEED_AUTHOR_USERNAME: &str = "seed-admin";
/// Email of the seed author.
pub const SEED_AUTHOR_EMAIL: &str = "seed-admin@yelp-camp.invalid";

/// Result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampgroundSeedOutcome {
    /// RNG seed the batch was generated from.
    pub seed: u64,
    /// Number of listings now stored.
    pub inserted: usize,
}

/// Errors raised while preparing or applying seed listings.
#[derive(Debug, Error)]
pub enum CampgroundSeedingError {
    /// Listing generation failed.
    #[error("campground generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated listing failed domain validation.
    #[error("generated campground failed validation: {0}")]
    Campground(#[from] CampgroundValidationError),
    /// The seed author failed domain validation.
    #[error("seed author failed validation: {0}")]
    Author(#[from] UserValidationError),
    /// Persistence adapter failed while seeding.
    #[error("campground seed persistence error: {0}")]
    Persistence(#[from] CampgroundSeedRepositoryError),
}

/// Service that replaces all listings with a generated batch.
pub struct CampgroundSeeder<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for CampgroundSeeder<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> CampgroundSeeder<R> {
    /// Seeder writing through `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CampgroundSeeder<R>
where
    R: CampgroundSeedRepository + ?Sized,
{
    /// Generate `count` listings from `catalogue` and store them in place of
    /// whatever was there before.
    ///
    /// # Errors
    ///
    /// Returns [`CampgroundSeedingError`] if generation, validation, or
    /// persistence fails.
    pub async fn seed(
        &self,
        catalogue: &SeedCatalogue,
        count: usize,
        seed: u64,
    ) -> Result<CampgroundSeedOutcome, CampgroundSeedingError> {
        let author = seed_author()?;
        let campgrounds = generate_campgrounds(catalogue, count, seed)?
            .into_iter()
            .map(|camp| convert_seed(camp, *author.id()))
            .collect::<Result<Vec<_>, _>>()?;

        let inserted = self
            .repository
            .replace_all(CampgroundSeedRequest {
                author,
                campgrounds,
            })
            .await?;

        Ok(CampgroundSeedOutcome { seed, inserted })
    }
}

fn seed_author() -> Result<StoredUser, UserValidationError> {
    Ok(StoredUser {
        user: User::new(
            UserId::from_uuid(SEED_AUTHOR_ID),
            Username::new(SEED_AUTHOR_USERNAME)?,
            Email::new(SEED_AUTHOR_EMAIL)?,
        ),
        password: PasswordHash::unusable(),
    })
}

fn convert_seed(
    seed: CampgroundSeed,
    author: UserId,
) -> Result<Campground, CampgroundValidationError> {
    let geometry = GeoPoint::new(seed.geometry.longitude, seed.geometry.latitude)?;
    let images = seed
        .images
        .into_iter()
        .map(|image| ImageRef {
            url: image.url,
            filename: image.filename,
        })
        .collect();
    let draft = CampgroundDraft::try_new(
        &seed.title,
        &seed.description,
        f64::from(seed.price),
        &seed.location,
    )?
    .with_geometry(Some(geometry))
    .with_images(images);
    Ok(Campground::new(CampgroundId::random(), author, draft))
}
