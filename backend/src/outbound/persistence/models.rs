//! Diesel row structs for the three tables.
//!
//! Rows stay inside the persistence module. Conversions into domain types
//! re-run the domain validation and report failures as plain messages.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Campground, CampgroundDraft, CampgroundId, Email, GeoPoint, ImageRef, PasswordHash, Review,
    ReviewDraft, ReviewId, StoredUser, User, UserId, Username,
};

use super::schema::{campgrounds, reviews, users};

// ---------------------------------------------------------------------------
// User models
// ---------------------------------------------------------------------------

/// A `users` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl UserRow {
    /// Rebuild the public account view.
    pub fn into_user(self) -> Result<User, String> {
        let username = Username::new(&self.username).map_err(|err| err.to_string())?;
        let email = Email::new(&self.email).map_err(|err| err.to_string())?;
        Ok(User::new(UserId::from_uuid(self.id), username, email))
    }

    /// Rebuild the account together with its credential material.
    pub fn into_stored_user(self) -> Result<StoredUser, String> {
        let password = PasswordHash::from_phc(self.password_hash.as_str());
        Ok(StoredUser {
            user: self.into_user()?,
            password,
        })
    }
}

/// Insert payload for `users`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> From<&'a StoredUser> for NewUserRow<'a> {
    fn from(stored: &'a StoredUser) -> Self {
        Self {
            id: *stored.id().as_uuid(),
            username: stored.user.username().as_ref(),
            email: stored.user.email().as_ref(),
            password_hash: stored.password.as_phc(),
        }
    }
}

// ---------------------------------------------------------------------------
// Campground models
// ---------------------------------------------------------------------------

/// Row struct for reading from the campgrounds table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = campgrounds)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CampgroundRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub geometry: Option<serde_json::Value>,
    pub images: serde_json::Value,
    pub author_id: Uuid,
}

impl TryFrom<CampgroundRow> for Campground {
    type Error = String;

    fn try_from(row: CampgroundRow) -> Result<Self, Self::Error> {
        let geometry = row
            .geometry
            .map(serde_json::from_value::<GeoPoint>)
            .transpose()
            .map_err(|err| format!("invalid geometry: {err}"))?;
        let images: Vec<ImageRef> = serde_json::from_value(row.images)
            .map_err(|err| format!("invalid images: {err}"))?;
        let fields =
            CampgroundDraft::try_new(&row.title, &row.description, row.price, &row.location)
                .map_err(|err| err.to_string())?
                .with_geometry(geometry)
                .with_images(images);
        Ok(Self::new(
            CampgroundId::from_uuid(row.id),
            UserId::from_uuid(row.author_id),
            fields,
        ))
    }
}

/// Column values shared by inserts and updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = campgrounds)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CampgroundChanges<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub location: &'a str,
    pub geometry: Option<serde_json::Value>,
    pub images: serde_json::Value,
}

impl<'a> CampgroundChanges<'a> {
    /// Encode the editable fields of a listing.
    pub fn encode(fields: &'a CampgroundDraft) -> Result<Self, String> {
        let geometry = fields
            .geometry()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| format!("invalid geometry: {err}"))?;
        let images =
            serde_json::to_value(fields.images()).map_err(|err| format!("invalid images: {err}"))?;
        Ok(Self {
            title: fields.title(),
            description: fields.description(),
            price: fields.price(),
            location: fields.location(),
            geometry,
            images,
        })
    }
}

/// Insertable struct for creating new campground records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campgrounds)]
pub(crate) struct NewCampgroundRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub location: &'a str,
    pub geometry: Option<serde_json::Value>,
    pub images: serde_json::Value,
    pub author_id: Uuid,
}

impl<'a> NewCampgroundRow<'a> {
    /// Encode a complete listing for insertion.
    pub fn encode(campground: &'a Campground) -> Result<Self, String> {
        let CampgroundChanges {
            title,
            description,
            price,
            location,
            geometry,
            images,
        } = CampgroundChanges::encode(campground.fields())?;
        Ok(Self {
            id: *campground.id().as_uuid(),
            title,
            description,
            price,
            location,
            geometry,
            images,
            author_id: *campground.author().as_uuid(),
        })
    }
}

// ---------------------------------------------------------------------------
// Review models
// ---------------------------------------------------------------------------

/// Row struct for reading from the reviews table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewRow {
    pub id: Uuid,
    pub campground_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub rating: i16,
}

impl TryFrom<ReviewRow> for Review {
    type Error = String;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let rating =
            u8::try_from(row.rating).map_err(|_| format!("invalid rating {}", row.rating))?;
        let content = ReviewDraft::try_new(&row.body, rating).map_err(|err| err.to_string())?;
        Ok(Self {
            id: ReviewId::from_uuid(row.id),
            campground: CampgroundId::from_uuid(row.campground_id),
            author: UserId::from_uuid(row.author_id),
            content,
        })
    }
}

/// Insertable struct for creating new review records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub id: Uuid,
    pub campground_id: Uuid,
    pub author_id: Uuid,
    pub body: &'a str,
    pub rating: i16,
}

impl<'a> From<&'a Review> for NewReviewRow<'a> {
    fn from(review: &'a Review) -> Self {
        Self {
            id: *review.id.as_uuid(),
            campground_id: *review.campground.as_uuid(),
            author_id: *review.author.as_uuid(),
            body: review.content.body(),
            rating: i16::from(review.content.rating()),
        }
    }
}
