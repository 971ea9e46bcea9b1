//! PostgreSQL-backed `CampgroundRepository` implementation using Diesel ORM.
//!
//! Listings are stored one row each; geometry and image references live in
//! JSONB columns. Reviews are removed by the `ON DELETE CASCADE` foreign key
//! when their campground is deleted.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CampgroundPersistenceError, CampgroundRepository};
use crate::domain::{Campground, CampgroundDetails, CampgroundId, Review, ReviewDetails, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CampgroundChanges, CampgroundRow, NewCampgroundRow, ReviewRow};
use super::pool::{DbPool, PoolError};
use super::schema::{campgrounds, reviews, users};

/// Diesel-backed listing storage.
#[derive(Clone)]
pub struct DieselCampgroundRepository {
    pool: DbPool,
}

impl DieselCampgroundRepository {
    /// Repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CampgroundPersistenceError {
    map_pool_error(error, CampgroundPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CampgroundPersistenceError {
    map_diesel_error(
        error,
        CampgroundPersistenceError::query,
        CampgroundPersistenceError::connection,
    )
}

fn author_name(raw: &str) -> Result<Username, CampgroundPersistenceError> {
    Username::new(raw).map_err(|err| CampgroundPersistenceError::query(err.to_string()))
}

fn review_details(
    rows: Vec<(ReviewRow, String)>,
) -> Result<Vec<ReviewDetails>, CampgroundPersistenceError> {
    rows.into_iter()
        .map(|(row, name)| {
            let review = Review::try_from(row).map_err(CampgroundPersistenceError::query)?;
            Ok(ReviewDetails {
                review,
                author_name: author_name(&name)?,
            })
        })
        .collect()
}

#[async_trait]
impl CampgroundRepository for DieselCampgroundRepository {
    async fn list_all(&self) -> Result<Vec<Campground>, CampgroundPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<CampgroundRow> = campgrounds::table
            .select(CampgroundRow::as_select())
            .order_by(campgrounds::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter()
            .map(|row| Campground::try_from(row).map_err(CampgroundPersistenceError::query))
            .collect()
    }

    async fn find_by_id(
        &self,
        id: &CampgroundId,
    ) -> Result<Option<Campground>, CampgroundPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = campgrounds::table
            .filter(campgrounds::id.eq(id.as_uuid()))
            .select(CampgroundRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(Campground::try_from)
            .transpose()
            .map_err(CampgroundPersistenceError::query)
    }

    async fn find_details(
        &self,
        id: &CampgroundId,
    ) -> Result<Option<CampgroundDetails>, CampgroundPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let found: Option<(CampgroundRow, String)> = campgrounds::table
            .inner_join(users::table)
            .filter(campgrounds::id.eq(id.as_uuid()))
            .select((CampgroundRow::as_select(), users::username))
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        let Some((row, name)) = found else {
            return Ok(None);
        };

        let review_rows: Vec<(ReviewRow, String)> = reviews::table
            .inner_join(users::table)
            .filter(reviews::campground_id.eq(id.as_uuid()))
            .select((ReviewRow::as_select(), users::username))
            .order_by(reviews::created_at.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(Some(CampgroundDetails {
            campground: Campground::try_from(row).map_err(CampgroundPersistenceError::query)?,
            author_name: author_name(&name)?,
            reviews: review_details(review_rows)?,
        }))
    }

    async fn insert(&self, campground: &Campground) -> Result<(), CampgroundPersistenceError> {
        let row = NewCampgroundRow::encode(campground).map_err(CampgroundPersistenceError::query)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::insert_into(campgrounds::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn update(&self, campground: &Campground) -> Result<bool, CampgroundPersistenceError> {
        let changes = CampgroundChanges::encode(campground.fields())
            .map_err(CampgroundPersistenceError::query)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let updated = diesel::update(campgrounds::table)
            .filter(campgrounds::id.eq(campground.id().as_uuid()))
            .set((&changes, campgrounds::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &CampgroundId) -> Result<bool, CampgroundPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(campgrounds::table.filter(campgrounds::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}
