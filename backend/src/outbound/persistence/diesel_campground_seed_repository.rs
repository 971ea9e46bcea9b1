//! PostgreSQL-backed campground seeding adapter.
//!
//! Implements the `CampgroundSeedRepository` port inside one transaction:
//! the seed author is created when its id is missing, then every campground
//! (and through the cascade every review) is replaced by the batch. Another
//! account holding the seed username or email fails the run with a unique
//! violation rather than leaving the batch without an author row.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{
    CampgroundSeedRepository, CampgroundSeedRepositoryError, CampgroundSeedRequest,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, unique_violation_column};
use super::models::{NewCampgroundRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{campgrounds, users};

/// Diesel-backed implementation of the campground seeding repository.
#[derive(Clone)]
pub struct DieselCampgroundSeedRepository {
    pool: DbPool,
}

impl DieselCampgroundSeedRepository {
    /// Seeding repository over `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use yelp_camp::outbound::persistence::{
    ///     DbPool, DieselCampgroundSeedRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost")).await?;
    /// let repository = DieselCampgroundSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CampgroundSeedRepositoryError {
    map_pool_error(error, CampgroundSeedRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CampgroundSeedRepositoryError {
    if let Some(column) = unique_violation_column(&error, "users") {
        return CampgroundSeedRepositoryError::author_conflict(column);
    }
    map_diesel_error(
        error,
        CampgroundSeedRepositoryError::query,
        CampgroundSeedRepositoryError::connection,
    )
}

#[async_trait]
impl CampgroundSeedRepository for DieselCampgroundSeedRepository {
    async fn replace_all(
        &self,
        request: CampgroundSeedRequest,
    ) -> Result<usize, CampgroundSeedRepositoryError> {
        let CampgroundSeedRequest {
            author,
            campgrounds: batch,
        } = request;
        let author_row = NewUserRow::from(&author);
        let rows = batch
            .iter()
            .map(NewCampgroundRow::encode)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CampgroundSeedRepositoryError::query)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let inserted = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(users::table)
                        .values(&author_row)
                        .on_conflict(users::id)
                        .do_nothing()
                        .execute(conn)
                        .await?;

                    let removed = diesel::delete(campgrounds::table).execute(conn).await?;
                    debug!(removed, "cleared campgrounds before seeding");

                    if rows.is_empty() {
                        return Ok(0);
                    }

                    diesel::insert_into(campgrounds::table)
                        .values(&rows)
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        Ok(inserted)
    }
}
