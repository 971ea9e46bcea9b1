//! Port for replacing every campground with a generated batch.
use async_trait::async_trait;

use crate::domain::{Campground, StoredUser};

use super::define_port_error;

define_port_error! {
    /// Errors raised by campground seed adapters.
    pub enum CampgroundSeedRepositoryError {
        /// No database connection was available.
        Connection { message: String } => "campground seed connection failed: {message}",
        /// The statement failed.
        Query { message: String } => "campground seed query failed: {message}",
        /// Another account already holds the seed author's username or email.
        AuthorConflict { column: String } => "seed author {column} is taken by another account",
    }
}

/// A batch of listings plus the account they are attributed to.
#[derive(Debug, Clone)]
pub struct CampgroundSeedRequest {
    /// Author of every listing; created when absent.
    pub author: StoredUser,
    /// Listings that replace the current contents.
    pub campgrounds: Vec<Campground>,
}

/// Replace-all seeding port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampgroundSeedRepository: Send + Sync {
    /// Atomically delete every campground (and with them every review) and
    /// insert the batch. Returns the number of listings inserted.
    async fn replace_all(
        &self,
        request: CampgroundSeedRequest,
    ) -> Result<usize, CampgroundSeedRepositoryError>;
}
