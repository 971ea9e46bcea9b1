//! In-memory repository doubles for integration tests.
//!
//! Compiled for unit tests and when the `test-support` feature is enabled.
//! One [`InMemoryStore`] implements every repository port over shared state,
//! so deleting a campground removes its reviews just like the database
//! cascade does.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CampgroundPersistenceError, CampgroundRepository, CampgroundSeedRepository,
    CampgroundSeedRepositoryError, CampgroundSeedRequest, ReviewPersistenceError,
    ReviewRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Campground, CampgroundDetails, CampgroundId, Review, ReviewDetails, ReviewId, StoredUser,
    User, UserId, Username,
};
use crate::server::RepositoryPorts;

const POISONED: &str = "in-memory store lock poisoned";

#[derive(Default)]
struct StoreState {
    users: Vec<StoredUser>,
    /// Newest first.
    campgrounds: Vec<Campground>,
    reviews: Vec<Review>,
}

impl StoreState {
    fn username(&self, id: &UserId) -> Option<Username> {
        self.users
            .iter()
            .find(|stored| stored.id() == id)
            .map(|stored| stored.user.username().clone())
    }
}

/// Shared in-memory storage implementing every repository port.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository ports backed by this store.
    #[must_use]
    pub fn ports(&self) -> RepositoryPorts {
        RepositoryPorts {
            users: Arc::new(self.clone()),
            campgrounds: Arc::new(self.clone()),
            reviews: Arc::new(self.clone()),
        }
    }

    /// Number of stored campgrounds.
    #[must_use]
    pub fn campground_count(&self) -> usize {
        self.lock().map(|state| state.campgrounds.len()).unwrap_or_default()
    }

    /// Number of stored reviews.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.lock().map(|state| state.reviews.len()).unwrap_or_default()
    }

    /// Every stored campground, newest first.
    #[must_use]
    pub fn campgrounds(&self) -> Vec<Campground> {
        self.lock()
            .map(|state| state.campgrounds.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, &'static str> {
        self.state.lock().map_err(|_| POISONED)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &StoredUser) -> Result<(), UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        let username = user.user.username();
        let email = user.user.email();
        if state.users.iter().any(|s| s.user.username() == username) {
            return Err(UserPersistenceError::conflict("username"));
        }
        if state.users.iter().any(|s| s.user.email() == email) {
            return Err(UserPersistenceError::conflict("email"));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<StoredUser>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state
            .users
            .iter()
            .find(|stored| stored.user.username() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state
            .users
            .iter()
            .find(|stored| stored.id() == id)
            .map(|stored| stored.user.clone()))
    }
}

#[async_trait]
impl CampgroundRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Campground>, CampgroundPersistenceError> {
        let state = self.lock().map_err(CampgroundPersistenceError::query)?;
        Ok(state.campgrounds.clone())
    }

    async fn find_by_id(
        &self,
        id: &CampgroundId,
    ) -> Result<Option<Campground>, CampgroundPersistenceError> {
        let state = self.lock().map_err(CampgroundPersistenceError::query)?;
        Ok(state.campgrounds.iter().find(|camp| camp.id() == id).cloned())
    }

    async fn find_details(
        &self,
        id: &CampgroundId,
    ) -> Result<Option<CampgroundDetails>, CampgroundPersistenceError> {
        let state = self.lock().map_err(CampgroundPersistenceError::query)?;
        let Some(campground) = state.campgrounds.iter().find(|camp| camp.id() == id) else {
            return Ok(None);
        };
        let missing_author = || CampgroundPersistenceError::query("author missing");
        let author_name = state.username(campground.author()).ok_or_else(missing_author)?;
        let reviews = state
            .reviews
            .iter()
            .filter(|review| review.campground == *id)
            .map(|review| {
                Ok(ReviewDetails {
                    review: review.clone(),
                    author_name: state.username(&review.author).ok_or_else(missing_author)?,
                })
            })
            .collect::<Result<Vec<_>, CampgroundPersistenceError>>()?;
        Ok(Some(CampgroundDetails {
            campground: campground.clone(),
            author_name,
            reviews,
        }))
    }

    async fn insert(&self, campground: &Campground) -> Result<(), CampgroundPersistenceError> {
        let mut state = self.lock().map_err(CampgroundPersistenceError::query)?;
        state.campgrounds.insert(0, campground.clone());
        Ok(())
    }

    async fn update(&self, campground: &Campground) -> Result<bool, CampgroundPersistenceError> {
        let mut state = self.lock().map_err(CampgroundPersistenceError::query)?;
        let Some(slot) = state
            .campgrounds
            .iter_mut()
            .find(|camp| camp.id() == campground.id())
        else {
            return Ok(false);
        };
        *slot = campground.clone();
        Ok(true)
    }

    async fn delete(&self, id: &CampgroundId) -> Result<bool, CampgroundPersistenceError> {
        let mut state = self.lock().map_err(CampgroundPersistenceError::query)?;
        let before = state.campgrounds.len();
        state.campgrounds.retain(|camp| camp.id() != id);
        state.reviews.retain(|review| review.campground != *id);
        Ok(state.campgrounds.len() < before)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn insert(&self, review: &Review) -> Result<(), ReviewPersistenceError> {
        let mut state = self.lock().map_err(ReviewPersistenceError::query)?;
        if !state
            .campgrounds
            .iter()
            .any(|camp| *camp.id() == review.campground)
        {
            return Err(ReviewPersistenceError::query("campground missing"));
        }
        state.reviews.push(review.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewPersistenceError> {
        let state = self.lock().map_err(ReviewPersistenceError::query)?;
        Ok(state.reviews.iter().find(|review| review.id == *id).cloned())
    }

    async fn delete(&self, id: &ReviewId) -> Result<bool, ReviewPersistenceError> {
        let mut state = self.lock().map_err(ReviewPersistenceError::query)?;
        let before = state.reviews.len();
        state.reviews.retain(|review| review.id != *id);
        Ok(state.reviews.len() < before)
    }
}

#[async_trait]
impl CampgroundSeedRepository for InMemoryStore {
    async fn replace_all(
        &self,
        request: CampgroundSeedRequest,
    ) -> Result<usize, CampgroundSeedRepositoryError> {
        let mut state = self.lock().map_err(CampgroundSeedRepositoryError::query)?;
        let CampgroundSeedRequest {
            author,
            campgrounds,
        } = request;
        let others = state.users.iter().filter(|stored| stored.id() != author.id());
        for stored in others {
            if stored.user.username() == author.user.username() {
                return Err(CampgroundSeedRepositoryError::author_conflict("username"));
            }
            if stored.user.email() == author.user.email() {
                return Err(CampgroundSeedRepositoryError::author_conflict("email"));
            }
        }
        if !state.users.iter().any(|stored| stored.id() == author.id()) {
            state.users.push(author);
        }
        state.reviews.clear();
        state.campgrounds = campgrounds;
        Ok(state.campgrounds.len())
    }
}
