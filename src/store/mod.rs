//! Persistence boundary.
//!
//! The match pipeline only ever reads: one record fetch per user, one id scan
//! per candidate pool. Implementations signal absence with `None`, never an
//! error. [`JsonUserStore`] backs the server binary with one JSON file per
//! user; [`MockUserStore`] backs tests with in-memory records and failure
//! injection.

pub mod error;
pub mod json;
pub mod model;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::StoreError;
pub use json::JsonUserStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockUserStore;
pub use model::UserRecord;

use async_trait::async_trait;

/// Read-only access to raw user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches one user's raw record. `None` means the user does not exist
    /// or has no usable profile.
    async fn fetch_user(&self, user_id: i64) -> Result<Option<UserRecord>, StoreError>;

    /// Ids of all users other than `exclude_user_id` holding `role`, in
    /// stable ascending order.
    async fn candidate_ids(
        &self,
        role: &str,
        exclude_user_id: i64,
    ) -> Result<Vec<i64>, StoreError>;
}
