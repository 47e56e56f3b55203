//! In-memory user store for tests.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::StoreError;
use super::model::UserRecord;
use super::UserStore;

/// Mock store with per-id failure injection and a fetch log.
#[derive(Default)]
pub struct MockUserStore {
    users: RwLock<HashMap<i64, UserRecord>>,
    failing_ids: RwLock<HashSet<i64>>,
    fetch_log: RwLock<Vec<i64>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: UserRecord) {
        self.users
            .write()
            .expect("lock poisoned")
            .insert(record.id, record);
    }

    /// Makes every subsequent fetch of `user_id` fail with a store error.
    pub fn fail_fetch(&self, user_id: i64) {
        self.failing_ids
            .write()
            .expect("lock poisoned")
            .insert(user_id);
    }

    /// Ids fetched so far, in call order.
    pub fn fetched_ids(&self) -> Vec<i64> {
        self.fetch_log.read().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn fetch_user(&self, user_id: i64) -> Result<Option<UserRecord>, StoreError> {
        self.fetch_log.write().expect("lock poisoned").push(user_id);

        if self
            .failing_ids
            .read()
            .expect("lock poisoned")
            .contains(&user_id)
        {
            return Err(StoreError::LookupFailed {
                user_id,
                message: "injected failure".to_string(),
            });
        }

        Ok(self
            .users
            .read()
            .expect("lock poisoned")
            .get(&user_id)
            .cloned())
    }

    async fn candidate_ids(
        &self,
        role: &str,
        exclude_user_id: i64,
    ) -> Result<Vec<i64>, StoreError> {
        let mut ids: Vec<i64> = self
            .users
            .read()
            .expect("lock poisoned")
            .values()
            .filter(|r| r.role == role && r.id != exclude_user_id)
            .map(|r| r.id)
            .collect();

        ids.sort_unstable();
        Ok(ids)
    }
}

/// A fully populated record for tests; tweak fields per scenario.
pub fn sample_record(id: i64) -> UserRecord {
    UserRecord {
        id,
        role: "USER".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1996, 4, 12),
        height: Some(66.0),
        sex: Some("female".to_string()),
        body_type: Some("average".to_string()),
        orientation: Some("straight".to_string()),
        job: Some("technology".to_string()),
        drink: Some("socially".to_string()),
        smoke: Some("no".to_string()),
        education: Some("bachelor".to_string()),
        interested_in_new_language: Some(true),
        dropped_out_school: Some(false),
        bio: Some("I love hiking and movies".to_string()),
        location_preference: Some(50),
        latitude: Some(21.0278),
        longitude: Some(105.8342),
        interests: vec!["hiking".to_string(), "movies".to_string()],
        languages: vec!["english".to_string()],
        pets: vec!["dog".to_string()],
    }
}
