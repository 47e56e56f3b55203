//! Filesystem-backed user store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::error::StoreError;
use super::model::UserRecord;
use super::UserStore;

/// Reads `user_<id>.json` records from a data directory.
///
/// The directory is scanned on every candidate-pool request; records are
/// never cached, matching the snapshot-per-request contract.
#[derive(Debug, Clone)]
pub struct JsonUserStore {
    data_dir: PathBuf,
}

impl JsonUserStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, user_id: i64) -> PathBuf {
        self.data_dir.join(format!("user_{user_id}.json"))
    }

    fn read_record(&self, path: &Path) -> Result<UserRecord, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Deserialize {
            path: path.to_path_buf(),
            source,
        })
    }

    fn scan_ids(&self) -> Vec<i64> {
        let Ok(entries) = std::fs::read_dir(&self.data_dir) else {
            return Vec::new();
        };

        let mut ids: Vec<i64> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name();
                let name = name.to_str()?;
                name.strip_prefix("user_")?
                    .strip_suffix(".json")?
                    .parse()
                    .ok()
            })
            .collect();

        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn fetch_user(&self, user_id: i64) -> Result<Option<UserRecord>, StoreError> {
        let path = self.record_path(user_id);
        if !path.is_file() {
            return Ok(None);
        }

        self.read_record(&path).map(Some)
    }

    async fn candidate_ids(
        &self,
        role: &str,
        exclude_user_id: i64,
    ) -> Result<Vec<i64>, StoreError> {
        let mut candidates = Vec::new();

        for id in self.scan_ids() {
            if id == exclude_user_id {
                continue;
            }

            match self.read_record(&self.record_path(id)) {
                Ok(record) if record.role == role => candidates.push(id),
                Ok(_) => {}
                Err(e) => debug!(user_id = id, error = %e, "skipping unreadable record"),
            }
        }

        Ok(candidates)
    }
}
