//! Raw per-user record supplied by the persistence boundary.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable per-request snapshot of one user's raw profile.
///
/// Reference-table attributes (body type, orientation, job, drink, smoke,
/// education) arrive already resolved to their display names; multi-valued
/// attributes arrive as name lists. Rebuilt fresh on every fetch, never
/// cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub role: String,

    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub sex: Option<String>,
    pub body_type: Option<String>,
    pub orientation: Option<String>,
    pub job: Option<String>,
    pub drink: Option<String>,
    pub smoke: Option<String>,
    pub education: Option<String>,
    pub interested_in_new_language: Option<bool>,
    pub dropped_out_school: Option<bool>,
    pub bio: Option<String>,

    /// Preferred match radius in km; -1 means "no preference".
    pub location_preference: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub pets: Vec<String>,
}

impl UserRecord {
    /// Age in whole years derived from the date of birth, as of today.
    pub fn age(&self) -> Option<f64> {
        let born = self.date_of_birth?;
        let today = Utc::now().date_naive();

        let mut age = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            age -= 1;
        }

        (age >= 0).then_some(f64::from(age))
    }
}
