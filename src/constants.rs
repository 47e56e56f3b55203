//! Cross-cutting, shared constants.
//!
//! Fallback values substitute for missing profile fields *before* rescaling,
//! so a record with gaps still produces a schema-exact feature vector. The
//! values are fixed by the training data and must not drift from the
//! artifacts they were exported with.

/// Age substituted when a profile has no usable date of birth (years).
pub const AGE_FALLBACK: f64 = 25.0;

/// Height substituted when missing (inches).
pub const HEIGHT_FALLBACK: f64 = 68.0;

/// Latitude substituted when missing (degrees).
pub const LATITUDE_FALLBACK: f64 = 21.0;

/// Longitude substituted when missing (degrees).
pub const LONGITUDE_FALLBACK: f64 = 105.8;

/// Location-preference radius meaning "no preference".
pub const NO_PREFERENCE_RADIUS: i32 = -1;

/// Distance emitted when either side of a pair has no usable coordinates (km).
pub const MISSING_GEO_DISTANCE_KM: f64 = 10_000.0;

/// Mean Earth radius used for great-circle distance (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Minimum match probability is exclusive: survivors must score above it.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

/// Role required of both the requester and every candidate.
pub const MATCH_ROLE: &str = "USER";
