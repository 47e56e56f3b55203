//! Pair-level primitives: orientation compatibility, great-circle distance,
//! set similarity.

use std::collections::HashSet;

use crate::constants::{EARTH_RADIUS_KM, MISSING_GEO_DISTANCE_KM};

const PREFER_NOT_TO_SAY: &str = "prefer not to say";

/// Whether `a` would be interested in `b` based on sex and orientation alone.
///
/// Straight requires opposite binary sex; non-binary straight users are
/// treated as interested in any non-non-binary partner. Homosexual requires
/// equal sex. Bisexual is always interested.
fn is_interested(sex_a: &str, orientation_a: &str, sex_b: &str) -> bool {
    let sex_a = sex_a.to_lowercase();
    let orientation_a = orientation_a.to_lowercase();
    let sex_b = sex_b.to_lowercase();

    match orientation_a.as_str() {
        "straight" => {
            (sex_a == "male" && sex_b == "female")
                || (sex_a == "female" && sex_b == "male")
                || (sex_a == "non-binary" && sex_b != "non-binary")
        }
        "homosexual" => sex_a == sex_b,
        "bisexual" => true,
        _ => false,
    }
}

/// Symmetric orientation compatibility predicate.
///
/// Any missing input is incompatible. If any of the four inputs is
/// "prefer not to say", compatibility requires both orientations to be
/// bisexual or prefer-not-to-say, overriding the general rule. Otherwise
/// both directional interests must hold.
pub fn orientation_compatible(
    sex_a: Option<&str>,
    orientation_a: Option<&str>,
    sex_b: Option<&str>,
    orientation_b: Option<&str>,
) -> bool {
    let (Some(sex_a), Some(orientation_a), Some(sex_b), Some(orientation_b)) =
        (sex_a, orientation_a, sex_b, orientation_b)
    else {
        return false;
    };

    let withheld = [sex_a, sex_b, orientation_a, orientation_b]
        .iter()
        .any(|v| v.eq_ignore_ascii_case(PREFER_NOT_TO_SAY));

    if withheld {
        let open = |orientation: &str| {
            orientation.eq_ignore_ascii_case("bisexual")
                || orientation.eq_ignore_ascii_case(PREFER_NOT_TO_SAY)
        };
        return open(orientation_a) && open(orientation_b);
    }

    is_interested(sex_a, orientation_a, sex_b) && is_interested(sex_b, orientation_b, sex_a)
}

/// Great-circle distance between two coordinates in km.
///
/// Any missing coordinate yields the 10000 km sentinel instead of an error.
pub fn haversine_km(
    lat1: Option<f64>,
    lon1: Option<f64>,
    lat2: Option<f64>,
    lon2: Option<f64>,
) -> f64 {
    let (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) = (lat1, lon1, lat2, lon2) else {
        return MISSING_GEO_DISTANCE_KM;
    };

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Intersection-over-union of two normalized sets. Two empty sets score 0.0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    intersection as f64 / union as f64
}
