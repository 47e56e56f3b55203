//! Candidate evaluation orchestration.
//!
//! [`MatchService`] ties the persistence boundary, the orientation
//! pre-filter, and the scorer together: fetch the requester, authorize,
//! scan the candidate pool, score compatible pairs, and keep ids above the
//! configured threshold in pool order. Per-candidate failures are isolated
//! and logged; whole-request failures short-circuit before the loop.

pub mod error;
pub mod service;


pub use error::MatchError;
pub use service::MatchService;
