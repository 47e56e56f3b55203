use thiserror::Error;

use crate::constants::MATCH_ROLE;
use crate::store::StoreError;

/// Request-level failures of the match pipeline.
///
/// Everything here aborts the whole request. Per-candidate failures never
/// surface as a `MatchError`; they are logged and the candidate is skipped.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Ids are positive integers; anything else is rejected before lookup.
    #[error("user id must be a positive integer, got {0}")]
    InvalidUserId(i64),

    /// The requester does not exist or has no usable profile.
    #[error("user {user_id} not found or profile incomplete")]
    UserNotFound { user_id: i64 },

    /// The requester does not hold the required role.
    #[error("user {user_id} does not have the '{MATCH_ROLE}' role")]
    Forbidden { user_id: i64 },

    /// The persistence boundary failed while serving the requester.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
