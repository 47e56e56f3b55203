use std::sync::Arc;

use crate::matching::MatchService;

/// Shared handler state.
///
/// `service` is `None` when artifact loading failed at startup; every match
/// request then answers 503 until the process is restarted with usable
/// artifacts.
#[derive(Clone)]
pub struct HandlerState {
    pub service: Option<Arc<MatchService>>,
}

impl HandlerState {
    pub fn new(service: Arc<MatchService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// State for a process whose artifacts could not be loaded.
    pub fn unavailable() -> Self {
        Self { service: None }
    }
}
