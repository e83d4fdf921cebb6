//! Shared state for the relay HTTP server

use crate::ports::inbound::RelayPort;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across all handlers
///
/// Holds no per-request data; every request is relayed independently.
#[derive(Clone)]
pub struct AppState {
    /// Relay use case behind the endpoints
    pub relay: Arc<dyn RelayPort>,
    /// Server start time for uptime reporting
    pub start_time: Instant,
}

impl AppState {
    pub fn new(relay: Arc<dyn RelayPort>) -> Self {
        Self {
            relay,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
