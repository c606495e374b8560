//! Shared application state for the roster server.

use std::sync::Arc;

use roster::core::registry::ActivityRegistry;
use tokio::sync::broadcast;

/// Roster changes broadcast to SSE clients after a mutation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    Enrolled { activity: String, email: String },
    Withdrawn { activity: String, email: String },
}

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single registry owned by this process.
    pub registry: Arc<ActivityRegistry>,
    /// Broadcast sender for roster change events.
    pub event_tx: Arc<broadcast::Sender<RosterEvent>>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            registry: Arc::new(registry),
            event_tx: Arc::new(event_tx),
        }
    }
}
