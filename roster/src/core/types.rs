//! Shared types for the activity roster.

use serde::{Deserialize, Serialize};

/// One extracurricular activity and its current roster.
///
/// The activity name is the registry key and is not repeated here, which keeps
/// the listing shape `{ "<name>": { ...activity } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Enrollment does not check it.
    pub max_participants: u32,
    /// Participant emails in signup order, each at most once.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining advisory capacity, saturating at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Named activity as it appears in a seed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(flatten)]
    pub activity: Activity,
}

/// Acknowledgment returned by a successful enroll or withdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity: String,
    pub email: String,
}
