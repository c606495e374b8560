//! Shared, lock-guarded activity registry.
//!
//! The registry is the only mutable state in the service. Every enroll and
//! withdraw runs its existence check, roster check and mutation under a single
//! write lock, so concurrent callers cannot both add the same email or remove an
//! entry twice.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::invariants::validate_catalog;
use crate::core::types::{Activity, CatalogEntry, Confirmation};

/// Caller errors from registry operations.
///
/// The `Display` text is the human-readable detail surfaced to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound { activity: String },
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },
    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

/// Seed catalog rejected by [`validate_catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid activity catalog: {}", .0.join("; "))]
pub struct CatalogError(pub Vec<String>);

/// In-memory map from activity name to [`Activity`].
///
/// Activity names are fixed once the registry is built; only rosters change.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Build a registry from a seed catalog after checking its invariants.
    pub fn from_catalog(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let errors = validate_catalog(&entries);
        if !errors.is_empty() {
            return Err(CatalogError(errors));
        }
        let activities = entries
            .into_iter()
            .map(|entry| (entry.name, entry.activity))
            .collect();
        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    /// Snapshot of every activity with its live roster.
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.read().clone()
    }

    /// Snapshot of a single activity, if it exists.
    pub fn activity(&self, name: &str) -> Option<Activity> {
        self.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Append `email` to the roster of `activity_name`.
    ///
    /// Fails with `NotFound` before `AlreadyRegistered`. Capacity is not checked.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<Confirmation, RegistryError> {
        let mut activities = self.write();
        let Some(activity) = activities.get_mut(activity_name) else {
            debug!(activity = %activity_name, "enroll into unknown activity");
            return Err(RegistryError::NotFound {
                activity: activity_name.to_string(),
            });
        };
        if activity.is_enrolled(email) {
            debug!(activity = %activity_name, email = %email, "already enrolled");
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        info!(
            activity = %activity_name,
            email = %email,
            participants = activity.participants.len(),
            spots_left = activity.spots_left(),
            "enrolled participant"
        );
        Ok(Confirmation {
            activity: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    /// Remove `email` from the roster of `activity_name`, keeping the order of
    /// the remaining participants.
    ///
    /// Fails with `NotFound` before `NotRegistered`.
    pub fn withdraw(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Confirmation, RegistryError> {
        let mut activities = self.write();
        let Some(activity) = activities.get_mut(activity_name) else {
            debug!(activity = %activity_name, "withdraw from unknown activity");
            return Err(RegistryError::NotFound {
                activity: activity_name.to_string(),
            });
        };
        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            debug!(activity = %activity_name, email = %email, "not enrolled");
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };
        activity.participants.remove(position);
        info!(
            activity = %activity_name,
            email = %email,
            participants = activity.participants.len(),
            "withdrew participant"
        );
        Ok(Confirmation {
            activity: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    // Mutations never leave the map half-updated, so a poisoned lock still
    // guards a consistent registry.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Activity>> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Activity>> {
        self.activities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invariants::duplicate_participants;
    use crate::test_support::{catalog_entry, seeded_registry};

    fn roster(registry: &ActivityRegistry, name: &str) -> Vec<String> {
        registry.activity(name).expect("activity").participants
    }

    #[test]
    fn list_returns_every_seeded_activity() {
        let registry = seeded_registry();
        let activities = registry.list_activities();
        assert_eq!(activities.len(), 9);
        let chess = &activities["Chess Club"];
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
    }

    #[test]
    fn list_reflects_live_state() {
        let registry = seeded_registry();
        registry
            .enroll("Science Club", "new@mergington.edu")
            .expect("enroll");
        let activities = registry.list_activities();
        assert_eq!(
            activities["Science Club"].participants,
            vec!["ava@mergington.edu", "new@mergington.edu"]
        );
    }

    #[test]
    fn enroll_appends_new_participant() {
        let registry = seeded_registry();
        let before = roster(&registry, "Chess Club");

        let confirmation = registry
            .enroll("Chess Club", "newstudent@mergington.edu")
            .expect("enroll");

        assert_eq!(confirmation.activity, "Chess Club");
        assert_eq!(confirmation.email, "newstudent@mergington.edu");
        let after = roster(&registry, "Chess Club");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("newstudent@mergington.edu"));
    }

    #[test]
    fn enroll_duplicate_fails_and_leaves_roster_unchanged() {
        let registry = seeded_registry();
        let before = roster(&registry, "Chess Club");

        let err = registry
            .enroll("Chess Club", "michael@mergington.edu")
            .expect_err("duplicate");

        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));
        assert!(err.to_string().contains("already signed up"));
        assert_eq!(roster(&registry, "Chess Club"), before);
    }

    #[test]
    fn enroll_unknown_activity_fails_without_mutation() {
        let registry = seeded_registry();
        let before = registry.list_activities();

        let err = registry
            .enroll("Underwater Basket Weaving", "a@mergington.edu")
            .expect_err("unknown");

        assert_eq!(
            err,
            RegistryError::NotFound {
                activity: "Underwater Basket Weaving".to_string()
            }
        );
        assert!(err.to_string().contains("not found"));
        assert_eq!(registry.list_activities(), before);
    }

    #[test]
    fn enroll_ignores_capacity() {
        let registry =
            ActivityRegistry::from_catalog(vec![catalog_entry("Tiny", 1, &["a@x.edu"])])
                .expect("registry");
        registry.enroll("Tiny", "b@x.edu").expect("over capacity");
        assert_eq!(roster(&registry, "Tiny"), vec!["a@x.edu", "b@x.edu"]);
        assert_eq!(registry.activity("Tiny").expect("tiny").spots_left(), 0);
    }

    #[test]
    fn withdraw_removes_only_that_entry_and_keeps_order() {
        let registry =
            ActivityRegistry::from_catalog(vec![catalog_entry("Band", 10, &["a@x", "b@x", "c@x"])])
                .expect("registry");

        let confirmation = registry.withdraw("Band", "b@x").expect("withdraw");

        assert_eq!(confirmation.email, "b@x");
        assert_eq!(roster(&registry, "Band"), vec!["a@x", "c@x"]);
    }

    #[test]
    fn withdraw_seeded_participant() {
        let registry = seeded_registry();
        registry
            .withdraw("Chess Club", "michael@mergington.edu")
            .expect("withdraw");
        assert_eq!(roster(&registry, "Chess Club"), vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn withdraw_absent_email_fails() {
        let registry = seeded_registry();
        let err = registry
            .withdraw("Chess Club", "nonexistent@mergington.edu")
            .expect_err("absent");
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn withdraw_unknown_activity_fails_before_roster_check() {
        let registry = seeded_registry();
        let err = registry
            .withdraw("Nonexistent Activity", "michael@mergington.edu")
            .expect_err("unknown");
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }

    #[test]
    fn enroll_then_withdraw_restores_roster() {
        let registry = seeded_registry();
        let before = roster(&registry, "Programming Class");

        registry
            .enroll("Programming Class", "testuser@mergington.edu")
            .expect("enroll");
        registry
            .withdraw("Programming Class", "testuser@mergington.edu")
            .expect("withdraw");

        assert_eq!(roster(&registry, "Programming Class"), before);
    }

    #[test]
    fn repeated_failures_are_stable() {
        let registry = seeded_registry();
        let before = registry.list_activities();

        let first = registry.enroll("Chess Club", "daniel@mergington.edu");
        let second = registry.enroll("Chess Club", "daniel@mergington.edu");
        assert_eq!(first, second);

        let first = registry.withdraw("Tennis Club", "ghost@mergington.edu");
        let second = registry.withdraw("Tennis Club", "ghost@mergington.edu");
        assert_eq!(first, second);

        assert_eq!(registry.list_activities(), before);
    }

    #[test]
    fn rosters_never_hold_duplicates() {
        let registry = seeded_registry();
        for email in ["x@m.edu", "y@m.edu", "x@m.edu"] {
            let _ = registry.enroll("Gym Class", email);
        }
        for activity in registry.list_activities().values() {
            assert!(duplicate_participants(&activity.participants).is_empty());
        }
    }

    #[test]
    fn from_catalog_rejects_invalid_entries() {
        let err = ActivityRegistry::from_catalog(vec![
            catalog_entry("Chess Club", 12, &[]),
            catalog_entry("Chess Club", 12, &[]),
        ])
        .expect_err("duplicate names");
        assert_eq!(
            err.to_string(),
            "invalid activity catalog: duplicate activity 'Chess Club'"
        );
    }
}
