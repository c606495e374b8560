//! Test-only helpers for building catalogs and registries.

use crate::core::catalog::default_catalog;
use crate::core::registry::ActivityRegistry;
use crate::core::types::{Activity, CatalogEntry};

/// Create a catalog entry with deterministic description and schedule.
pub fn catalog_entry(name: &str, max_participants: u32, participants: &[&str]) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        activity: Activity {
            description: format!("{} description", name),
            schedule: format!("{} schedule", name),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    }
}

/// Fresh registry seeded with the built-in Mergington catalog.
pub fn seeded_registry() -> ActivityRegistry {
    ActivityRegistry::from_catalog(default_catalog()).expect("default catalog is valid")
}
