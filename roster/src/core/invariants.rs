//! Catalog invariants checked before a registry is seeded.

use std::collections::HashSet;

use crate::core::types::CatalogEntry;

/// Check seed catalog invariants:
/// - Activity names are non-empty and unique
/// - `max_participants > 0`
/// - No participant email appears twice within one activity
pub fn validate_catalog(entries: &[CatalogEntry]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for entry in entries {
        if entry.name.trim().is_empty() {
            errors.push("activity name must not be empty".to_string());
            continue;
        }
        if !names.insert(entry.name.as_str()) {
            errors.push(format!("duplicate activity '{}'", entry.name));
        }
        if entry.activity.max_participants == 0 {
            errors.push(format!("{}: max_participants must be > 0", entry.name));
        }
        for email in duplicate_participants(&entry.activity.participants) {
            errors.push(format!("{}: participant '{}' listed twice", entry.name, email));
        }
    }

    errors
}

/// Emails that occur more than once, in order of their second appearance.
pub fn duplicate_participants(participants: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    participants
        .iter()
        .filter(|p| !seen.insert(p.as_str()))
        .map(String::as_str)
        .collect()
}
