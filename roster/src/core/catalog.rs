//! Built-in Mergington High School activity catalog.

use crate::core::types::{Activity, CatalogEntry};

fn entry(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        activity: Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    }
}

/// Catalog used when the configuration does not list any activities.
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        entry(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        entry(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        entry(
            "Basketball Team",
            "Competitive basketball practice and games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
        entry(
            "Tennis Club",
            "Learn and practice tennis skills",
            "Saturdays, 10:00 AM - 11:30 AM",
            8,
            &["sarah@mergington.edu"],
        ),
        entry(
            "Art Studio",
            "Explore painting, drawing, and mixed media",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["grace@mergington.edu", "lucas@mergington.edu"],
        ),
        entry(
            "Music Ensemble",
            "Join our school band and orchestra",
            "Tuesdays and Fridays, 4:00 PM - 5:00 PM",
            25,
            &["isabella@mergington.edu"],
        ),
        entry(
            "Debate Team",
            "Develop argumentation and public speaking skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            12,
            &["marcus@mergington.edu", "noah@mergington.edu"],
        ),
        entry(
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Mondays, 3:30 PM - 4:30 PM",
            18,
            &["ava@mergington.edu"],
        ),
    ]
}
