use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read activities file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse activities file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Activity \"{activity}\" lists participant \"{email}\" more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// The Mergington High School activity catalog seeded on startup when no
/// activities file is configured.
pub fn default_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    let mut insert = |name: &str, description: &str, schedule: &str, max: u32, emails: &[&str]| {
        activities.insert(
            name.to_string(),
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: max,
                participants: emails.iter().map(|e| e.to_string()).collect(),
            },
        );
    };

    insert(
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    insert(
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    insert(
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );
    insert(
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    );
    insert(
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    );
    insert(
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    );
    insert(
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    );
    insert(
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    );
    insert(
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    );

    activities
}

/// Loads the activity catalog from a JSON file holding the same
/// name -> activity map the API serves.
pub fn load_activities(path: &Path) -> Result<BTreeMap<String, Activity>, SeedError> {
    let contents = std::fs::read_to_string(path)?;
    let activities: BTreeMap<String, Activity> = serde_json::from_str(&contents)?;

    for (name, activity) in &activities {
        for (i, email) in activity.participants.iter().enumerate() {
            if activity.participants[..i].contains(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }

    Ok(activities)
}
