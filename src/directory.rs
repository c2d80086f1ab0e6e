use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is already at maximum capacity")]
    ActivityFull,
}

/// In-memory activity roster. The activity set is fixed at construction;
/// only the participant lists change afterwards. A single directory-wide
/// lock keeps signup/unregister atomic across concurrent requests.
pub struct ActivityDirectory {
    activities: RwLock<BTreeMap<String, Activity>>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    pub fn new(activities: BTreeMap<String, Activity>, enforce_capacity: bool) -> Self {
        Self {
            activities: RwLock::new(activities),
            enforce_capacity,
        }
    }

    /// Clone of the full name -> activity map, including current participants.
    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Appends `email` to the activity's participant list.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        if self.enforce_capacity && activity.participants.len() >= activity.max_participants as usize
        {
            return Err(DirectoryError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's participant list, keeping the
    /// order of the remaining entries.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(())
    }
}
