// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity roster backing the activities server.

use crate::error::AppError;
use crate::models::{Activity, ActivityCollection};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up";
pub const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";

/// Shared, cloneable handle to the roster.
///
/// Capacity is not enforced: the roster accepts signups past
/// `max_participants`, and clients display the negative remainder.
#[derive(Clone, Default)]
pub struct RosterStore {
    activities: Arc<RwLock<ActivityCollection>>,
}

impl RosterStore {
    pub fn new(activities: ActivityCollection) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Roster seeded with the school's extracurricular activities.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of the full collection.
    pub async fn list(&self) -> ActivityCollection {
        self.activities.read().await.clone()
    }

    /// Add `email` to the named activity.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String, AppError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))?;

        if activity.has_participant(email) {
            return Err(AppError::BadRequest(ALREADY_SIGNED_UP.to_string()));
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = %activity_name,
            participants = activity.participants.len(),
            "Participant signed up"
        );

        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Remove `email` from the named activity.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<String, AppError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| AppError::BadRequest(NOT_SIGNED_UP.to_string()))?;

        activity.participants.remove(position);
        tracing::info!(
            activity = %activity_name,
            participants = activity.participants.len(),
            "Participant unregistered"
        );

        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Initial roster, in display order.
pub fn seed_activities() -> ActivityCollection {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Competitive soccer team practicing tactics and fitness",
            "Mondays, Wednesdays, 4:00 PM - 6:00 PM",
            22,
            &["alex@mergington.edu", "maria@mergington.edu"],
        ),
        activity(
            "Track and Field",
            "Running, jumping, and throwing events training",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            25,
            &["liam@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore drawing, painting, and mixed media projects",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["isabella@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Acting workshops and productions for stage performance",
            "Fridays, 4:00 PM - 6:00 PM",
            20,
            &["ava@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Practice public speaking and competitive debating skills",
            "Tuesdays, 5:00 PM - 6:30 PM",
            16,
            &["ethan@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Problem solving, math competitions, and enrichment",
            "Thursdays, 3:30 PM - 4:30 PM",
            25,
            &["sophia@mergington.edu", "oliver@mergington.edu"],
        ),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_nine_activities() {
        let seed = seed_activities();
        assert_eq!(seed.len(), 9);
        assert_eq!(seed.names().next(), Some("Chess Club"));
        assert_eq!(seed.get("Track and Field").unwrap().participants.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_appends_participant() {
        let store = RosterStore::seeded();

        let message = store
            .signup("Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();

        assert_eq!(message, "Signed up newstudent@mergington.edu for Chess Club");
        let chess = store.list().await.get("Chess Club").unwrap().clone();
        assert_eq!(
            chess.participants.last().map(String::as_str),
            Some("newstudent@mergington.edu")
        );
    }

    #[tokio::test]
    async fn test_signup_duplicate_rejected() {
        let store = RosterStore::seeded();

        let err = store
            .signup("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref m) if m == ALREADY_SIGNED_UP));
    }

    #[tokio::test]
    async fn test_unknown_activity_not_found() {
        let store = RosterStore::seeded();

        let err = store.signup("Nonexistent", "a@x.com").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = store.unregister("Nonexistent", "a@x.com").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unregister_removes_only_target() {
        let store = RosterStore::seeded();

        let message = store
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        assert_eq!(message, "Unregistered michael@mergington.edu from Chess Club");
        let chess = store.list().await.get("Chess Club").unwrap().clone();
        assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);
    }

    #[tokio::test]
    async fn test_unregister_not_signed_up() {
        let store = RosterStore::seeded();

        let err = store
            .unregister("Chess Club", "notregistered@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref m) if m == NOT_SIGNED_UP));
    }

    #[tokio::test]
    async fn test_capacity_not_enforced() {
        let store = RosterStore::new(
            vec![activity("Tiny", "t", "Mon", 1, &["a@x.com"])]
                .into_iter()
                .collect(),
        );

        store.signup("Tiny", "b@x.com").await.unwrap();

        assert_eq!(store.list().await.get("Tiny").unwrap().spots_left(), -1);
    }
}
