// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendering an activity collection into page elements.

use super::page::{
    ActivitiesList, ActivityCard, Page, ParticipantList, ParticipantRow, UnregisterControl,
};
use crate::models::{Activity, ActivityCollection};

/// Build the detail card for one activity.
pub fn render_card(activity: &Activity) -> ActivityCard {
    let participants = if activity.participants.is_empty() {
        ParticipantList::Placeholder
    } else {
        ParticipantList::Rows(
            activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    email: email.clone(),
                    unregister: UnregisterControl {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    },
                })
                .collect(),
        )
    };

    ActivityCard {
        name: activity.name.clone(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants,
    }
}

/// Replace the detail list and the selection control from a fresh collection.
pub fn render_activities(page: &mut Page, activities: &ActivityCollection) {
    page.activities_list = ActivitiesList::Cards(activities.iter().map(render_card).collect());
    page.activity_select.replace_options(activities.names());
}

/// Replace the detail list with the load-failure notice.
///
/// The selection control keeps whatever it showed before.
pub fn render_load_failure(page: &mut Page) {
    page.activities_list = ActivitiesList::LoadFailed;
}
