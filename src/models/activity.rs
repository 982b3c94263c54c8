// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model as exchanged with the activities API.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Activity body as it appears on the wire (keyed by name in the collection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails, in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A schedulable offering with a capacity and a roster of registered emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key within a collection
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining capacity. Negative when the server has over-admitted.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    fn details(&self) -> ActivityDetails {
        ActivityDetails {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}

/// Full activity listing, keyed by name on the wire.
///
/// Keeps the order the server sent, so the rendered list and the
/// selection control match the server's ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity, replacing any existing entry with the same name
    /// in place.
    pub fn insert(&mut self, activity: Activity) {
        match self.get_mut(&activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl FromIterator<Activity> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut collection = Self::new();
        for activity in iter {
            collection.insert(activity);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a ActivityCollection {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl Serialize for ActivityCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut collection = ActivityCollection::new();
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    collection.insert(Activity::from_details(name, details));
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
