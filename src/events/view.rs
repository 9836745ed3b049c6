use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    #[default]
    All,
    Upcoming,
    Completed,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Upcoming => event.status == EventStatus::Upcoming,
            EventFilter::Completed => event.status == EventStatus::Completed,
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventFilter::All => "all",
            EventFilter::Upcoming => "upcoming",
            EventFilter::Completed => "completed",
        };
        f.write_str(s)
    }
}

pub fn visible(events: &[Event], filter: EventFilter) -> Vec<Event> {
    events.iter().filter(|e| filter.matches(e)).cloned().collect()
}

/// The two display buckets. Every event lands in exactly one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partitions {
    pub completed: Vec<Event>,
    pub upcoming: Vec<Event>,
}

pub fn partition(events: Vec<Event>) -> Partitions {
    let (completed, upcoming) = events
        .into_iter()
        .partition(|e| e.status == EventStatus::Completed);
    Partitions {
        completed,
        upcoming,
    }
}
