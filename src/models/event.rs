use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Hackathon,
    Conference,
    Workshop,
    Meetup,
    Contest,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Hackathon => "hackathon",
            EventType::Conference => "conference",
            EventType::Workshop => "workshop",
            EventType::Meetup => "meetup",
            EventType::Contest => "contest",
        }
    }
}

impl FromStr for EventType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hackathon" => Ok(EventType::Hackathon),
            "conference" => Ok(EventType::Conference),
            "workshop" => Ok(EventType::Workshop),
            "meetup" => Ok(EventType::Meetup),
            "contest" => Ok(EventType::Contest),
            other => Err(UnknownVariant {
                kind: "event type",
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EventType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which bucket an event is shown in. An event is never in both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Completed => "completed",
        }
    }
}

impl FromStr for EventStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(EventStatus::Upcoming),
            "completed" => Ok(EventStatus::Completed),
            other => Err(UnknownVariant {
                kind: "event status",
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EventStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "event_type", try_from = "String")]
    pub kind: EventType,
    #[sqlx(try_from = "String")]
    pub status: EventStatus,
    pub feedback: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn fields(&self) -> EventFields {
        EventFields {
            title: self.title.clone(),
            date: self.date,
            time: self.time.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            kind: self.kind,
            status: self.status,
            feedback: self.feedback.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Everything a client may write. Updates replace all of these at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFields {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub status: EventStatus,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EventFields {
    /// Rejects blank required text and folds an empty feedback into `None`.
    pub fn validated(mut self) -> Result<Self, String> {
        let required = [
            ("title", &self.title),
            ("time", &self.time),
            ("location", &self.location),
            ("description", &self.description),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(format!("Field '{}' is required", name));
        }

        if self.feedback.as_deref().map_or(false, str::is_empty) {
            self.feedback = None;
        }
        Ok(self)
    }
}
