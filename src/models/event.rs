use super::color::EventColor;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timed calendar event.
///
/// Serialized as camelCase JSON (`startTime`, `endTime`) so the stored
/// payload stays readable and stable across versions. Times carry minute
/// granularity and no timezone; the date is a plain local calendar day.
///
/// `start < end` is expected but deliberately not enforced: the store keeps
/// whatever the user typed, and the grid renders degenerate durations at the
/// minimum visible height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub color: EventColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CalendarEvent {
    /// Build a persistable event from user-supplied fields, assigning a
    /// fresh opaque id.
    pub fn new(fields: NewEvent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            date: fields.date,
            start_time: fields.start_time,
            end_time: fields.end_time,
            color: fields.color,
            comment: fields.comment,
        }
    }

    /// Canonical `YYYY-MM-DD` key of the event's day.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    /// Apply a partial update in place. `None` fields are left untouched.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start) = patch.start_time {
            self.start_time = start;
        }
        if let Some(end) = patch.end_time {
            self.end_time = end;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(comment) = patch.comment {
            self.comment = Some(comment);
        }
    }
}

/// Fields for a new event, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub color: EventColor,
    pub comment: Option<String>,
}

/// A partial update: only `Some` fields are merged into the target event.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub color: Option<EventColor>,
    pub comment: Option<String>,
}

/// Serde helpers for the `HH:MM` wire format (chrono's default carries
/// seconds, which the stored payload never has).
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(de::Error::custom)
    }
}
