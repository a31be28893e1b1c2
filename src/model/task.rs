use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Task priority, stored on disk as its ordinal (Low=0, Medium=1, High=2)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// The `!keyword` marker that selects this priority in task text
    pub fn marker(self) -> &'static str {
        match self {
            Priority::Low => "!low",
            Priority::Medium => "!med",
            Priority::High => "!high",
        }
    }

    /// Single-character glyph used by `list` output
    pub fn glyph(self) -> char {
        match self {
            Priority::Low => '.',
            Priority::Medium => ' ',
            Priority::High => '!',
        }
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        match p {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::High),
            other => Err(format!("invalid priority ordinal {}", other)),
        }
    }
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier; empty until the store assigns one
    #[serde(default)]
    pub id: String,
    /// Display text with metadata markers stripped
    pub title: String,
    /// Free text (not produced by the parser)
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    /// Creation time with the offset it was recorded in; kept verbatim on save
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub priority: Priority,
    /// Reserved; no parsing rule populates it
    #[serde(default, with = "empty_as_none")]
    pub project: Option<String>,
    /// Reserved; no parsing rule populates it
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contexts: Vec<String>,
    /// First `@token` from the input text, without the `@`
    #[serde(default, with = "empty_as_none")]
    pub category: Option<String>,
}

impl Task {
    /// Create a pending, medium-priority task stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: String::new(),
            title: title.into(),
            description: String::new(),
            done: false,
            created_at: Local::now().fixed_offset(),
            priority: Priority::Medium,
            project: None,
            contexts: Vec::new(),
            category: None,
        }
    }

    /// Calendar day the task was created on, in its recorded offset
    pub fn created_day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Saved files use `""` for "no value"; map that to `None` and back.
mod empty_as_none {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<Vec<String>> = Option::deserialize(d)?;
    Ok(raw.unwrap_or_default())
}
