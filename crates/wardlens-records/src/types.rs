//! Facility record types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Free-text event category, e.g. "Fall" or "Bathroom Visit".
///
/// Keeps the string as written in the dataset for display and derives a
/// normalized key (trimmed, lowercased) once at construction, so filters
/// never re-normalize per comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EventLabel {
    display: String,
    key: String,
}

impl EventLabel {
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let key = display.trim().to_lowercase();
        Self { display, key }
    }

    /// The category as written in the dataset.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The normalized comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive match against a query category.
    pub fn matches(&self, label: &str) -> bool {
        self.key == label.trim().to_lowercase()
    }
}

impl From<String> for EventLabel {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for EventLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<EventLabel> for String {
    fn from(label: EventLabel) -> Self {
        label.display
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Categorical fall-risk assessment. Only `High` drives digest logic; every
/// other literal is carried through for display untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FallRisk {
    High,
    Medium,
    Low,
    Other(String),
}

impl From<String> for FallRisk {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => FallRisk::High,
            "Medium" => FallRisk::Medium,
            "Low" => FallRisk::Low,
            _ => FallRisk::Other(value),
        }
    }
}

impl From<FallRisk> for String {
    fn from(risk: FallRisk) -> Self {
        risk.to_string()
    }
}

impl fmt::Display for FallRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallRisk::High => f.write_str("High"),
            FallRisk::Medium => f.write_str("Medium"),
            FallRisk::Low => f.write_str("Low"),
            FallRisk::Other(other) => f.write_str(other),
        }
    }
}

/// The two shift rotations the facility runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    Day,
    Night,
}

impl ShiftType {
    /// The shift that hands over to this one.
    pub fn other(self) -> ShiftType {
        match self {
            ShiftType::Day => ShiftType::Night,
            ShiftType::Night => ShiftType::Day,
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Day => f.write_str("Day"),
            ShiftType::Night => f.write_str("Night"),
        }
    }
}

/// An unknown shift-type literal. This is a caller mistake, not a data
/// anomaly, so it fails fast instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shift type {0:?}, expected \"Day\" or \"Night\"")]
pub struct ParseShiftTypeError(pub String);

impl FromStr for ShiftType {
    type Err = ParseShiftTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(ShiftType::Day),
            "night" => Ok(ShiftType::Night),
            _ => Err(ParseShiftTypeError(s.to_string())),
        }
    }
}

/// A facility resident. Identity is `id`; everything below `fall_risk` is
/// descriptive context for the chat layer and never read by core logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub fall_risk: FallRisk,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
}

/// A discrete adverse event tied to one resident.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub resident_id: String,
    #[serde(rename = "type")]
    pub label: EventLabel,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub witnesses: Vec<String>,
}

/// A routine care event tied to one resident. Same shape as [`Incident`]
/// where aggregation is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub resident_id: String,
    #[serde(rename = "type")]
    pub label: EventLabel,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub staff_id: String,
    #[serde(default)]
    pub outcome: String,
}

/// A staffing shift. `handover_notes` are written at the end of the shift
/// for whoever comes in next.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    #[serde(default)]
    pub staff_on_duty: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub handover_notes: Option<String>,
}
