//! Static dataset loading
//!
//! The dataset is a single JSON document holding one array per record kind.
//! The envelope must parse; individual records are decoded one at a time so
//! a malformed record is skipped and reported instead of poisoning the rest
//! of its collection.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Activity, Incident, Resident, Shift};

/// A dataset that cannot be loaded at all.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The in-memory facility dataset. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStore {
    pub residents: Vec<Resident>,
    pub incidents: Vec<Incident>,
    pub activities: Vec<Activity>,
    pub shifts: Vec<Shift>,
}

/// What a load kept and what it had to skip.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub residents: usize,
    pub incidents: usize,
    pub activities: usize,
    pub shifts: usize,
    /// One line per skipped record, e.g. `incidents[3] (inc_004): ...`.
    pub skipped: Vec<String>,
}

impl LoadReport {
    pub fn total_loaded(&self) -> usize {
        self.residents + self.incidents + self.activities + self.shifts
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    residents: Vec<Value>,
    #[serde(default)]
    incidents: Vec<Value>,
    #[serde(default)]
    activities: Vec<Value>,
    #[serde(default)]
    shifts: Vec<Value>,
}

impl RecordStore {
    /// Read and decode a dataset file.
    pub fn load(path: &Path) -> Result<(Self, LoadReport), StoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Decode a dataset from a JSON string.
    pub fn from_json(raw: &str) -> Result<(Self, LoadReport), StoreError> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        let mut report = LoadReport::default();

        let residents = decode_records(envelope.residents, "residents", &mut report.skipped);
        let incidents = decode_records(envelope.incidents, "incidents", &mut report.skipped);
        let activities = decode_records(envelope.activities, "activities", &mut report.skipped);
        let shifts = validate_shifts(
            decode_records(envelope.shifts, "shifts", &mut report.skipped),
            &mut report.skipped,
        );

        report.residents = residents.len();
        report.incidents = incidents.len();
        report.activities = activities.len();
        report.shifts = shifts.len();

        let store = Self {
            residents,
            incidents,
            activities,
            shifts,
        };
        Ok((store, report))
    }

    /// Look up a resident by id.
    pub fn resident(&self, id: &str) -> Option<&Resident> {
        self.residents.iter().find(|resident| resident.id == id)
    }
}

/// Decode one collection element by element, recording failures.
fn decode_records<T: DeserializeOwned>(
    raw: Vec<Value>,
    collection: &str,
    skipped: &mut Vec<String>,
) -> Vec<T> {
    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string();
        match serde_json::from_value(value) {
            Ok(record) => records.push(record),
            Err(err) => skipped.push(format!("{}[{}] ({}): {}", collection, index, id, err)),
        }
    }
    records
}

/// A shift must end after it starts; one that does not could win the
/// previous-shift lookup with a bogus end time, so it is skipped like any
/// other malformed record.
fn validate_shifts(shifts: Vec<Shift>, skipped: &mut Vec<String>) -> Vec<Shift> {
    shifts
        .into_iter()
        .filter(|shift| {
            if shift.end_time > shift.start_time {
                true
            } else {
                skipped.push(format!(
                    "shifts ({}): endTime {} does not follow startTime {}",
                    shift.id, shift.end_time, shift.start_time
                ));
                false
            }
        })
        .collect()
}
