//! Shift-handover digest derivation

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use wardlens_records::{FallRisk, Incident, Resident, Shift, ShiftType};

/// Hours of incident history a digest covers when nothing else is asked for.
pub const DEFAULT_LOOKBACK_HOURS: i64 = 12;

/// Invalid digest parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    #[error("lookback must be a positive number of hours within calendar range, got {0}")]
    InvalidLookback(i64),
}

/// A recent incident with its resident resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentSummary {
    pub id: String,
    pub resident_id: String,
    /// `None` when the incident references a resident with no record.
    pub resident_name: Option<String>,
    #[serde(rename = "type")]
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl IncidentSummary {
    /// Name to show for this incident's resident, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.resident_name.as_deref().unwrap_or(&self.resident_id)
    }
}

/// Why a resident made the watch list. Each resident carries exactly one
/// reason; high fall risk always wins over incident history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchReason {
    HighFallRisk,
    RecentIncident(String),
}

impl fmt::Display for WatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchReason::HighFallRisk => f.write_str("High Fall Risk"),
            WatchReason::RecentIncident(label) => write!(f, "Recent Incident ({})", label),
        }
    }
}

impl Serialize for WatchReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One watch-list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchEntry {
    #[serde(rename = "id")]
    pub resident_id: String,
    pub name: String,
    pub reason: WatchReason,
}

/// Everything the incoming shift should know at a glance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDigest {
    pub previous_shift_notes: Option<String>,
    pub recent_incidents: Vec<IncidentSummary>,
    pub residents_to_watch: Vec<WatchEntry>,
}

impl ShiftDigest {
    /// Whether the previous shift left anything worth reading. A shift that
    /// recorded an empty string counts as having left nothing.
    pub fn has_handover_notes(&self) -> bool {
        self.previous_shift_notes
            .as_deref()
            .is_some_and(|notes| !notes.is_empty())
    }
}

/// Derive the handover digest for staff starting a `target_shift` at
/// `reference_time`.
///
/// The incident window is `[reference_time - lookback_hours, reference_time]`
/// with both ends inclusive. It is anchored to the reference time, not to the
/// previous shift's actual boundaries, so a digest built mid-shift already
/// includes what happened since the last handover.
pub fn build_digest(
    residents: &[Resident],
    incidents: &[Incident],
    shifts: &[Shift],
    target_shift: ShiftType,
    reference_time: DateTime<Utc>,
    lookback_hours: i64,
) -> Result<ShiftDigest, DigestError> {
    if lookback_hours <= 0 {
        return Err(DigestError::InvalidLookback(lookback_hours));
    }

    let previous_shift_notes =
        previous_shift_notes(shifts, target_shift.other(), reference_time);

    let window_start = Duration::try_hours(lookback_hours)
        .and_then(|span| reference_time.checked_sub_signed(span))
        .ok_or(DigestError::InvalidLookback(lookback_hours))?;
    let in_window: Vec<&Incident> = incidents
        .iter()
        .filter(|incident| {
            incident.timestamp >= window_start && incident.timestamp <= reference_time
        })
        .collect();

    let names: HashMap<&str, &str> = residents
        .iter()
        .map(|resident| (resident.id.as_str(), resident.name.as_str()))
        .collect();

    let mut recent_incidents: Vec<IncidentSummary> = in_window
        .iter()
        .map(|incident| IncidentSummary {
            id: incident.id.clone(),
            resident_id: incident.resident_id.clone(),
            resident_name: names
                .get(incident.resident_id.as_str())
                .map(|name| (*name).to_string()),
            label: incident.label.display().to_string(),
            timestamp: incident.timestamp,
            description: incident.description.clone(),
        })
        .collect();
    recent_incidents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let residents_to_watch = watch_list(residents, &in_window, &names);

    Ok(ShiftDigest {
        previous_shift_notes,
        recent_incidents,
        residents_to_watch,
    })
}

/// Handover notes from the most recently concluded shift of `shift_type`.
/// Only shifts that ended strictly before `before` qualify.
fn previous_shift_notes(
    shifts: &[Shift],
    shift_type: ShiftType,
    before: DateTime<Utc>,
) -> Option<String> {
    shifts
        .iter()
        .filter(|shift| shift.shift_type == shift_type && shift.end_time < before)
        .max_by_key(|shift| shift.end_time)
        .and_then(|shift| shift.handover_notes.clone())
}

/// Two-pass watch list, first reason wins: high fall risk in dataset order,
/// then residents of in-window incidents in their unsorted dataset order.
/// The result is sorted by resident name.
fn watch_list(
    residents: &[Resident],
    in_window: &[&Incident],
    names: &HashMap<&str, &str>,
) -> Vec<WatchEntry> {
    let mut by_resident: HashMap<String, WatchEntry> = HashMap::new();

    for resident in residents {
        if resident.fall_risk == FallRisk::High {
            by_resident
                .entry(resident.id.clone())
                .or_insert_with(|| WatchEntry {
                    resident_id: resident.id.clone(),
                    name: resident.name.clone(),
                    reason: WatchReason::HighFallRisk,
                });
        }
    }

    for incident in in_window {
        by_resident
            .entry(incident.resident_id.clone())
            .or_insert_with(|| WatchEntry {
                resident_id: incident.resident_id.clone(),
                name: names
                    .get(incident.resident_id.as_str())
                    .map(|name| (*name).to_string())
                    .unwrap_or_else(|| incident.resident_id.clone()),
                reason: WatchReason::RecentIncident(incident.label.display().to_string()),
            });
    }

    let mut entries: Vec<WatchEntry> = by_resident.into_values().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
