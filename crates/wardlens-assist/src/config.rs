//! Host configuration
//!
//! Config is optional tuning, never a gate: a missing file, unreadable
//! file, or broken JSON all fall back to defaults, and fields default
//! independently so a partial file only overrides what it names.

use std::path::Path;

use serde::Deserialize;
use wardlens_records::ShiftType;

/// Tunable host settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistConfig {
    /// Days of history behind a weekly chart, inclusive of today.
    pub chart_lookback_days: i64,
    /// Hours of incident history behind a handover digest.
    pub digest_lookback_hours: i64,
    /// First hour of day (inclusive) staffed by the Day shift.
    pub day_start_hour: u32,
    /// Hour at which the Day shift ends (exclusive).
    pub day_end_hour: u32,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            chart_lookback_days: 30,
            digest_lookback_hours: wardlens_core::DEFAULT_LOOKBACK_HOURS,
            day_start_hour: 7,
            day_end_hour: 19,
        }
    }
}

impl AssistConfig {
    /// Load settings from a JSON file, falling back to defaults on any
    /// problem.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        serde_json::from_str::<Self>(&content)
            .map(Self::sanitize)
            .unwrap_or_default()
    }

    /// Shift hours outside the clock would misclassify every hour, so an
    /// out-of-range pair reverts to the default day range. The two fields
    /// describe one range and revert together.
    fn sanitize(mut self) -> Self {
        if self.day_start_hour > 23 || self.day_end_hour > 24 {
            let defaults = Self::default();
            self.day_start_hour = defaults.day_start_hour;
            self.day_end_hour = defaults.day_end_hour;
        }
        self
    }

    /// Which shift is on duty at a given wall-clock hour.
    pub fn shift_at(&self, hour: u32) -> ShiftType {
        if hour >= self.day_start_hour && hour < self.day_end_hour {
            ShiftType::Day
        } else {
            ShiftType::Night
        }
    }
}
