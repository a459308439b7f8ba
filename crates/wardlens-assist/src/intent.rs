//! Keyword trigger classification for free-text staff input
//!
//! Handover phrasing is checked before chart phrasing, so "chart me a shift
//! summary" still reads as a handover request. A chart request needs both a
//! resolvable resident reference and a metric keyword; anything short of
//! that falls through to plain conversation.

use std::sync::OnceLock;

use regex::Regex;
use wardlens_records::Resident;

static RESIDENT_ID_RE: OnceLock<Regex> = OnceLock::new();

/// Which chartable metric a prompt asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMetric {
    Falls,
    BathroomVisits,
}

impl ChartMetric {
    /// The event category this metric filters on.
    pub fn event_label(self) -> &'static str {
        match self {
            ChartMetric::Falls => "Fall",
            ChartMetric::BathroomVisits => "Bathroom Visit",
        }
    }

    /// Short label used when narrating the series.
    pub fn display_label(self) -> &'static str {
        match self {
            ChartMetric::Falls => "Falls",
            ChartMetric::BathroomVisits => "Visits",
        }
    }

    /// Full label used in chart titles.
    pub fn title_label(self) -> &'static str {
        match self {
            ChartMetric::Falls => "Falls",
            ChartMetric::BathroomVisits => "Bathroom Visits",
        }
    }
}

/// What a prompt is asking the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Render the shift-handover digest.
    Handover,
    /// Chart a weekly series for one resident.
    Chart {
        resident_id: String,
        metric: ChartMetric,
    },
    /// Plain conversation, no data view attached.
    General,
}

const HANDOVER_KEYWORDS: &[&str] = &["shift summary", "handover"];
const CHART_KEYWORDS: &[&str] = &["graph", "chart", "weekly", "monthly"];

/// Classify a free-text prompt against the known residents.
pub fn classify(text: &str, residents: &[Resident]) -> Intent {
    let lower = text.to_lowercase();

    if HANDOVER_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        return Intent::Handover;
    }

    if CHART_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        if let Some(resident_id) = extract_resident_id(text, residents) {
            if let Some(metric) = extract_metric(&lower) {
                return Intent::Chart {
                    resident_id,
                    metric,
                };
            }
        }
    }

    Intent::General
}

/// Resolve a resident reference in free text. An explicit id pattern wins
/// even when the store has no such resident (unknown ids chart as a zero
/// series); otherwise the first stored resident whose full name appears in
/// the text is used.
pub fn extract_resident_id(text: &str, residents: &[Resident]) -> Option<String> {
    let lower = text.to_lowercase();
    let re = RESIDENT_ID_RE.get_or_init(|| Regex::new(r"res_[0-9]+").unwrap());
    if let Some(found) = re.find(&lower) {
        return Some(found.as_str().to_string());
    }
    residents
        .iter()
        .find(|resident| lower.contains(&resident.name.to_lowercase()))
        .map(|resident| resident.id.clone())
}

fn extract_metric(lower: &str) -> Option<ChartMetric> {
    if lower.contains("falls") {
        Some(ChartMetric::Falls)
    } else if lower.contains("bathroom") || lower.contains("visits") {
        Some(ChartMetric::BathroomVisits)
    } else {
        None
    }
}
