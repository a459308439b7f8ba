//! Terminal rendering of chart series and handover digests

use std::fmt::Write;

use wardlens_core::{ShiftDigest, WeekBucket};

const BAR_WIDTH: usize = 40;

/// Bar chart as fixed-width text, one row per ISO week. An empty series
/// renders the standard placeholder under the title.
pub fn render_series(title: &str, series: &[WeekBucket]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    if series.is_empty() {
        let _ = writeln!(out, "No data available for this period.");
        return out;
    }

    let label_width = series
        .iter()
        .map(|bucket| bucket.week_label.len())
        .max()
        .unwrap_or(0);
    let max_count = series.iter().map(|bucket| bucket.count).max().unwrap_or(0);

    for bucket in series {
        let bar_len = if max_count == 0 {
            0
        } else {
            bucket.count * BAR_WIDTH / max_count
        };
        let _ = writeln!(
            out,
            "{:<label_width$}  {:<BAR_WIDTH$}  {}",
            bucket.week_label,
            "#".repeat(bar_len),
            bucket.count,
        );
    }
    out
}

/// The three handover sections. Each empty section renders its fixed
/// placeholder line; notes that exist but are empty count as missing.
pub fn render_digest(digest: &ShiftDigest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Shift Summary");
    let _ = writeln!(out, "=============");

    let _ = writeln!(out, "\nPrevious Shift Handover");
    let _ = writeln!(out, "-----------------------");
    match digest.previous_shift_notes.as_deref() {
        Some(notes) if !notes.is_empty() => {
            let _ = writeln!(out, "{}", notes);
        }
        _ => {
            let _ = writeln!(out, "No handover notes available.");
        }
    }

    let _ = writeln!(out, "\nRecent Incidents");
    let _ = writeln!(out, "----------------");
    if digest.recent_incidents.is_empty() {
        let _ = writeln!(out, "No significant incidents noted recently.");
    } else {
        for incident in &digest.recent_incidents {
            let _ = writeln!(
                out,
                "- {} - {} ({})",
                incident.label,
                incident.display_name(),
                incident.timestamp.format("%-I:%M %p"),
            );
            if !incident.description.is_empty() {
                let _ = writeln!(out, "  {}", incident.description);
            }
        }
    }

    let _ = writeln!(out, "\nResidents to Watch");
    let _ = writeln!(out, "------------------");
    if digest.residents_to_watch.is_empty() {
        let _ = writeln!(out, "No specific residents flagged for close observation.");
    } else {
        for entry in &digest.residents_to_watch {
            let _ = writeln!(out, "- {} ({})", entry.name, entry.resident_id);
            let _ = writeln!(out, "  Reason: {}", entry.reason);
        }
    }

    out
}
