pub mod ask;
pub mod chart;
pub mod check;
pub mod handover;
pub mod init;

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local, Timelike, Utc};
use wardlens_records::RecordStore;

/// Load the dataset, logging whatever the loader had to skip.
pub(crate) fn load_store(path: &Path) -> anyhow::Result<RecordStore> {
    let (store, report) = RecordStore::load(path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    for skipped in &report.skipped {
        tracing::warn!("skipped record: {}", skipped);
    }
    tracing::debug!(
        residents = report.residents,
        incidents = report.incidents,
        activities = report.activities,
        shifts = report.shifts,
        "dataset loaded"
    );
    Ok(store)
}

/// The reference instant plus the wall-clock hour used for shift detection.
/// `--now` pins both; otherwise the instant is UTC now and the hour comes
/// from the local clock.
pub(crate) fn resolve_now(flag: Option<&str>) -> anyhow::Result<(DateTime<Utc>, u32)> {
    match flag {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("--now must be RFC 3339, got {:?}", raw))?;
            Ok((parsed.with_timezone(&Utc), parsed.hour()))
        }
        None => Ok((Utc::now(), Local::now().hour())),
    }
}
