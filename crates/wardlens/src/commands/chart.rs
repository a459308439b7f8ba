use std::path::Path;

use chrono::{DateTime, Utc};
use wardlens_assist::{AssistConfig, ChartMetric};
use wardlens_core::WeekBucket;
use wardlens_records::RecordStore;

use crate::render;

pub fn run(
    data: &Path,
    config_path: &Path,
    resident: &str,
    metric: ChartMetric,
    days: Option<i64>,
    now: Option<&str>,
) -> anyhow::Result<()> {
    let store = super::load_store(data)?;
    let config = AssistConfig::load(config_path);
    let (reference, _) = super::resolve_now(now)?;
    let days = days.unwrap_or(config.chart_lookback_days);

    let series = series_for(&store, resident, metric, days, reference)?;
    println!("{}", render::render_series(&title_for(metric, days, resident), &series));
    Ok(())
}

/// Pick the record collection a metric counts over and aggregate it.
pub(crate) fn series_for(
    store: &RecordStore,
    resident_id: &str,
    metric: ChartMetric,
    days: i64,
    reference: DateTime<Utc>,
) -> anyhow::Result<Vec<WeekBucket>> {
    let today = reference.date_naive();
    let series = match metric {
        ChartMetric::Falls => wardlens_core::weekly_series(
            &store.incidents,
            resident_id,
            metric.event_label(),
            days,
            today,
        ),
        ChartMetric::BathroomVisits => wardlens_core::weekly_series(
            &store.activities,
            resident_id,
            metric.event_label(),
            days,
            today,
        ),
    }?;
    Ok(series)
}

pub(crate) fn title_for(metric: ChartMetric, days: i64, resident_id: &str) -> String {
    format!(
        "Weekly {} - Last {} Days ({})",
        metric.title_label(),
        days,
        resident_id
    )
}
