//! Weekly aggregation over resident events

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use wardlens_records::{Activity, EventLabel, Incident};

use crate::week::{self, WeekBucket};

/// Anything timestamped, categorized, and owned by a resident can be
/// charted. Incidents and activities are the two record kinds today.
pub trait SubjectEvent {
    fn resident_id(&self) -> &str;
    fn label(&self) -> &EventLabel;
    fn occurred_at(&self) -> DateTime<Utc>;
}

impl SubjectEvent for Incident {
    fn resident_id(&self) -> &str {
        &self.resident_id
    }

    fn label(&self) -> &EventLabel {
        &self.label
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl SubjectEvent for Activity {
    fn resident_id(&self) -> &str {
        &self.resident_id
    }

    fn label(&self) -> &EventLabel {
        &self.label
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Invalid aggregation parameters. These are contract violations by the
/// caller, never data problems.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("lookback must be a positive number of days within calendar range, got {0}")]
    InvalidLookback(i64),
}

/// Events for one resident and one category within an inclusive day range.
///
/// Matching is at day granularity: an event counts when its calendar date
/// falls inside `[range_start, range_end]`, whatever its time of day.
/// Category comparison is case-insensitive. An unknown resident matches
/// nothing. Input order is preserved.
pub fn filter_events<'a, E: SubjectEvent>(
    events: &'a [E],
    resident_id: &str,
    type_label: &str,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<&'a E> {
    events
        .iter()
        .filter(|event| {
            event.resident_id() == resident_id
                && event.label().matches(type_label)
                && in_day_range(event.occurred_at(), range_start, range_end)
        })
        .collect()
}

fn in_day_range(at: DateTime<Utc>, start: NaiveDate, end: NaiveDate) -> bool {
    let day = at.date_naive();
    day >= start && day <= end
}

/// Bucket events into the ISO weeks covering `[range_start, range_end]`.
///
/// Every intersecting week is present even when nothing landed in it, so a
/// chart never shows gaps. Events bucketing outside the covered weeks are
/// ignored. Buckets come back in ascending week order.
pub fn aggregate_by_week<E: SubjectEvent>(
    events: &[&E],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<NaiveDate, WeekBucket> =
        week::empty_buckets(range_start, range_end)
            .into_iter()
            .map(|bucket| (bucket.start_date, bucket))
            .collect();

    for event in events {
        let monday = week::week_start(event.occurred_at().date_naive());
        if let Some(bucket) = buckets.get_mut(&monday) {
            bucket.count += 1;
        }
    }

    buckets.into_values().collect()
}

/// The chart entry point: the trailing `lookback_days` days of one category
/// for one resident, bucketed by ISO week. `today` is the inclusive end of
/// the range, so a 30-day lookback starts 29 days before it. A lookback
/// that is non-positive or walks off the calendar is a contract violation.
pub fn weekly_series<E: SubjectEvent>(
    events: &[E],
    resident_id: &str,
    type_label: &str,
    lookback_days: i64,
    today: NaiveDate,
) -> Result<Vec<WeekBucket>, AggregateError> {
    if lookback_days <= 0 {
        return Err(AggregateError::InvalidLookback(lookback_days));
    }
    let range_start = Duration::try_days(lookback_days - 1)
        .and_then(|span| today.checked_sub_signed(span))
        .ok_or(AggregateError::InvalidLookback(lookback_days))?;
    let matched = filter_events(events, resident_id, type_label, range_start, today);
    Ok(aggregate_by_week(&matched, range_start, today))
}
