//! ISO week arithmetic for chart bucketing

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// One ISO calendar week (Monday through Sunday) with its event count.
///
/// `start_date` and `end_date` are both inclusive. Field names serialize in
/// the shape the chat layer embeds into completion requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    pub week_label: String,
    pub count: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Chart label for the week starting at `start`, e.g. "Apr 21-27".
///
/// A week spanning a month boundary keeps the bare day-of-month for its
/// Sunday ("Apr 29-5"), exactly as the charts have always rendered it.
pub fn week_label(start: NaiveDate) -> String {
    let end = start + Duration::days(6);
    format!("{} {}-{}", start.format("%b"), start.day(), end.day())
}

/// Zero-count buckets for every ISO week touching `[range_start, range_end]`,
/// in ascending order. The first bucket may start before `range_start`.
pub fn empty_buckets(range_start: NaiveDate, range_end: NaiveDate) -> Vec<WeekBucket> {
    let mut buckets = Vec::new();
    let mut current = week_start(range_start);
    while current <= range_end {
        buckets.push(WeekBucket {
            week_label: week_label(current),
            count: 0,
            start_date: current,
            end_date: current + Duration::days(6),
        });
        current = current + Duration::days(7);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_snaps_to_monday() {
        // 2025-04-23 is a Wednesday
        assert_eq!(week_start(date(2025, 4, 23)), date(2025, 4, 21));
        assert_eq!(week_start(date(2025, 4, 21)), date(2025, 4, 21));
        assert_eq!(week_start(date(2025, 4, 27)), date(2025, 4, 21));
    }

    #[test]
    fn test_week_label_within_one_month() {
        assert_eq!(week_label(date(2025, 4, 21)), "Apr 21-27");
    }

    #[test]
    fn test_week_label_keeps_bare_day_across_month_boundary() {
        // 2024-04-29 is a Monday; its Sunday is May 5
        assert_eq!(week_label(date(2024, 4, 29)), "Apr 29-5");
    }

    #[test]
    fn test_empty_buckets_cover_range_without_gaps() {
        let buckets = empty_buckets(date(2025, 4, 2), date(2025, 4, 23));
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].start_date, date(2025, 3, 31));
        for pair in buckets.windows(2) {
            assert_eq!(pair[1].start_date, pair[0].end_date + Duration::days(1));
        }
        assert!(buckets.iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn test_empty_buckets_single_week_range() {
        let buckets = empty_buckets(date(2025, 4, 22), date(2025, 4, 24));
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].week_label, "Apr 21-27");
    }

    #[test]
    fn test_bucket_serializes_with_wire_field_names() {
        let bucket = WeekBucket {
            week_label: "Apr 21-27".to_string(),
            count: 3,
            start_date: date(2025, 4, 21),
            end_date: date(2025, 4, 27),
        };
        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(json["weekLabel"], "Apr 21-27");
        assert_eq!(json["count"], 3);
        assert_eq!(json["startDate"], "2025-04-21");
        assert_eq!(json["endDate"], "2025-04-27");
    }
}
