//! Pure aggregation and digest derivation over facility records
//!
//! Nothing in this crate reads a clock or touches IO. Callers pass the
//! reference date or instant explicitly, which keeps every function
//! deterministic and directly testable.

mod aggregate;
mod digest;
mod week;

pub use aggregate::{
    aggregate_by_week, filter_events, weekly_series, AggregateError, SubjectEvent,
};
pub use digest::{
    build_digest, DigestError, IncidentSummary, ShiftDigest, WatchEntry, WatchReason,
    DEFAULT_LOOKBACK_HOURS,
};
pub use week::{week_label, week_start, WeekBucket};
