//! Facility record model and the static dataset store

mod store;
mod types;

pub use store::{LoadReport, RecordStore, StoreError};
pub use types::{
    Activity, EventLabel, FallRisk, Incident, ParseShiftTypeError, Resident, Shift, ShiftType,
};
