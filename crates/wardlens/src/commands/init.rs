use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::json;

pub fn run(data: &Path, force: bool) -> anyhow::Result<()> {
    if data.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite",
            data.display()
        );
    }

    let dataset = starter_dataset(Utc::now());
    let pretty =
        serde_json::to_string_pretty(&dataset).context("failed to encode starter dataset")?;
    std::fs::write(data, pretty)
        .with_context(|| format!("failed to write {}", data.display()))?;

    println!("Wrote starter dataset to {}", data.display());
    println!();
    println!("Try:");
    println!("  wardlens ask \"falls chart for res_001\"");
    println!("  wardlens ask \"shift summary\"");
    println!("  wardlens check");
    Ok(())
}

/// A small facility snapshot with every timestamp hung off `now`, so charts
/// and digests have something to show on first run.
fn starter_dataset(now: DateTime<Utc>) -> serde_json::Value {
    let stamp = |hours_back: i64| -> String {
        (now - Duration::hours(hours_back)).to_rfc3339_opts(SecondsFormat::Secs, true)
    };
    let date = |hours_back: i64| -> String {
        (now - Duration::hours(hours_back)).date_naive().to_string()
    };

    json!({
        "residents": [
            {
                "id": "res_001",
                "name": "Eleanor Vance",
                "dob": "1941-03-12",
                "roomNumber": "112",
                "conditions": ["Hypertension", "Osteoporosis"],
                "allergies": ["Penicillin"],
                "fallRisk": "High",
                "notes": "Recovering from hip surgery. Needs assistance with transfers."
            },
            {
                "id": "res_002",
                "name": "Arthur Pendelton",
                "dob": "1938-07-04",
                "roomNumber": "114",
                "conditions": ["Type 2 Diabetes"],
                "allergies": [],
                "fallRisk": "Low",
                "notes": "Independent with walker. Prefers morning showers."
            },
            {
                "id": "res_003",
                "name": "Beatrice Miller",
                "dob": "1945-11-23",
                "roomNumber": "118",
                "conditions": ["Early-stage dementia"],
                "allergies": ["Sulfa drugs"],
                "fallRisk": "Medium",
                "notes": "Prone to evening restlessness."
            },
            {
                "id": "res_004",
                "name": "Harold Finch",
                "dob": "1940-02-17",
                "roomNumber": "121",
                "conditions": ["Parkinson's disease"],
                "allergies": [],
                "fallRisk": "High",
                "notes": "Uses a wheelchair for longer distances."
            }
        ],
        "incidents": [
            {
                "id": "inc_001",
                "residentId": "res_001",
                "type": "Fall",
                "timestamp": stamp(3),
                "location": "Room 112",
                "description": "Found sitting on the floor beside the bed. No visible injury.",
                "witnesses": ["staff_02"]
            },
            {
                "id": "inc_002",
                "residentId": "res_003",
                "type": "Wandering",
                "timestamp": stamp(9),
                "location": "East corridor",
                "description": "Found in the east corridor after midnight, returned to room."
            },
            {
                "id": "inc_003",
                "residentId": "res_001",
                "type": "Fall",
                "timestamp": stamp(52),
                "location": "Room 112",
                "description": "Lost balance in the bathroom doorway."
            },
            {
                "id": "inc_004",
                "residentId": "res_004",
                "type": "Medication Error",
                "timestamp": stamp(5 * 24),
                "location": "Room 121",
                "description": "Morning dose delayed by two hours. Pharmacy notified."
            },
            {
                "id": "inc_005",
                "residentId": "res_001",
                "type": "Fall",
                "timestamp": stamp(9 * 24 + 2),
                "location": "Dining hall",
                "description": "Slipped from chair during lunch."
            },
            {
                "id": "inc_006",
                "residentId": "res_001",
                "type": "Fall",
                "timestamp": stamp(16 * 24 + 5),
                "location": "Room 112",
                "description": "Fell while reaching for the call button."
            },
            {
                "id": "inc_007",
                "residentId": "res_002",
                "type": "Fall",
                "timestamp": stamp(20 * 24),
                "location": "Garden path",
                "description": "Tripped on a paving stone. Walker inspected afterwards."
            }
        ],
        "activities": [
            {
                "id": "act_001",
                "residentId": "res_002",
                "type": "Bathroom Visit",
                "timestamp": stamp(2),
                "staffId": "staff_03",
                "outcome": "No assistance needed"
            },
            {
                "id": "act_002",
                "residentId": "res_002",
                "type": "Bathroom Visit",
                "timestamp": stamp(7),
                "staffId": "staff_03",
                "outcome": ""
            },
            {
                "id": "act_003",
                "residentId": "res_001",
                "type": "Bathroom Visit",
                "timestamp": stamp(30),
                "staffId": "staff_01",
                "outcome": "Assisted transfer"
            },
            {
                "id": "act_004",
                "residentId": "res_002",
                "type": "Bathroom Visit",
                "timestamp": stamp(27),
                "staffId": "staff_01",
                "outcome": ""
            },
            {
                "id": "act_005",
                "residentId": "res_002",
                "type": "Bathroom Visit",
                "timestamp": stamp(8 * 24 + 4),
                "staffId": "staff_02",
                "outcome": ""
            },
            {
                "id": "act_006",
                "residentId": "res_003",
                "type": "Meal",
                "timestamp": stamp(6),
                "staffId": "staff_02",
                "outcome": "Ate most of breakfast"
            }
        ],
        "shifts": [
            {
                "id": "shift_001",
                "date": date(2),
                "type": "Night",
                "staffOnDuty": ["staff_02", "staff_03"],
                "startTime": stamp(14),
                "endTime": stamp(2),
                "handoverNotes": "Quiet night overall. Eleanor Vance found on the floor at 4 AM, vitals stable, monitor for hip pain. Beatrice wandered once and was walked back."
            },
            {
                "id": "shift_002",
                "date": date(14),
                "type": "Day",
                "staffOnDuty": ["staff_01", "staff_04"],
                "startTime": stamp(26),
                "endTime": stamp(14),
                "handoverNotes": "Busy afternoon. Harold's morning medication ran late, pharmacy has been notified."
            },
            {
                "id": "shift_003",
                "date": date(26),
                "type": "Night",
                "staffOnDuty": ["staff_02"],
                "startTime": stamp(38),
                "endTime": stamp(26)
            },
            {
                "id": "shift_004",
                "date": date(38),
                "type": "Day",
                "staffOnDuty": ["staff_01"],
                "startTime": stamp(50),
                "endTime": stamp(38),
                "handoverNotes": "Nothing out of the ordinary."
            }
        ]
    })
}
