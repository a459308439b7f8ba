use std::path::Path;

use wardlens_assist::AssistConfig;
use wardlens_records::ShiftType;

use crate::render;

pub fn run(
    data: &Path,
    config_path: &Path,
    shift: Option<&str>,
    hours: Option<i64>,
    now: Option<&str>,
) -> anyhow::Result<()> {
    let store = super::load_store(data)?;
    let config = AssistConfig::load(config_path);
    let (reference, hour) = super::resolve_now(now)?;

    let shift = match shift {
        Some(raw) => raw.parse::<ShiftType>()?,
        None => config.shift_at(hour),
    };
    let hours = hours.unwrap_or(config.digest_lookback_hours);

    let digest = wardlens_core::build_digest(
        &store.residents,
        &store.incidents,
        &store.shifts,
        shift,
        reference,
        hours,
    )?;

    println!("Incoming shift: {} (handover from {})", shift, shift.other());
    println!();
    println!("{}", render::render_digest(&digest));
    Ok(())
}
