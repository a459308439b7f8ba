use std::path::Path;

use chrono::{DateTime, Utc};
use wardlens_assist::{
    AssistConfig, ChatMessage, CompletionClient, Intent, OfflineClient,
};
use wardlens_records::RecordStore;

use crate::render;

/// What one prompt produced: an optional rendered data view plus the
/// completion request that goes with it.
pub(crate) struct AskResponse {
    pub view: Option<String>,
    pub messages: Vec<ChatMessage>,
}

pub fn run(data: &Path, config_path: &Path, text: &str, now: Option<&str>) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("ask needs a question, e.g. `wardlens ask \"falls chart for res_001\"`");
    }

    let store = super::load_store(data)?;
    let config = AssistConfig::load(config_path);
    let (reference, hour) = super::resolve_now(now)?;

    let response = build_response(&store, &config, text, reference, hour)?;
    if let Some(view) = &response.view {
        println!("{}", view);
    }

    tracing::debug!(
        tokens = wardlens_assist::estimate_tokens(&response.messages),
        "assembled completion request"
    );

    // A completion failure is a reply, not a crash; the views above have
    // already been shown.
    match OfflineClient.complete(&response.messages) {
        Ok(reply) => println!("{}", reply),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

/// Classify the prompt, derive whatever view it asks for, and assemble the
/// completion request.
pub(crate) fn build_response(
    store: &RecordStore,
    config: &AssistConfig,
    text: &str,
    reference: DateTime<Utc>,
    hour: u32,
) -> anyhow::Result<AskResponse> {
    let intent = wardlens_assist::classify(text, &store.residents);
    tracing::debug!(?intent, "classified prompt");

    match intent {
        Intent::Handover => {
            let shift = config.shift_at(hour);
            let digest = wardlens_core::build_digest(
                &store.residents,
                &store.incidents,
                &store.shifts,
                shift,
                reference,
                config.digest_lookback_hours,
            )?;
            Ok(AskResponse {
                view: Some(render::render_digest(&digest)),
                messages: wardlens_assist::handover_messages(text, &digest),
            })
        }
        Intent::Chart {
            resident_id,
            metric,
        } => {
            let days = config.chart_lookback_days;
            let series = super::chart::series_for(store, &resident_id, metric, days, reference)?;
            let title = super::chart::title_for(metric, days, &resident_id);
            Ok(AskResponse {
                view: Some(render::render_series(&title, &series)),
                messages: wardlens_assist::chart_messages(text, &resident_id, metric, &series),
            })
        }
        Intent::General => {
            let history = [ChatMessage::user(text)];
            Ok(AskResponse {
                view: None,
                messages: wardlens_assist::general_messages(&history, store),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wardlens_assist::Role;

    fn store() -> RecordStore {
        let raw = r#"{
            "residents": [
                {"id": "res_001", "name": "Eleanor Vance", "fallRisk": "High"},
                {"id": "res_002", "name": "Arthur Pendelton", "fallRisk": "Low"}
            ],
            "incidents": [
                {"id": "inc_001", "residentId": "res_001", "type": "Fall",
                 "timestamp": "2025-04-22T03:15:00Z",
                 "description": "Found on floor next to bed."}
            ],
            "shifts": [
                {"id": "shift_103", "date": "2025-04-22", "type": "Night",
                 "startTime": "2025-04-21T19:00:00Z", "endTime": "2025-04-22T06:00:00Z",
                 "handoverNotes": "Eleanor reported dizziness at 3 AM."}
            ]
        }"#;
        let (store, _) = RecordStore::from_json(raw).unwrap();
        store
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 22, 7, 0, 0).unwrap()
    }

    #[test]
    fn test_handover_prompt_renders_digest_view() {
        let response = build_response(
            &store(),
            &AssistConfig::default(),
            "give me the shift summary",
            reference(),
            7,
        )
        .unwrap();
        let view = response.view.unwrap();
        assert!(view.contains("Eleanor reported dizziness at 3 AM."));
        assert!(view.contains("- Fall - Eleanor Vance"));
        assert!(response.messages[2].content.contains("Previous Handover: Provided"));
    }

    #[test]
    fn test_chart_prompt_renders_series_view() {
        let response = build_response(
            &store(),
            &AssistConfig::default(),
            "show me a falls graph for res_001",
            reference(),
            7,
        )
        .unwrap();
        let view = response.view.unwrap();
        assert!(view.starts_with("Weekly Falls - Last 30 Days (res_001)"));
        assert!(response.messages[2].content.contains("\"weekLabel\""));
    }

    #[test]
    fn test_general_prompt_has_no_view_and_full_context() {
        let response = build_response(
            &store(),
            &AssistConfig::default(),
            "what allergies does Eleanor Vance have?",
            reference(),
            7,
        )
        .unwrap();
        assert!(response.view.is_none());
        assert_eq!(response.messages[0].role, Role::System);
        assert!(response.messages[0].content.contains("```json"));
    }

    #[test]
    fn test_offline_reply_echoes_chart_context() {
        let response = build_response(
            &store(),
            &AssistConfig::default(),
            "weekly falls chart for Eleanor Vance",
            reference(),
            7,
        )
        .unwrap();
        let reply = OfflineClient.complete(&response.messages).unwrap();
        assert!(reply.contains("graph of Falls for res_001"));
    }

    #[test]
    fn test_night_hour_digest_pulls_day_notes() {
        // At 20:00 the incoming shift is Night, whose handover comes from Day.
        // The fixture has no concluded day shift, so notes are absent.
        let response = build_response(
            &store(),
            &AssistConfig::default(),
            "handover please",
            reference(),
            20,
        )
        .unwrap();
        let view = response.view.unwrap();
        assert!(view.contains("No handover notes available."));
    }
}
