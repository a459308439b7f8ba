//! Role-tagged message assembly for the completion boundary
//!
//! Every request shares one persona prompt. Chart and handover requests get
//! a tailored context message carrying the derived view, so the completion
//! service narrates numbers the host has already computed instead of
//! recomputing them. Plain conversation gets the whole dataset embedded as
//! JSON and nothing else.

use serde::{Deserialize, Serialize};
use wardlens_core::{ShiftDigest, WeekBucket};
use wardlens_records::RecordStore;

use crate::intent::ChartMetric;

/// Message author role, wire-compatible with chat completion APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

const SYSTEM_PROMPT_BASE: &str = "\
You are Wardlens, an assistant for nurses at a senior living facility. \
Nurses are busy, so keep answers specific and concise, in a professional \
and pleasant tone.

You work from the facility's record system, which holds:
- Residents: id, name, dob, roomNumber, conditions, allergies, fallRisk, notes
- Incidents: id, residentId, type, timestamp, location, description, witnesses
- Activities: id, residentId, type, timestamp, staffId, outcome
- Shifts: id, date, type, staffOnDuty, startTime, endTime, handoverNotes

When the nurse asks for a graph or a shift summary, the terminal renders it \
directly; your job is to describe what the rendered data shows. Never invent \
records that are not in the data you were given.";

/// The persona and data-contract prompt shared by every request.
pub fn system_prompt_base() -> &'static str {
    SYSTEM_PROMPT_BASE
}

/// Base prompt plus the entire dataset as a JSON block. This is the
/// everything-in-context fallback for plain conversation.
pub fn full_system_prompt(store: &RecordStore) -> String {
    let data = serde_json::to_string_pretty(store).unwrap_or_else(|_| "{}".to_string());
    format!(
        "{}\n\nHere is the current facility data:\n```json\n{}\n```",
        SYSTEM_PROMPT_BASE, data
    )
}

/// Messages for a handover request. The digest itself is rendered by the
/// host; the model sees whether notes exist and how much was found.
pub fn handover_messages(user_text: &str, digest: &ShiftDigest) -> Vec<ChatMessage> {
    let handover = if digest.has_handover_notes() {
        "Provided"
    } else {
        "None"
    };
    vec![
        ChatMessage::system(SYSTEM_PROMPT_BASE),
        ChatMessage::user(user_text),
        ChatMessage::assistant(format!(
            "Okay, generating the shift summary. Key points:\n\
             - Previous Handover: {}\n\
             - Recent Incidents: {}\n\
             - Residents to Watch: {}",
            handover,
            digest.recent_incidents.len(),
            digest.residents_to_watch.len()
        )),
    ]
}

/// Messages for a chart request. The weekly series rides along as JSON so
/// the model can narrate a trend it cannot see.
pub fn chart_messages(
    user_text: &str,
    resident_id: &str,
    metric: ChartMetric,
    series: &[WeekBucket],
) -> Vec<ChatMessage> {
    let data = serde_json::to_string(series).unwrap_or_else(|_| "[]".to_string());
    vec![
        ChatMessage::system(SYSTEM_PROMPT_BASE),
        ChatMessage::user(user_text),
        ChatMessage::assistant(format!(
            "Okay, displaying a graph of {} for {}. Here is the weekly summary data:\n{}",
            metric.display_label(),
            resident_id,
            data
        )),
    ]
}

/// Messages for plain conversation: full data context, then the history
/// as given.
pub fn general_messages(history: &[ChatMessage], store: &RecordStore) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(full_system_prompt(store)));
    messages.extend(history.iter().cloned());
    messages
}

/// Estimate the token count of an assembled request.
///
/// Heuristic by content type: JSON-heavy text runs denser than prose, and
/// the full dataset rides in the system prompt often enough that the
/// difference matters.
/// - JSON-heavy content: ~2.5 chars/token
/// - Natural language: ~4.0 chars/token
pub fn estimate_tokens(messages: &[ChatMessage]) -> usize {
    messages
        .iter()
        .map(|message| estimate_text(&message.content))
        .sum()
}

fn estimate_text(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let total_chars = text.len();

    // Count JSON indicators
    let json_chars = text
        .chars()
        .filter(|&c| "{}[]:,\"".contains(c))
        .count();

    let json_fraction = ((json_chars as f64 / total_chars as f64) * 6.0).min(1.0);
    let prose_fraction = 1.0 - json_fraction;

    // Weighted average chars-per-token
    let chars_per_token = json_fraction * 2.5 + prose_fraction * 4.0;

    (total_chars as f64 / chars_per_token).max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use wardlens_core::{build_digest, weekly_series};
    use wardlens_records::ShiftType;

    fn store() -> RecordStore {
        let raw = r#"{
            "residents": [
                {"id": "res_001", "name": "Eleanor Vance", "fallRisk": "High"}
            ],
            "incidents": [
                {"id": "inc_001", "residentId": "res_001", "type": "Fall",
                 "timestamp": "2025-04-22T03:15:00Z"}
            ]
        }"#;
        let (store, _) = RecordStore::from_json(raw).unwrap();
        store
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let message = ChatMessage::system("hi");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_full_system_prompt_embeds_dataset() {
        let prompt = full_system_prompt(&store());
        assert!(prompt.starts_with(SYSTEM_PROMPT_BASE));
        assert!(prompt.contains("```json"));
        assert!(prompt.contains("Eleanor Vance"));
    }

    #[test]
    fn test_handover_messages_summarize_counts() {
        let store = store();
        let now = Utc.with_ymd_and_hms(2025, 4, 22, 7, 0, 0).unwrap();
        let digest = build_digest(
            &store.residents,
            &store.incidents,
            &store.shifts,
            ShiftType::Day,
            now,
            12,
        )
        .unwrap();

        let messages = handover_messages("shift summary please", &digest);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        let context = &messages[2].content;
        assert!(context.contains("Previous Handover: None"));
        assert!(context.contains("Recent Incidents: 1"));
        assert!(context.contains("Residents to Watch: 1"));
    }

    #[test]
    fn test_empty_string_notes_read_as_none() {
        let digest = wardlens_core::ShiftDigest {
            previous_shift_notes: Some(String::new()),
            recent_incidents: Vec::new(),
            residents_to_watch: Vec::new(),
        };
        let messages = handover_messages("handover", &digest);
        assert!(messages[2].content.contains("Previous Handover: None"));
    }

    #[test]
    fn test_chart_messages_embed_series_json() {
        let store = store();
        let today = NaiveDate::from_ymd_opt(2025, 4, 22).unwrap();
        let series = weekly_series(&store.incidents, "res_001", "Fall", 7, today).unwrap();
        let messages =
            chart_messages("falls graph for res_001", "res_001", ChartMetric::Falls, &series);
        let context = &messages[2].content;
        assert!(context.contains("graph of Falls for res_001"));
        assert!(context.contains("\"weekLabel\""));
        assert!(context.contains("\"count\""));
    }

    #[test]
    fn test_general_messages_lead_with_full_context() {
        let history = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi there"),
            ChatMessage::user("what room is Eleanor in?"),
        ];
        let messages = general_messages(&history, &store());
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("```json"));
        assert_eq!(messages[3].content, "what room is Eleanor in?");
    }

    #[test]
    fn test_estimate_tokens_empty() {
        assert_eq!(estimate_tokens(&[]), 0);
        assert_eq!(estimate_tokens(&[ChatMessage::user("")]), 0);
    }

    #[test]
    fn test_estimate_tokens_prose() {
        let prose = "Please tell me how Eleanor Vance slept last night and whether she needs anything this morning.";
        let tokens = estimate_tokens(&[ChatMessage::user(prose)]);
        // Prose should be ~4.0 chars/token, so 96 chars / 4.0 ~= 24 tokens
        assert!((18..=30).contains(&tokens), "Got {}", tokens);
    }

    #[test]
    fn test_estimate_tokens_json_is_denser() {
        let prose = "a".repeat(400);
        let json = "{\"k\":[1,2]},".repeat(40);
        let prose_tokens = estimate_tokens(&[ChatMessage::user(prose)]);
        let json_tokens = estimate_tokens(&[ChatMessage::user(json)]);
        assert!(json_tokens > prose_tokens, "{} vs {}", json_tokens, prose_tokens);
    }
}
