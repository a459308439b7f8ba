//! The opaque completion boundary
//!
//! A completion service takes role-tagged messages and returns one reply
//! string, or fails. The host treats it as a black box: a failure becomes a
//! visible error reply and never corrupts the conversation.

use crate::prompt::{ChatMessage, Role};

/// Ways a completion request can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("completion service unavailable: {0}")]
    Unavailable(String),
    #[error("completion request timed out after {0}s")]
    Timeout(u64),
    #[error("completion service returned an empty reply")]
    EmptyReply,
}

/// A text-completion service: role-tagged messages in, one reply out.
pub trait CompletionClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

/// Deterministic local stand-in used when no completion service is wired
/// up. It answers from the assembled request itself: a tailored context
/// message when one is present, otherwise a short notice quoting the
/// question.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineClient;

impl CompletionClient for OfflineClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        if let Some(context) = messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Assistant)
        {
            return Ok(context.content.clone());
        }

        let question = messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
            .unwrap_or("");
        if question.is_empty() {
            return Err(CompletionError::EmptyReply);
        }
        Ok(format!(
            "No completion service is configured, so I can only answer with data views. \
             Try \"falls chart for res_001\" or \"shift summary\". (You asked: {})",
            question
        ))
    }
}
