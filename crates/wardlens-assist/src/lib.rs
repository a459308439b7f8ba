//! Host glue between free-text staff input and the data views

mod completion;
mod config;
mod intent;
mod prompt;

pub use completion::{CompletionClient, CompletionError, OfflineClient};
pub use config::AssistConfig;
pub use intent::{classify, extract_resident_id, ChartMetric, Intent};
pub use prompt::{
    chart_messages, estimate_tokens, full_system_prompt, general_messages, handover_messages,
    system_prompt_base, ChatMessage, Role,
};
