use std::path::Path;

use anyhow::Context;
use wardlens_assist::ChatMessage;
use wardlens_records::{LoadReport, RecordStore};

pub fn run(data: &Path) -> anyhow::Result<()> {
    let (store, report) = RecordStore::load(data)
        .with_context(|| format!("failed to load dataset from {}", data.display()))?;
    println!("{}", build_check(data, &store, &report));
    Ok(())
}

fn build_check(path: &Path, store: &RecordStore, report: &LoadReport) -> String {
    let mut sections = Vec::new();

    sections.push("Dataset Check\n=============".to_string());

    sections.push(format!("\nSource\n------\n  {}", path.display()));

    sections.push(format!(
        "\nRecords\n-------\n  residents:  {}\n  incidents:  {}\n  activities: {}\n  shifts:     {}",
        report.residents, report.incidents, report.activities, report.shifts,
    ));

    if !report.skipped.is_empty() {
        sections.push("\nSkipped\n-------".to_string());
        for skipped in &report.skipped {
            sections.push(format!("  SKIP {}", skipped));
        }
    }

    let full_prompt = wardlens_assist::full_system_prompt(store);
    sections.push(format!(
        "\nContext\n-------\n  full system prompt: ~{} tokens",
        wardlens_assist::estimate_tokens(&[ChatMessage::system(full_prompt)]),
    ));

    sections.push(format!("\n{} issues found", report.skipped.len()));

    sections.join("\n")
}
