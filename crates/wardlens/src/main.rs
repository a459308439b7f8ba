mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let data = cli::resolve_data_path(cli.data);
    let config = cli.config;

    match cli.command {
        Commands::Ask { text, now } => {
            commands::ask::run(&data, &config, &text.join(" "), now.as_deref())
        }
        Commands::Chart {
            resident,
            metric,
            days,
            now,
        } => commands::chart::run(&data, &config, &resident, metric.into(), days, now.as_deref()),
        Commands::Handover { shift, hours, now } => {
            commands::handover::run(&data, &config, shift.as_deref(), hours, now.as_deref())
        }
        Commands::Check => commands::check::run(&data),
        Commands::Init { force } => commands::init::run(&data, force),
    }
}
