use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use wardlens_assist::ChartMetric;

#[derive(Parser)]
#[command(name = "wardlens")]
#[command(about = "Chat-style data views over a care facility dataset", version)]
pub struct Cli {
    /// Path to the facility dataset (falls back to WARDLENS_DATA, then
    /// ./facility.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Path to the host config file
    #[arg(long, global = true, default_value = "wardlens.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a free-text question; chart and handover phrasing triggers views
    Ask {
        /// The question, quoted or as trailing words
        text: Vec<String>,
        /// Reference time override (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<String>,
    },
    /// Weekly series for one resident and metric
    Chart {
        /// Resident id, e.g. res_001
        #[arg(long)]
        resident: String,
        /// What to count
        #[arg(long, value_enum)]
        metric: MetricArg,
        /// Days of history, inclusive of today
        #[arg(long)]
        days: Option<i64>,
        /// Reference time override (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<String>,
    },
    /// Shift-handover digest for the incoming shift
    Handover {
        /// Day or Night; defaults to whichever shift the clock says
        #[arg(long)]
        shift: Option<String>,
        /// Hours of incident history
        #[arg(long)]
        hours: Option<i64>,
        /// Reference time override (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<String>,
    },
    /// Validate the dataset and report what loaded
    Check,
    /// Write a starter dataset to the data path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Falls,
    BathroomVisits,
}

impl From<MetricArg> for ChartMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Falls => ChartMetric::Falls,
            MetricArg::BathroomVisits => ChartMetric::BathroomVisits,
        }
    }
}

/// Dataset path resolution: the --data flag wins, then WARDLENS_DATA, then
/// ./facility.json.
pub fn resolve_data_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = std::env::var("WARDLENS_DATA") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from("facility.json")
}
