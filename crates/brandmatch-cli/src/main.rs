mod analysis;
mod collab;
mod data;
mod input;
mod partners;
mod profile;
mod resources;

use anyhow::Context;
use brandmatch_core::AppConfig;
use brandmatch_store::{FileKvStore, Store};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use collab::CollabCommands;
use partners::PartnersCommands;
use profile::ProfileCommands;
use resources::ResourcesCommands;

#[derive(Debug, Parser)]
#[command(name = "brandmatch")]
#[command(about = "Brand partnership matchmaking, ROI scoring and progress tracking")]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show or replace your own brand profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Manage and rank candidate partners
    Partners {
        #[command(subcommand)]
        command: PartnersCommands,
    },
    /// Compatibility report for two brand profile files
    Score {
        /// Profile file for the first brand (YAML or JSON)
        a: PathBuf,
        /// Profile file for the second brand (YAML or JSON)
        b: PathBuf,
    },
    /// Financial, strategic and risk analysis of a partnership case file
    Roi {
        /// Partnership case file (YAML or JSON)
        case: PathBuf,
    },
    /// Track collaborations, their tasks and schedule
    Collab {
        #[command(subcommand)]
        command: CollabCommands,
    },
    /// Browse the partnership resource library
    Resources {
        #[command(subcommand)]
        command: ResourcesCommands,
    },
    /// Record custom metrics
    Metrics {
        #[command(subcommand)]
        command: data::MetricsCommands,
    },
    /// Show or change currency and default ROI timeframe
    Settings {
        #[command(subcommand)]
        command: data::SettingsCommands,
    },
    /// Show the most recent activity log entries
    Activity {
        /// Maximum number of entries to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Write all stored data to a JSON file
    Export {
        /// Destination file
        out: PathBuf,
    },
    /// Replace all stored data with a previously exported JSON file
    Import {
        /// Source file
        input: PathBuf,
    },
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    Table,
    Json,
}

impl Output {
    pub(crate) fn is_json(self) -> bool {
        self == Output::Json
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional date for display, returning `"-"` when `None`.
pub(crate) fn fmt_date(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Truncate `text` to `max` characters, appending `...` when cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn open_store(config: &AppConfig) -> anyhow::Result<Store<FileKvStore>> {
    let kv = FileKvStore::open(&config.data_dir).with_context(|| {
        format!(
            "failed to open data directory {}",
            config.data_dir.display()
        )
    })?;
    Store::open(kv).context("failed to load stored data")
}

fn main() -> anyhow::Result<()> {
    // Parse before loading config so `--help` never depends on the environment.
    let cli = Cli::parse();
    let output = if cli.json { Output::Json } else { Output::Table };
    let Some(command) = cli.command else {
        println!("brandmatch: no command given; run `brandmatch --help` for usage");
        return Ok(());
    };

    let config = brandmatch_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;
    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "starting");

    run(command, &config, output)
}

/// Dispatch one command. `score` is the only command that never opens the store.
fn run(command: Commands, config: &AppConfig, output: Output) -> anyhow::Result<()> {
    match command {
        Commands::Score { a, b } => analysis::run_score(&a, &b, output),
        Commands::Roi { case } => analysis::run_roi(&case, &open_store(config)?, output),
        Commands::Profile { command } => profile::run(command, &mut open_store(config)?, output),
        Commands::Partners { command } => {
            partners::run(command, &mut open_store(config)?, config, output)
        }
        Commands::Collab { command } => collab::run(command, &mut open_store(config)?, output),
        Commands::Resources { command } => {
            resources::run(command, &open_store(config)?, config, output)
        }
        Commands::Metrics { command } => {
            data::run_metrics(command, &mut open_store(config)?, output)
        }
        Commands::Settings { command } => {
            data::run_settings(command, &mut open_store(config)?, output)
        }
        Commands::Activity { limit } => data::run_activity(&open_store(config)?, limit, output),
        Commands::Export { out } => data::run_export(&open_store(config)?, &out),
        Commands::Import { input } => data::run_import(&mut open_store(config)?, &input),
    }
}

#[cfg(test)]
mod tests;
