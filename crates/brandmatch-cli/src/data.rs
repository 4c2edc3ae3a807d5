//! Metrics, settings, the activity log, and whole-document export/import.

use std::path::Path;

use anyhow::Context;
use brandmatch_core::{CustomMetric, Settings};
use brandmatch_store::{export_document, import_document, KeyValueStore, Store};
use clap::Subcommand;

use crate::{print_json, Output};

/// Sub-commands available under `metrics`.
#[derive(Debug, Subcommand)]
pub enum MetricsCommands {
    /// Record a named value
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Unit label, e.g. `followers` or `USD`
        #[arg(long)]
        unit: Option<String>,
    },
    /// List recorded metrics
    List,
}

pub(crate) fn run_metrics<K: KeyValueStore>(
    command: MetricsCommands,
    store: &mut Store<K>,
    output: Output,
) -> anyhow::Result<()> {
    match command {
        MetricsCommands::Add { name, value, unit } => {
            if !value.is_finite() {
                anyhow::bail!("metric value must be a finite number");
            }
            let id = store.add_custom_metric(CustomMetric::new(name.clone(), value, unit));
            store.save()?;
            println!("recorded metric '{name}' ({id})");
            Ok(())
        }
        MetricsCommands::List => {
            let metrics = &store.document().custom_metrics;
            if output.is_json() {
                return print_json(metrics);
            }
            if metrics.is_empty() {
                println!("no metrics recorded");
                return Ok(());
            }
            println!("{:<12}{:<28}{:>14}  UNIT", "DATE", "NAME", "VALUE");
            for metric in metrics {
                println!(
                    "{:<12}{:<28}{:>14}  {}",
                    metric.created_at.format("%Y-%m-%d"),
                    metric.name,
                    metric.value,
                    metric.unit.as_deref().unwrap_or("")
                );
            }
            Ok(())
        }
    }
}

/// Sub-commands available under `settings`.
#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Change one or more settings
    Set {
        /// Three-letter currency code used when printing money
        #[arg(long)]
        currency: Option<String>,
        /// Months assumed for an ROI case that does not state a timeframe
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        timeframe_months: Option<i64>,
    },
}

pub(crate) fn run_settings<K: KeyValueStore>(
    command: SettingsCommands,
    store: &mut Store<K>,
    output: Output,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::Show => print_settings(&store.document().settings, output),
        SettingsCommands::Set {
            currency,
            timeframe_months,
        } => {
            if currency.is_none() && timeframe_months.is_none() {
                anyhow::bail!("nothing to change; pass --currency or --timeframe-months");
            }
            let mut settings = store.document().settings.clone();
            if let Some(code) = currency {
                let code = code.trim().to_ascii_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    anyhow::bail!("currency must be a three-letter code such as USD");
                }
                settings.currency = code;
            }
            if let Some(months) = timeframe_months {
                settings.default_timeframe_months = months;
            }
            store.update_settings(settings);
            store.save()?;
            print_settings(&store.document().settings, output)
        }
    }
}

fn print_settings(settings: &Settings, output: Output) -> anyhow::Result<()> {
    if output.is_json() {
        return print_json(settings);
    }
    println!("Currency:          {}", settings.currency);
    println!(
        "Default timeframe: {} months",
        settings.default_timeframe_months
    );
    Ok(())
}

pub(crate) fn run_activity<K: KeyValueStore>(
    store: &Store<K>,
    limit: usize,
    output: Output,
) -> anyhow::Result<()> {
    let recent = store.recent_activities(limit);
    if output.is_json() {
        return print_json(&recent);
    }
    if recent.is_empty() {
        println!("no activity yet");
        return Ok(());
    }
    for activity in recent {
        println!(
            "{}  {}",
            activity.timestamp.format("%Y-%m-%d %H:%M"),
            activity.description
        );
    }
    Ok(())
}

pub(crate) fn run_export<K: KeyValueStore>(store: &Store<K>, out: &Path) -> anyhow::Result<()> {
    let json = export_document(store.document())?;
    std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
    println!("exported data to {}", out.display());
    Ok(())
}

pub(crate) fn run_import<K: KeyValueStore>(
    store: &mut Store<K>,
    input: &Path,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let document = import_document(&raw)
        .with_context(|| format!("{} is not a valid brandmatch export", input.display()))?;
    let (partners, collaborations) = (document.partners.len(), document.collaborations.len());
    store.replace_document(document);
    store.save()?;
    println!("imported {partners} partners and {collaborations} collaborations");
    Ok(())
}
