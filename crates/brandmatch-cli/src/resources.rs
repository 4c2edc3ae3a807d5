//! `resources` command handlers.

use brandmatch_core::profile::normalize_key;
use brandmatch_core::{default_catalog, load_resources, AppConfig, Resource};
use brandmatch_scoring::{recommended_resources, related_resources, RankedResource};
use brandmatch_store::{KeyValueStore, Store};
use clap::Subcommand;

use crate::{print_json, truncate, Output};

/// Sub-commands available under `resources`.
#[derive(Debug, Subcommand)]
pub enum ResourcesCommands {
    /// List the resource library
    List {
        /// Only show resources for this industry
        #[arg(long)]
        industry: Option<String>,
    },
    /// Resources similar to the one with the given slug
    Related {
        /// Resource slug, as shown by `resources list`
        id: String,
        /// Maximum number of resources to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Resources matched to your brand profile
    Recommended {
        /// Maximum number of resources to show
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// The configured catalog file, or the built-in library when none is set.
pub(crate) fn load_catalog(config: &AppConfig) -> anyhow::Result<Vec<Resource>> {
    match &config.resources_path {
        Some(path) => Ok(load_resources(path)?.resources),
        None => Ok(default_catalog()),
    }
}

pub(crate) fn run<K: KeyValueStore>(
    command: ResourcesCommands,
    store: &Store<K>,
    config: &AppConfig,
    output: Output,
) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    match command {
        ResourcesCommands::List { industry } => {
            run_resources_list(&catalog, industry.as_deref(), output)
        }
        ResourcesCommands::Related { id, limit } => {
            let current = catalog
                .iter()
                .find(|r| r.slug() == id)
                .ok_or_else(|| anyhow::anyhow!("resource '{id}' not found; run `resources list`"))?;
            let ranked = related_resources(current, &catalog, limit.unwrap_or(config.related_limit));
            print_ranked(&ranked, output)
        }
        ResourcesCommands::Recommended { limit } => {
            let Some(profile) = &store.document().profile else {
                anyhow::bail!("no brand profile stored; run `profile set <file>` first");
            };
            let ranked = recommended_resources(
                profile,
                &catalog,
                limit.unwrap_or(config.recommended_limit),
            );
            print_ranked(&ranked, output)
        }
    }
}

fn run_resources_list(
    catalog: &[Resource],
    industry: Option<&str>,
    output: Output,
) -> anyhow::Result<()> {
    let wanted = industry.map(normalize_key);
    let shown: Vec<&Resource> = catalog
        .iter()
        .filter(|r| wanted.as_ref().map_or(true, |w| normalize_key(&r.industry) == *w))
        .collect();

    if output.is_json() {
        return print_json(&shown);
    }
    println!(
        "{:<40}{:<13}{:<24}{:<12}TITLE",
        "ID", "INDUSTRY", "PARTNERSHIP", "TYPE"
    );
    for resource in shown {
        println!(
            "{:<40}{:<13}{:<24}{:<12}{}",
            truncate(&resource.slug(), 36),
            resource.industry,
            resource.partnership_type,
            resource.resource_type,
            resource.title
        );
    }
    Ok(())
}

fn print_ranked(ranked: &[RankedResource<'_>], output: Output) -> anyhow::Result<()> {
    if output.is_json() {
        return print_json(&ranked);
    }
    if ranked.is_empty() {
        println!("no matching resources");
        return Ok(());
    }
    println!("{:<7}{:<40}TITLE", "SCORE", "ID");
    for entry in ranked {
        println!(
            "{:<7}{:<40}{}",
            entry.score,
            truncate(&entry.resource.slug(), 36),
            entry.resource.title
        );
    }
    Ok(())
}
