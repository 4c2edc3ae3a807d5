//! `profile` command handlers.

use std::path::PathBuf;

use brandmatch_core::BrandProfile;
use brandmatch_store::{KeyValueStore, Store};
use clap::Subcommand;

use crate::input::read_input;
use crate::{print_json, Output};

/// Sub-commands available under `profile`.
#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Print the stored brand profile
    Show,
    /// Replace the stored brand profile with one read from a file
    Set {
        /// Profile file (YAML or JSON)
        file: PathBuf,
    },
}

pub(crate) fn run<K: KeyValueStore>(
    command: ProfileCommands,
    store: &mut Store<K>,
    output: Output,
) -> anyhow::Result<()> {
    match command {
        ProfileCommands::Show => run_profile_show(store, output),
        ProfileCommands::Set { file } => run_profile_set(store, &file),
    }
}

fn join(items: impl IntoIterator<Item = String>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

pub(crate) fn print_profile(profile: &BrandProfile) {
    println!("Name:        {}", profile.name);
    if let Some(description) = &profile.description {
        println!("Description: {description}");
    }
    println!("Industry:    {}", profile.industry);
    println!("Size:        {}", profile.company_size);
    println!("Geography:   {}", profile.geographic_focus);
    println!("Values:      {}", join(profile.values.iter().cloned()));
    println!(
        "Objectives:  {}",
        join(profile.partnership.objectives.iter().cloned())
    );
    println!(
        "Prefers:     {}",
        join(
            profile
                .partnership
                .preferred_types
                .iter()
                .map(ToString::to_string)
        )
    );
}

fn run_profile_show<K: KeyValueStore>(store: &Store<K>, output: Output) -> anyhow::Result<()> {
    let Some(profile) = &store.document().profile else {
        println!("no brand profile stored; run `profile set <file>` first");
        return Ok(());
    };
    if output.is_json() {
        return print_json(profile);
    }
    print_profile(profile);
    Ok(())
}

pub(crate) fn run_profile_set<K: KeyValueStore>(
    store: &mut Store<K>,
    file: &std::path::Path,
) -> anyhow::Result<()> {
    let profile: BrandProfile = read_input(file)?;
    if profile.name.trim().is_empty() {
        anyhow::bail!("profile in {} has no name", file.display());
    }
    let name = profile.name.clone();
    store.set_profile(profile);
    store.save()?;
    println!("saved brand profile '{name}'");
    Ok(())
}
