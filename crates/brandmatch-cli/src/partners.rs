//! `partners` command handlers.

use std::path::{Path, PathBuf};

use brandmatch_core::{AppConfig, BrandProfile, Partner, PartnerPatch, PartnerStatus};
use brandmatch_scoring::{find_most_promising_partners, score_profiles};
use brandmatch_store::{KeyValueStore, Store};
use clap::Subcommand;
use uuid::Uuid;

use crate::input::read_input;
use crate::{print_json, truncate, Output};

/// Sub-commands available under `partners`.
#[derive(Debug, Subcommand)]
pub enum PartnersCommands {
    /// List stored partners with their compatibility score
    List,
    /// Add a partner from a brand profile file
    Add {
        /// Partner brand profile (YAML or JSON)
        file: PathBuf,
        /// Initial pipeline status
        #[arg(long, default_value = "prospect")]
        status: PartnerStatus,
        /// Contact email for the partner
        #[arg(long)]
        email: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a partner
    Remove { id: Uuid },
    /// Move a partner to a new pipeline status
    Status { id: Uuid, status: PartnerStatus },
    /// Rank partners by compatibility with your profile
    Rank {
        /// Maximum number of partners to show
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub(crate) fn run<K: KeyValueStore>(
    command: PartnersCommands,
    store: &mut Store<K>,
    config: &AppConfig,
    output: Output,
) -> anyhow::Result<()> {
    match command {
        PartnersCommands::List => run_partners_list(store, output),
        PartnersCommands::Add {
            file,
            status,
            email,
            notes,
        } => run_partners_add(store, &file, status, email, notes).map(|_| ()),
        PartnersCommands::Remove { id } => {
            let removed = store.remove_partner(id)?;
            store.save()?;
            println!("removed partner '{}'", removed.brand.name);
            Ok(())
        }
        PartnersCommands::Status { id, status } => {
            let patch = PartnerPatch {
                status: Some(status),
                ..PartnerPatch::default()
            };
            let name = store.update_partner(id, &patch)?.brand.name.clone();
            store.save()?;
            println!("partner '{name}' is now {status}");
            Ok(())
        }
        PartnersCommands::Rank { limit } => {
            run_partners_rank(store, limit.unwrap_or(config.partner_limit), output)
        }
    }
}

fn run_partners_list<K: KeyValueStore>(store: &Store<K>, output: Output) -> anyhow::Result<()> {
    let document = store.document();
    if output.is_json() {
        return print_json(&document.partners);
    }
    if document.partners.is_empty() {
        println!("no partners stored; run `partners add <file>` first");
        return Ok(());
    }

    let own = document.profile.as_ref();
    println!(
        "{:<38}{:<26}{:<16}{:<13}SCORE",
        "ID", "NAME", "INDUSTRY", "STATUS"
    );
    for partner in &document.partners {
        let score = own.map_or_else(
            || "-".to_string(),
            |p| score_profiles(Some(p), Some(&partner.brand)).to_string(),
        );
        println!(
            "{:<38}{:<26}{:<16}{:<13}{}",
            partner.id,
            truncate(&partner.brand.name, 22),
            truncate(&partner.brand.industry, 14),
            partner.status,
            score
        );
    }
    Ok(())
}

pub(crate) fn run_partners_add<K: KeyValueStore>(
    store: &mut Store<K>,
    file: &Path,
    status: PartnerStatus,
    email: Option<String>,
    notes: Option<String>,
) -> anyhow::Result<Uuid> {
    let brand: BrandProfile = read_input(file)?;
    if brand.name.trim().is_empty() {
        anyhow::bail!("partner profile in {} has no name", file.display());
    }
    let mut partner = Partner::new(brand);
    partner.status = status;
    partner.contact_email = email;
    partner.notes = notes;

    let name = partner.brand.name.clone();
    let id = store.add_partner(partner)?;
    store.save()?;
    println!("added partner '{name}' ({id})");
    Ok(id)
}

fn run_partners_rank<K: KeyValueStore>(
    store: &Store<K>,
    limit: usize,
    output: Output,
) -> anyhow::Result<()> {
    let document = store.document();
    if document.profile.is_none() {
        tracing::warn!("no brand profile stored; every partner scores 0");
    }
    let ranked = find_most_promising_partners(document.profile.as_ref(), &document.partners, limit);

    if output.is_json() {
        return print_json(&ranked);
    }
    if ranked.is_empty() {
        println!("no partners to rank");
        return Ok(());
    }
    println!("{:<6}{:<7}{:<38}NAME", "RANK", "SCORE", "ID");
    for (rank, entry) in ranked.iter().enumerate() {
        println!(
            "{:<6}{:<7}{:<38}{}",
            rank + 1,
            entry.compatibility_score,
            entry.partner_id,
            entry.name
        );
    }
    Ok(())
}
