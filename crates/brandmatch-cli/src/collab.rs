//! `collab` command handlers.

use std::path::{Path, PathBuf};

use brandmatch_core::{Collaboration, CollaborationPatch, CollaborationStatus, TaskPatch, TaskStatus};
use brandmatch_scoring::{analyze_case, calculate_progress, CollaborationProgress};
use brandmatch_store::{KeyValueStore, Store};
use chrono::Utc;
use clap::Subcommand;
use uuid::Uuid;

use crate::analysis::print_analysis;
use crate::input::read_input;
use crate::{fmt_date, print_json, truncate, Output};

/// Sub-commands available under `collab`.
#[derive(Debug, Subcommand)]
pub enum CollabCommands {
    /// List collaborations with their current progress
    List,
    /// Add a collaboration from a file
    Add {
        /// Collaboration file (YAML or JSON)
        file: PathBuf,
    },
    /// Show task, milestone and schedule progress for a collaboration
    Progress { id: Uuid },
    /// Set the status of one task
    Task {
        collab_id: Uuid,
        task_id: Uuid,
        status: TaskStatus,
    },
    /// Set the status of a collaboration
    Status {
        id: Uuid,
        status: CollaborationStatus,
    },
    /// ROI analysis of the partnership case attached to a collaboration
    Roi { id: Uuid },
}

pub(crate) fn run<K: KeyValueStore>(
    command: CollabCommands,
    store: &mut Store<K>,
    output: Output,
) -> anyhow::Result<()> {
    match command {
        CollabCommands::List => run_collab_list(store, output),
        CollabCommands::Add { file } => run_collab_add(store, &file).map(|_| ()),
        CollabCommands::Progress { id } => run_collab_progress(store, id, output),
        CollabCommands::Task {
            collab_id,
            task_id,
            status,
        } => {
            let patch = TaskPatch {
                status: Some(status),
                ..TaskPatch::default()
            };
            let title = store.update_task(collab_id, task_id, &patch)?.title.clone();
            store.save()?;
            println!("task '{title}' is now {status}");
            Ok(())
        }
        CollabCommands::Status { id, status } => {
            let patch = CollaborationPatch {
                status: Some(status),
                ..CollaborationPatch::default()
            };
            let name = store.update_collaboration(id, &patch)?.name.clone();
            store.save()?;
            println!("collaboration '{name}' is now {status}");
            Ok(())
        }
        CollabCommands::Roi { id } => run_collab_roi(store, id, output),
    }
}

fn find<K: KeyValueStore>(store: &Store<K>, id: Uuid) -> anyhow::Result<&Collaboration> {
    store
        .document()
        .collaboration(id)
        .ok_or_else(|| anyhow::anyhow!("collaboration {id} not found; run `collab list`"))
}

fn run_collab_list<K: KeyValueStore>(store: &Store<K>, output: Output) -> anyhow::Result<()> {
    let document = store.document();
    if output.is_json() {
        return print_json(&document.collaborations);
    }
    if document.collaborations.is_empty() {
        println!("no collaborations stored; run `collab add <file>` first");
        return Ok(());
    }

    let now = Utc::now();
    println!(
        "{:<38}{:<26}{:<11}{:<12}{:<10}STATUS",
        "ID", "NAME", "STATE", "END", "PROGRESS"
    );
    for collab in &document.collaborations {
        let progress = calculate_progress(collab, now);
        let overall = format!("{}%", progress.overall_progress);
        println!(
            "{:<38}{:<26}{:<11}{:<12}{:<10}{}",
            collab.id,
            truncate(&collab.name, 22),
            collab.status,
            fmt_date(collab.end_date),
            overall,
            progress.status
        );
    }
    Ok(())
}

pub(crate) fn run_collab_add<K: KeyValueStore>(
    store: &mut Store<K>,
    file: &Path,
) -> anyhow::Result<Uuid> {
    let collab: Collaboration = read_input(file)?;
    if collab.name.trim().is_empty() {
        anyhow::bail!("collaboration in {} has no name", file.display());
    }
    if let (Some(start), Some(end)) = (collab.start_date, collab.end_date) {
        if end < start {
            anyhow::bail!("collaboration ends ({end}) before it starts ({start})");
        }
    }
    let name = collab.name.clone();
    let id = store.add_collaboration(collab)?;
    store.save()?;
    println!("added collaboration '{name}' ({id})");
    Ok(id)
}

fn print_progress(collab: &Collaboration, progress: &CollaborationProgress) {
    println!("{} ({})", collab.name, collab.status);
    println!(
        "  Dates:      {} to {}",
        fmt_date(collab.start_date),
        fmt_date(collab.end_date)
    );
    let t = &progress.tasks;
    println!(
        "  Tasks:      {}% ({} done, {} in progress, {} pending, {} cancelled of {})",
        t.progress_percentage, t.completed, t.in_progress, t.pending, t.cancelled, t.total
    );
    let m = &progress.milestones;
    println!(
        "  Milestones: {}% ({} done, {} pending, {} missed of {})",
        m.progress_percentage, m.completed, m.pending, m.missed, m.total
    );
    println!("  Overall:    {}%", progress.overall_progress);
    if let Some(expected) = progress.expected_progress {
        println!("  Expected:   {expected}%");
    }
    match progress.days_remaining {
        Some(days) if days < 0 => println!("  Overdue by  {} days", -days),
        Some(days) => println!("  Remaining:  {days} days"),
        None => {}
    }
    println!("  Schedule:   {}", progress.status);

    if !collab.tasks.is_empty() {
        println!();
        println!("  {:<38}{:<13}{:<12}TITLE", "TASK ID", "STATUS", "DUE");
        for task in &collab.tasks {
            println!(
                "  {:<38}{:<13}{:<12}{}",
                task.id,
                task.status,
                fmt_date(task.due_date),
                task.title
            );
        }
    }
}

fn run_collab_progress<K: KeyValueStore>(
    store: &Store<K>,
    id: Uuid,
    output: Output,
) -> anyhow::Result<()> {
    let collab = find(store, id)?;
    let progress = calculate_progress(collab, Utc::now());
    if output.is_json() {
        return print_json(&progress);
    }
    print_progress(collab, &progress);
    Ok(())
}

fn run_collab_roi<K: KeyValueStore>(
    store: &Store<K>,
    id: Uuid,
    output: Output,
) -> anyhow::Result<()> {
    let collab = find(store, id)?;
    let Some(case) = &collab.partnership_case else {
        anyhow::bail!("collaboration '{}' has no partnership case attached", collab.name);
    };
    let mut case = case.clone();
    if case.timeframe_months <= 0 {
        case.timeframe_months = store.document().settings.default_timeframe_months;
    }
    let analysis = analyze_case(&case);
    if output.is_json() {
        return print_json(&analysis);
    }
    println!("{}", collab.name);
    print_analysis(&analysis, &store.document().settings.currency);
    Ok(())
}
