use brandmatch_core::{
    AppConfig, CollaborationStatus, Environment, PartnerStatus, RootDocument, TaskStatus,
};
use brandmatch_store::{MemoryKvStore, Store};
use std::path::PathBuf;
use uuid::Uuid;

use super::*;

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        data_dir: PathBuf::from("./data"),
        resources_path: None,
        partner_limit: 5,
        related_limit: 3,
        recommended_limit: 5,
    }
}

fn memory_store() -> Store<MemoryKvStore> {
    Store::open(MemoryKvStore::new()).unwrap()
}

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["brandmatch"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn parses_profile_set() {
    let cli = Cli::try_parse_from(["brandmatch", "profile", "set", "me.yaml"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Profile {
            command: ProfileCommands::Set { ref file }
        }) if file == &PathBuf::from("me.yaml")
    ));
}

#[test]
fn parses_partners_status_with_typed_values() {
    let id = Uuid::new_v4();
    let cli = Cli::try_parse_from([
        "brandmatch",
        "partners",
        "status",
        &id.to_string(),
        "negotiating",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Partners {
            command: PartnersCommands::Status {
                id: parsed,
                status: PartnerStatus::Negotiating
            }
        }) if parsed == id
    ));
}

#[test]
fn rejects_unknown_partner_status() {
    let id = Uuid::new_v4().to_string();
    assert!(Cli::try_parse_from(["brandmatch", "partners", "status", &id, "married"]).is_err());
}

#[test]
fn rejects_malformed_uuid() {
    assert!(Cli::try_parse_from(["brandmatch", "partners", "remove", "not-a-uuid"]).is_err());
}

#[test]
fn parses_partners_rank_limit_and_global_json() {
    let cli =
        Cli::try_parse_from(["brandmatch", "partners", "rank", "--limit", "3", "--json"]).unwrap();
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Some(Commands::Partners {
            command: PartnersCommands::Rank { limit: Some(3) }
        })
    ));
}

#[test]
fn parses_collab_task() {
    let (collab, task) = (Uuid::new_v4(), Uuid::new_v4());
    let cli = Cli::try_parse_from([
        "brandmatch",
        "collab",
        "task",
        &collab.to_string(),
        &task.to_string(),
        "in-progress",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Collab {
            command: CollabCommands::Task {
                status: TaskStatus::InProgress,
                ..
            }
        })
    ));
}

#[test]
fn parses_collab_status() {
    let id = Uuid::new_v4().to_string();
    let cli = Cli::try_parse_from(["brandmatch", "collab", "status", &id, "paused"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Collab {
            command: CollabCommands::Status {
                status: CollaborationStatus::Paused,
                ..
            }
        })
    ));
}

#[test]
fn parses_resources_related_without_limit() {
    let cli =
        Cli::try_parse_from(["brandmatch", "resources", "related", "co-branding-playbook"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Resources {
            command: ResourcesCommands::Related { ref id, limit: None }
        }) if id == "co-branding-playbook"
    ));
}

#[test]
fn parses_metrics_add_with_negative_value() {
    let cli = Cli::try_parse_from([
        "brandmatch",
        "metrics",
        "add",
        "churn",
        "-2.5",
        "--unit",
        "percent",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Metrics {
            command: data::MetricsCommands::Add { ref name, value, unit: Some(ref unit) }
        }) if name == "churn" && (value + 2.5).abs() < f64::EPSILON && unit == "percent"
    ));
}

#[test]
fn parses_activity_default_limit() {
    let cli = Cli::try_parse_from(["brandmatch", "activity"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Activity { limit: 20 })));
}

#[test]
fn parses_export_and_import() {
    let cli = Cli::try_parse_from(["brandmatch", "export", "out.json"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Export { .. })));
    let cli = Cli::try_parse_from(["brandmatch", "import", "in.json"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Import { .. })));
}

#[test]
fn profile_set_then_partner_rank() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = memory_store();
    let me = write(
        &dir,
        "me.yaml",
        "name: Acme Foods\nindustry: food\ncompanySize: medium\ngeographicFocus: national\nvalues: [quality]\n",
    );
    let twin = write(
        &dir,
        "twin.json",
        r#"{"name": "Twin", "industry": "food", "companySize": "medium", "geographicFocus": "national", "values": ["quality"]}"#,
    );
    let far = write(&dir, "far.yaml", "name: Far\nindustry: mining\n");

    profile::run_profile_set(&mut store, &me).unwrap();
    partners::run_partners_add(&mut store, &far, PartnerStatus::Prospect, None, None).unwrap();
    let twin_id = partners::run_partners_add(
        &mut store,
        &twin,
        PartnerStatus::Contacted,
        Some("hi@twin.example".to_string()),
        None,
    )
    .unwrap();

    let document = store.document();
    assert_eq!(document.partners.len(), 2);
    let ranked = brandmatch_scoring::find_most_promising_partners(
        document.profile.as_ref(),
        &document.partners,
        5,
    );
    assert_eq!(ranked[0].partner_id, twin_id);

    partners::run(
        PartnersCommands::Rank { limit: Some(1) },
        &mut store,
        &test_config(),
        Output::Table,
    )
    .unwrap();
}

#[test]
fn profile_without_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = memory_store();
    let path = write(&dir, "blank.yaml", "name: '  '\nindustry: food\n");
    assert!(profile::run_profile_set(&mut store, &path).is_err());
    assert!(store.document().profile.is_none());
}

#[test]
fn collab_add_and_task_update() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = memory_store();
    let path = write(
        &dir,
        "collab.yaml",
        "name: Summer launch\nstartDate: 2026-06-01\nendDate: 2026-08-31\ntasks:\n  - title: Brief\n  - title: Assets\n",
    );
    let collab_id = collab::run_collab_add(&mut store, &path).unwrap();
    let task_id = store.document().collaboration(collab_id).unwrap().tasks[0].id;

    collab::run(
        CollabCommands::Task {
            collab_id,
            task_id,
            status: TaskStatus::Completed,
        },
        &mut store,
        Output::Table,
    )
    .unwrap();

    let stored = store.document().collaboration(collab_id).unwrap();
    assert_eq!(stored.tasks[0].status, TaskStatus::Completed);
    assert_eq!(stored.tasks[1].status, TaskStatus::Pending);
    collab::run(
        CollabCommands::Progress { id: collab_id },
        &mut store,
        Output::Json,
    )
    .unwrap();
}

#[test]
fn collab_with_reversed_dates_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = memory_store();
    let path = write(
        &dir,
        "collab.yaml",
        "name: Backwards\nstartDate: 2026-08-31\nendDate: 2026-06-01\n",
    );
    assert!(collab::run_collab_add(&mut store, &path).is_err());
    assert!(store.document().collaborations.is_empty());
}

#[test]
fn collab_roi_requires_a_case() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = memory_store();
    let path = write(&dir, "collab.yaml", "name: No case\n");
    let id = collab::run_collab_add(&mut store, &path).unwrap();
    let err = collab::run(CollabCommands::Roi { id }, &mut store, Output::Table).unwrap_err();
    assert!(err.to_string().contains("no partnership case"));
}

#[test]
fn roi_accepts_formatted_amounts() {
    let dir = tempfile::tempdir().unwrap();
    let store = memory_store();
    let path = write(
        &dir,
        "case.yaml",
        "investment:\n  directCosts: \"$1,000\"\nreturns:\n  directRevenue: 200\n",
    );
    analysis::run_roi(&path, &store, Output::Json).unwrap();
}

#[test]
fn recommended_resources_need_a_profile() {
    let store = memory_store();
    let err = resources::run(
        ResourcesCommands::Recommended { limit: None },
        &store,
        &test_config(),
        Output::Table,
    )
    .unwrap_err();
    assert!(err.to_string().contains("profile set"));
}

#[test]
fn related_resources_reject_unknown_slug() {
    let store = memory_store();
    let err = resources::run(
        ResourcesCommands::Related {
            id: "no-such-resource".to_string(),
            limit: None,
        },
        &store,
        &test_config(),
        Output::Table,
    )
    .unwrap_err();
    assert!(err.to_string().contains("no-such-resource"));
}

#[test]
fn builtin_catalog_used_without_resources_path() {
    let catalog = resources::load_catalog(&test_config()).unwrap();
    assert!(!catalog.is_empty());
}

#[test]
fn export_then_import_restores_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = memory_store();
    let me = write(&dir, "me.yaml", "name: Acme\nindustry: food\n");
    profile::run_profile_set(&mut source, &me).unwrap();
    data::run_metrics(
        data::MetricsCommands::Add {
            name: "reach".to_string(),
            value: 1200.0,
            unit: None,
        },
        &mut source,
        Output::Table,
    )
    .unwrap();

    let out = dir.path().join("export.json");
    data::run_export(&source, &out).unwrap();

    let mut target = memory_store();
    data::run_import(&mut target, &out).unwrap();
    assert_eq!(target.document().profile, source.document().profile);
    assert_eq!(
        target.document().custom_metrics,
        source.document().custom_metrics
    );
}

#[test]
fn import_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = memory_store();
    let path = write(&dir, "bad.json", "[1, 2, 3]");
    assert!(data::run_import(&mut store, &path).is_err());
    assert_eq!(store.document(), &RootDocument::default());
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["brandmatch", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn parses_settings_set() {
    let cli = Cli::try_parse_from([
        "brandmatch",
        "settings",
        "set",
        "--currency",
        "eur",
        "--timeframe-months",
        "6",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Settings {
            command: data::SettingsCommands::Set {
                currency: Some(ref code),
                timeframe_months: Some(6),
            }
        }) if code == "eur"
    ));
}

#[test]
fn rejects_non_positive_timeframe() {
    assert!(
        Cli::try_parse_from(["brandmatch", "settings", "set", "--timeframe-months", "0"]).is_err()
    );
}

#[test]
fn settings_set_updates_document_and_logs_activity() {
    let mut store = memory_store();
    data::run_settings(
        data::SettingsCommands::Set {
            currency: Some(" eur ".to_string()),
            timeframe_months: Some(6),
        },
        &mut store,
        Output::Table,
    )
    .unwrap();

    let document = store.document();
    assert_eq!(document.settings.currency, "EUR");
    assert_eq!(document.settings.default_timeframe_months, 6);
    assert_eq!(
        document.activities.last().map(|a| a.kind),
        Some(brandmatch_core::ActivityKind::SettingsUpdated)
    );
}

#[test]
fn settings_set_rejects_bad_input() {
    let mut store = memory_store();
    let empty = data::run_settings(
        data::SettingsCommands::Set {
            currency: None,
            timeframe_months: None,
        },
        &mut store,
        Output::Table,
    );
    assert!(empty.is_err());

    let bad_code = data::run_settings(
        data::SettingsCommands::Set {
            currency: Some("euros".to_string()),
            timeframe_months: None,
        },
        &mut store,
        Output::Table,
    );
    assert!(bad_code.is_err());
    assert_eq!(store.document(), &RootDocument::default());
}
