//! Domain types and configuration shared by every brandmatch crate.

pub mod app_config;
pub mod collaboration;
pub mod config;
pub mod document;
pub mod numeric;
pub mod partnership;
pub mod patch;
pub mod profile;
pub mod resources;

pub use app_config::{AppConfig, Environment};
pub use collaboration::{
    Collaboration, CollaborationStatus, Milestone, MilestoneStatus, Task, TaskStatus,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use document::{
    Activity, ActivityKind, CustomMetric, Partner, PartnerStatus, RootDocument, Settings,
};
pub use partnership::{Investment, PartnershipCase, Returns, RiskFactors, StrategicFactors};
pub use patch::{CollaborationPatch, PartnerPatch, TaskPatch};
pub use profile::{
    BrandProfile, CompanySize, GeographicFocus, PartnershipPreferences, PartnershipType,
};
pub use resources::{default_catalog, load_resources, Resource, ResourceType, ResourcesFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read resources file at {path}: {source}")]
    ResourcesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resources file: {0}")]
    ResourcesFileParse(#[source] serde_yaml::Error),

    #[error("resources validation failed: {0}")]
    Validation(String),
}
