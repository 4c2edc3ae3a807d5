use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the CLI and the store.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding the file-backed key-value store.
    pub data_dir: PathBuf,
    /// Optional YAML resource catalog. `None` means the built-in catalog.
    pub resources_path: Option<PathBuf>,
    /// Default number of entries returned by partner ranking.
    pub partner_limit: usize,
    /// Default number of related resources.
    pub related_limit: usize,
    /// Default number of recommended resources.
    pub recommended_limit: usize,
}
