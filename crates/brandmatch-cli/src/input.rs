//! Reading record files supplied on the command line.

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Parse a YAML or JSON file into `T`. JSON is read through the YAML parser,
/// which accepts it as a subset.
pub(crate) fn read_input<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
