//! Whole-document export and import.

use std::collections::HashSet;

use brandmatch_core::RootDocument;
use uuid::Uuid;

use crate::StoreError;

/// Pretty-printed JSON for the whole document.
///
/// # Errors
///
/// Returns [`StoreError::Json`] if serialization fails.
pub fn export_document(document: &RootDocument) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(document)?)
}

fn first_duplicate(ids: impl IntoIterator<Item = Uuid>) -> Option<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

/// Parse an exported document, rejecting anything the store could not hold.
///
/// # Errors
///
/// Returns [`StoreError::InvalidImport`] if `raw` is not a JSON object, does
/// not match the document shape, or repeats a partner, collaboration, or
/// task id.
pub fn import_document(raw: &str) -> Result<RootDocument, StoreError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| StoreError::InvalidImport(format!("not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(StoreError::InvalidImport(
            "top level must be a JSON object".to_string(),
        ));
    }
    let document: RootDocument = serde_json::from_value(value)
        .map_err(|e| StoreError::InvalidImport(format!("unexpected document shape: {e}")))?;

    if let Some(id) = first_duplicate(document.partners.iter().map(|p| p.id)) {
        return Err(StoreError::InvalidImport(format!("duplicate partner id {id}")));
    }
    if let Some(id) = first_duplicate(document.collaborations.iter().map(|c| c.id)) {
        return Err(StoreError::InvalidImport(format!(
            "duplicate collaboration id {id}"
        )));
    }
    for collab in &document.collaborations {
        if let Some(id) = first_duplicate(collab.tasks.iter().map(|t| t.id)) {
            return Err(StoreError::InvalidImport(format!(
                "duplicate task id {id} in collaboration {}",
                collab.id
            )));
        }
    }

    tracing::debug!(
        partners = document.partners.len(),
        collaborations = document.collaborations.len(),
        activities = document.activities.len(),
        "parsed imported document"
    );
    Ok(document)
}
