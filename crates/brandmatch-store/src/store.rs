//! The loaded root document and its mutations.

use brandmatch_core::{
    Activity, ActivityKind, BrandProfile, Collaboration, CollaborationPatch, CustomMetric,
    Partner, PartnerPatch, RootDocument, Settings, Task, TaskPatch,
};
use chrono::Utc;
use uuid::Uuid;

use crate::kv::KeyValueStore;
use crate::StoreError;

/// Key under which the root document is persisted.
pub const DATA_KEY: &str = "brandmatch-data";

/// An open document backed by a key-value store.
///
/// Mutations only touch the in-memory document and append an activity;
/// nothing reaches the backend until [`Store::save`].
#[derive(Debug)]
pub struct Store<K> {
    kv: K,
    document: RootDocument,
}

impl<K: KeyValueStore> Store<K> {
    /// Load the stored document, or start from an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails or the stored JSON does
    /// not parse.
    pub fn open(kv: K) -> Result<Self, StoreError> {
        let document = match kv.get(DATA_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => {
                tracing::info!(key = DATA_KEY, "no stored data; starting empty");
                RootDocument::default()
            }
        };
        Ok(Self { kv, document })
    }

    /// Write the document back to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.document)?;
        self.kv.set(DATA_KEY, &raw)?;
        tracing::debug!(
            partners = self.document.partners.len(),
            collaborations = self.document.collaborations.len(),
            "saved document"
        );
        Ok(())
    }

    #[must_use]
    pub fn document(&self) -> &RootDocument {
        &self.document
    }

    #[must_use]
    pub fn into_backend(self) -> K {
        self.kv
    }

    fn record(&mut self, kind: ActivityKind, description: String) {
        self.document
            .activities
            .push(Activity::new(kind, description));
    }

    fn partner_index(&self, id: Uuid) -> Result<usize, StoreError> {
        self.document
            .partners
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound {
                entity: "partner",
                id,
            })
    }

    fn collaboration_index(&self, id: Uuid) -> Result<usize, StoreError> {
        self.document
            .collaborations
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound {
                entity: "collaboration",
                id,
            })
    }

    pub fn set_profile(&mut self, profile: BrandProfile) {
        let description = format!("Updated brand profile '{}'", profile.name);
        self.document.profile = Some(profile);
        self.record(ActivityKind::ProfileUpdated, description);
    }

    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if a partner with the same id exists.
    pub fn add_partner(&mut self, partner: Partner) -> Result<Uuid, StoreError> {
        let id = partner.id;
        if self.document.partner(id).is_some() {
            return Err(StoreError::DuplicateId {
                entity: "partner",
                id,
            });
        }
        let description = format!("Added partner '{}'", partner.brand.name);
        self.document.partners.push(partner);
        self.record(ActivityKind::PartnerAdded, description);
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no partner has `id`.
    pub fn update_partner(
        &mut self,
        id: Uuid,
        patch: &PartnerPatch,
    ) -> Result<&Partner, StoreError> {
        let index = self.partner_index(id)?;
        let updated = patch.apply(&self.document.partners[index], Utc::now());
        let description = format!("Updated partner '{}'", updated.brand.name);
        self.document.partners[index] = updated;
        self.record(ActivityKind::PartnerUpdated, description);
        Ok(&self.document.partners[index])
    }

    /// Remove a partner. Collaborations that referenced it keep the dangling
    /// id so their history stays intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no partner has `id`.
    pub fn remove_partner(&mut self, id: Uuid) -> Result<Partner, StoreError> {
        let index = self.partner_index(id)?;
        let removed = self.document.partners.remove(index);
        self.record(
            ActivityKind::PartnerRemoved,
            format!("Removed partner '{}'", removed.brand.name),
        );
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the id is taken, or
    /// [`StoreError::NotFound`] if it names a partner that does not exist.
    pub fn add_collaboration(&mut self, collab: Collaboration) -> Result<Uuid, StoreError> {
        let id = collab.id;
        if self.document.collaboration(id).is_some() {
            return Err(StoreError::DuplicateId {
                entity: "collaboration",
                id,
            });
        }
        if let Some(partner_id) = collab.partner_id {
            self.partner_index(partner_id)?;
        }
        let description = format!("Added collaboration '{}'", collab.name);
        self.document.collaborations.push(collab);
        self.record(ActivityKind::CollaborationAdded, description);
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no collaboration has `id`, or if the
    /// patch points it at an unknown partner.
    pub fn update_collaboration(
        &mut self,
        id: Uuid,
        patch: &CollaborationPatch,
    ) -> Result<&Collaboration, StoreError> {
        let index = self.collaboration_index(id)?;
        if let Some(partner_id) = patch.partner_id {
            self.partner_index(partner_id)?;
        }
        let updated = patch.apply(&self.document.collaborations[index], Utc::now());
        let description = format!("Updated collaboration '{}'", updated.name);
        self.document.collaborations[index] = updated;
        self.record(ActivityKind::CollaborationUpdated, description);
        Ok(&self.document.collaborations[index])
    }

    /// Patch one task and bump its collaboration's `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the collaboration or task is missing.
    pub fn update_task(
        &mut self,
        collab_id: Uuid,
        task_id: Uuid,
        patch: &TaskPatch,
    ) -> Result<&Task, StoreError> {
        let collab_index = self.collaboration_index(collab_id)?;
        let collab = &mut self.document.collaborations[collab_index];
        let task_index = collab
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(StoreError::NotFound {
                entity: "task",
                id: task_id,
            })?;

        let updated = patch.apply(&collab.tasks[task_index]);
        let description = format!(
            "Task '{}' in '{}' is now {}",
            updated.title, collab.name, updated.status
        );
        collab.tasks[task_index] = updated;
        collab.updated_at = Utc::now();
        self.record(ActivityKind::TaskUpdated, description);
        Ok(&self.document.collaborations[collab_index].tasks[task_index])
    }

    pub fn add_custom_metric(&mut self, metric: CustomMetric) -> Uuid {
        let id = metric.id;
        let description = match &metric.unit {
            Some(unit) => format!("Recorded {} = {} {unit}", metric.name, metric.value),
            None => format!("Recorded {} = {}", metric.name, metric.value),
        };
        self.document.custom_metrics.push(metric);
        self.record(ActivityKind::MetricAdded, description);
        id
    }

    pub fn update_settings(&mut self, settings: Settings) {
        let description = format!(
            "Settings updated (currency {}, default timeframe {} months)",
            settings.currency, settings.default_timeframe_months
        );
        self.document.settings = settings;
        self.record(ActivityKind::SettingsUpdated, description);
    }

    /// Replace the whole document with an imported one.
    pub fn replace_document(&mut self, document: RootDocument) {
        let description = format!(
            "Imported {} partners and {} collaborations",
            document.partners.len(),
            document.collaborations.len()
        );
        self.document = document;
        self.record(ActivityKind::DataImported, description);
    }

    /// Up to `limit` activities, newest first.
    #[must_use]
    pub fn recent_activities(&self, limit: usize) -> Vec<&Activity> {
        self.document.activities.iter().rev().take(limit).collect()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
