//! Partial updates for stored records.
//!
//! Each patch names the fields a caller may change. `id` and `createdAt` are
//! not part of any patch, and unknown fields are rejected on deserialize.
//! `apply` never mutates its input; it returns the merged record with
//! `updated_at` set to the supplied time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collaboration::{Collaboration, CollaborationStatus, Milestone, Task, TaskStatus};
use crate::document::{Partner, PartnerStatus};
use crate::partnership::PartnershipCase;
use crate::profile::BrandProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartnerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PartnerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PartnerPatch {
    #[must_use]
    pub fn apply(&self, partner: &Partner, now: DateTime<Utc>) -> Partner {
        Partner {
            id: partner.id,
            brand: self.brand.clone().unwrap_or_else(|| partner.brand.clone()),
            status: self.status.unwrap_or(partner.status),
            contact_email: self
                .contact_email
                .clone()
                .or_else(|| partner.contact_email.clone()),
            notes: self.notes.clone().or_else(|| partner.notes.clone()),
            created_at: partner.created_at,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CollaborationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CollaborationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,
    #[serde(default, rename = "case", skip_serializing_if = "Option::is_none")]
    pub partnership_case: Option<PartnershipCase>,
}

impl CollaborationPatch {
    #[must_use]
    pub fn apply(&self, collab: &Collaboration, now: DateTime<Utc>) -> Collaboration {
        Collaboration {
            id: collab.id,
            name: self.name.clone().unwrap_or_else(|| collab.name.clone()),
            partner_id: self.partner_id.or(collab.partner_id),
            status: self.status.unwrap_or(collab.status),
            start_date: self.start_date.or(collab.start_date),
            end_date: self.end_date.or(collab.end_date),
            tasks: self.tasks.clone().unwrap_or_else(|| collab.tasks.clone()),
            milestones: self
                .milestones
                .clone()
                .unwrap_or_else(|| collab.milestones.clone()),
            partnership_case: self
                .partnership_case
                .clone()
                .or_else(|| collab.partnership_case.clone()),
            created_at: collab.created_at,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl TaskPatch {
    #[must_use]
    pub fn apply(&self, task: &Task) -> Task {
        Task {
            id: task.id,
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            status: self.status.unwrap_or(task.status),
            due_date: self.due_date.or(task.due_date),
        }
    }
}
