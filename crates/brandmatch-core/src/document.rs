//! The persisted root document and the records that only live inside it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collaboration::Collaboration;
use crate::profile::BrandProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    #[default]
    Prospect,
    Contacted,
    Negotiating,
    Active,
    Inactive,
}

impl std::fmt::Display for PartnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartnerStatus::Prospect => write!(f, "prospect"),
            PartnerStatus::Contacted => write!(f, "contacted"),
            PartnerStatus::Negotiating => write!(f, "negotiating"),
            PartnerStatus::Active => write!(f, "active"),
            PartnerStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for PartnerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "prospect" => Ok(PartnerStatus::Prospect),
            "contacted" => Ok(PartnerStatus::Contacted),
            "negotiating" => Ok(PartnerStatus::Negotiating),
            "active" => Ok(PartnerStatus::Active),
            "inactive" => Ok(PartnerStatus::Inactive),
            other => Err(format!("unknown partner status '{other}'")),
        }
    }
}

/// A candidate or current partner brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub brand: BrandProfile,
    #[serde(default)]
    pub status: PartnerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Partner {
    #[must_use]
    pub fn new(brand: BrandProfile) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            brand,
            status: PartnerStatus::default(),
            contact_email: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    ProfileUpdated,
    PartnerAdded,
    PartnerUpdated,
    PartnerRemoved,
    CollaborationAdded,
    CollaborationUpdated,
    TaskUpdated,
    MetricAdded,
    SettingsUpdated,
    DataImported,
}

/// One entry of the append-only activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    #[must_use]
    pub fn new(kind: ActivityKind, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A user-defined number tracked alongside partnerships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetric {
    pub id: Uuid,
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CustomMetric {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, unit: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value,
            unit,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// ISO 4217 code used when printing money.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Timeframe assumed for a case that does not state one.
    #[serde(default = "default_timeframe_months")]
    pub default_timeframe_months: i64,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_timeframe_months() -> i64 {
    12
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            default_timeframe_months: default_timeframe_months(),
        }
    }
}

/// Everything the tool persists, stored and exported as one JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootDocument {
    #[serde(default)]
    pub profile: Option<BrandProfile>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub collaborations: Vec<Collaboration>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub custom_metrics: Vec<CustomMetric>,
    #[serde(default)]
    pub settings: Settings,
}

impl RootDocument {
    #[must_use]
    pub fn partner(&self, id: Uuid) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn collaboration(&self, id: Uuid) -> Option<&Collaboration> {
        self.collaborations.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_is_default_document() {
        let doc: RootDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, RootDocument::default());
        assert_eq!(doc.settings.currency, "USD");
        assert_eq!(doc.settings.default_timeframe_months, 12);
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let json = serde_json::to_value(RootDocument::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "profile",
            "partners",
            "collaborations",
            "activities",
            "customMetrics",
            "settings",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn partner_lookup_by_id() {
        let mut doc = RootDocument::default();
        let partner = Partner::new(BrandProfile {
            name: "Acme".to_string(),
            ..BrandProfile::default()
        });
        let id = partner.id;
        doc.partners.push(partner);
        assert_eq!(doc.partner(id).map(|p| p.brand.name.as_str()), Some("Acme"));
        assert!(doc.partner(Uuid::new_v4()).is_none());
    }

    #[test]
    fn partner_status_parses_cli_input() {
        assert_eq!("active".parse::<PartnerStatus>(), Ok(PartnerStatus::Active));
        assert!("gone".parse::<PartnerStatus>().is_err());
    }
}
