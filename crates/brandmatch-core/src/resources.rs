use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::PartnershipType;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Guide,
    Template,
    CaseStudy,
    Checklist,
    Webinar,
    Article,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Guide => write!(f, "guide"),
            ResourceType::Template => write!(f, "template"),
            ResourceType::CaseStudy => write!(f, "case-study"),
            ResourceType::Checklist => write!(f, "checklist"),
            ResourceType::Webinar => write!(f, "webinar"),
            ResourceType::Article => write!(f, "article"),
            ResourceType::Other => write!(f, "other"),
        }
    }
}

/// A read-only entry in the partnership resource library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub industry: String,
    pub partnership_type: PartnershipType,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub created_at: NaiveDate,
}

impl Resource {
    /// URL-safe slug derived from the title; identifies the resource.
    #[must_use]
    pub fn slug(&self) -> String {
        self.title
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct ResourcesFile {
    pub resources: Vec<Resource>,
}

/// Load and validate a resource catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_resources(path: &Path) -> Result<ResourcesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ResourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let resources_file: ResourcesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::ResourcesFileParse)?;

    validate_resources(&resources_file)?;

    tracing::debug!(
        path = %path.display(),
        count = resources_file.resources.len(),
        "loaded resource catalog"
    );
    Ok(resources_file)
}

fn validate_resources(resources_file: &ResourcesFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for resource in &resources_file.resources {
        if resource.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "resource title must be non-empty".to_string(),
            ));
        }

        if resource.industry.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "resource '{}' has an empty industry",
                resource.title
            )));
        }

        let slug = resource.slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "resource '{}' produces an empty slug",
                resource.title
            )));
        }
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate resource slug: '{}' (from resource '{}')",
                slug, resource.title
            )));
        }
    }

    Ok(())
}

fn entry(
    title: &str,
    description: &str,
    industry: &str,
    partnership_type: PartnershipType,
    resource_type: ResourceType,
    (y, m, d): (i32, u32, u32),
) -> Resource {
    Resource {
        title: title.to_string(),
        description: Some(description.to_string()),
        industry: industry.to_string(),
        partnership_type,
        resource_type,
        created_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

/// The built-in resource library used when no catalog file is configured.
#[must_use]
pub fn default_catalog() -> Vec<Resource> {
    use PartnershipType as P;
    use ResourceType as R;

    vec![
        entry(
            "Co-Branding Playbook",
            "Step-by-step guide to planning and launching a co-branded product line.",
            "retail",
            P::CoBranding,
            R::Guide,
            (2024, 1, 15),
        ),
        entry(
            "Partnership Agreement Template",
            "Editable agreement covering scope, IP ownership, revenue share and exit terms.",
            "technology",
            P::JointVenture,
            R::Template,
            (2024, 2, 3),
        ),
        entry(
            "Beverage Festival Sponsorship Case Study",
            "How a regional beverage brand doubled trial through festival sponsorships.",
            "beverage",
            P::Sponsorship,
            R::CaseStudy,
            (2024, 3, 21),
        ),
        entry(
            "Co-Marketing Campaign Checklist",
            "Pre-launch checklist for shared campaigns: assets, approvals, tracking links.",
            "technology",
            P::CoMarketing,
            R::Checklist,
            (2024, 4, 9),
        ),
        entry(
            "Affiliate Program Launch Guide",
            "Commission models, partner onboarding and fraud controls for affiliate programs.",
            "retail",
            P::Affiliate,
            R::Guide,
            (2024, 5, 12),
        ),
        entry(
            "Limited Edition Product Collaboration",
            "Case study of a fashion and beauty capsule collection built in twelve weeks.",
            "fashion",
            P::ProductCollaboration,
            R::CaseStudy,
            (2024, 6, 30),
        ),
        entry(
            "Creator Content Series Template",
            "Content calendar and brief template for a joint creator series.",
            "entertainment",
            P::ContentCollaboration,
            R::Template,
            (2024, 7, 18),
        ),
        entry(
            "Pop-Up Event Planning Webinar",
            "Recorded session on co-hosted pop-ups: venue, staffing, measurement.",
            "food",
            P::Event,
            R::Webinar,
            (2024, 8, 22),
        ),
        entry(
            "Measuring Partnership ROI",
            "Article on attributing revenue, savings and customer value to partnerships.",
            "finance",
            P::JointVenture,
            R::Article,
            (2024, 9, 5),
        ),
        entry(
            "Health and Wellness Co-Branding Guide",
            "Regulatory and messaging considerations for wellness co-branded launches.",
            "health",
            P::CoBranding,
            R::Guide,
            (2024, 10, 14),
        ),
    ]
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod tests;
