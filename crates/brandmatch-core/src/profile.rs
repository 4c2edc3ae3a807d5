use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Company size bands used by the compatibility matrices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
    /// Any value not recognized on input, kept verbatim so it round-trips
    /// and still compares equal to itself.
    #[serde(untagged)]
    Unknown(String),
}

impl Default for CompanySize {
    fn default() -> Self {
        CompanySize::Unknown(String::new())
    }
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::Startup,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    /// Row/column index into a 5×5 size matrix. `None` for `Unknown`.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        Self::ALL.iter().position(|s| s == self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Enterprise => "enterprise",
            CompanySize::Unknown(raw) => raw.as_str(),
        }
    }

    /// Normalized key used for equality checks during scoring.
    #[must_use]
    pub fn key(&self) -> String {
        normalize_key(self.as_str())
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_or_unknown(self.as_str(), f)
    }
}

/// Geographic reach of a brand, ordered from narrowest to widest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeographicFocus {
    Local,
    Regional,
    National,
    International,
    Global,
    #[serde(untagged)]
    Unknown(String),
}

impl Default for GeographicFocus {
    fn default() -> Self {
        GeographicFocus::Unknown(String::new())
    }
}

impl GeographicFocus {
    pub const ALL: [GeographicFocus; 5] = [
        GeographicFocus::Local,
        GeographicFocus::Regional,
        GeographicFocus::National,
        GeographicFocus::International,
        GeographicFocus::Global,
    ];

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        Self::ALL.iter().position(|g| g == self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            GeographicFocus::Local => "local",
            GeographicFocus::Regional => "regional",
            GeographicFocus::National => "national",
            GeographicFocus::International => "international",
            GeographicFocus::Global => "global",
            GeographicFocus::Unknown(raw) => raw.as_str(),
        }
    }

    #[must_use]
    pub fn key(&self) -> String {
        normalize_key(self.as_str())
    }
}

impl std::fmt::Display for GeographicFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_or_unknown(self.as_str(), f)
    }
}

fn display_or_unknown(raw: &str, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if raw.trim().is_empty() {
        f.write_str("unknown")
    } else {
        f.write_str(raw)
    }
}

/// Kinds of brand partnership. Shared by profiles, resources and the
/// compatibility report's suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnershipType {
    CoBranding,
    CoMarketing,
    Sponsorship,
    JointVenture,
    Affiliate,
    ProductCollaboration,
    ContentCollaboration,
    Event,
    #[serde(other)]
    Other,
}

impl PartnershipType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PartnershipType::CoBranding => "co-branding",
            PartnershipType::CoMarketing => "co-marketing",
            PartnershipType::Sponsorship => "sponsorship",
            PartnershipType::JointVenture => "joint-venture",
            PartnershipType::Affiliate => "affiliate",
            PartnershipType::ProductCollaboration => "product-collaboration",
            PartnershipType::ContentCollaboration => "content-collaboration",
            PartnershipType::Event => "event",
            PartnershipType::Other => "other",
        }
    }
}

impl std::fmt::Display for PartnershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a brand wants out of a partnership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipPreferences {
    #[serde(default)]
    pub objectives: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_types: Vec<PartnershipType>,
}

/// A brand as described by its owner: the input to compatibility scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: CompanySize,
    #[serde(default)]
    pub geographic_focus: GeographicFocus,
    #[serde(default)]
    pub values: BTreeSet<String>,
    #[serde(default)]
    pub partnership: PartnershipPreferences,
}

impl BrandProfile {
    /// Industry key used for comparisons.
    #[must_use]
    pub fn industry_key(&self) -> String {
        normalize_key(&self.industry)
    }

    /// Values normalized for set comparison; blank entries are dropped.
    #[must_use]
    pub fn value_keys(&self) -> BTreeSet<String> {
        normalize_set(&self.values)
    }

    /// Partnership objectives normalized for set comparison.
    #[must_use]
    pub fn objective_keys(&self) -> BTreeSet<String> {
        normalize_set(&self.partnership.objectives)
    }
}

/// Trim and lowercase a free-text key so `" Retail"` and `"retail"` match.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn normalize_set(items: &BTreeSet<String>) -> BTreeSet<String> {
    items
        .iter()
        .map(|s| normalize_key(s))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_enum_values_keep_their_raw_text() {
        let profile: BrandProfile = serde_json::from_str(
            r#"{"name":"Acme","industry":"retail","companySize":"huge","geographicFocus":"orbital"}"#,
        )
        .unwrap();
        assert_eq!(profile.company_size, CompanySize::Unknown("huge".to_string()));
        assert_eq!(
            profile.geographic_focus,
            GeographicFocus::Unknown("orbital".to_string())
        );
        assert_eq!(profile.company_size.index(), None);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["companySize"], "huge");
        assert_eq!(json["geographicFocus"], "orbital");
    }

    #[test]
    fn missing_size_and_geography_default_to_blank_unknown() {
        let profile: BrandProfile = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(profile.company_size, CompanySize::default());
        assert_eq!(profile.company_size.to_string(), "unknown");
        assert_eq!(profile.geographic_focus.to_string(), "unknown");
    }

    #[test]
    fn enum_keys_are_normalized() {
        assert_eq!(CompanySize::Small.key(), "small");
        assert_eq!(CompanySize::Unknown(" Micro ".to_string()).key(), "micro");
        assert_eq!(GeographicFocus::Global.key(), "global");
    }

    #[test]
    fn known_enum_values_have_matrix_indices() {
        assert_eq!(CompanySize::Startup.index(), Some(0));
        assert_eq!(CompanySize::Enterprise.index(), Some(4));
        assert_eq!(GeographicFocus::Local.index(), Some(0));
        assert_eq!(GeographicFocus::Global.index(), Some(4));
    }

    #[test]
    fn partnership_type_uses_kebab_case() {
        let json = serde_json::to_string(&PartnershipType::CoBranding).unwrap();
        assert_eq!(json, r#""co-branding""#);
        let parsed: PartnershipType = serde_json::from_str(r#""pop-up-shop""#).unwrap();
        assert_eq!(parsed, PartnershipType::Other);
    }

    #[test]
    fn value_keys_are_normalized() {
        let profile = BrandProfile {
            values: [" Sustainability", "INNOVATION", "  "]
                .into_iter()
                .map(String::from)
                .collect(),
            ..BrandProfile::default()
        };
        let keys = profile.value_keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("sustainability"));
        assert!(keys.contains("innovation"));
    }

    #[test]
    fn nested_objectives_deserialize() {
        let profile: BrandProfile = serde_yaml::from_str(
            "name: Acme\nindustry: Food\npartnership:\n  objectives: [brand-awareness, revenue-growth]\n",
        )
        .unwrap();
        assert_eq!(profile.industry_key(), "food");
        assert_eq!(profile.objective_keys().len(), 2);
    }
}
