use brandmatch_core::{BrandProfile, PartnershipType};
use serde::Serialize;

use super::{sub_scores, Dimension, IndustryMatch};
use crate::to_score;

/// A dimension at or above this score is listed as a strength.
pub const STRENGTH_THRESHOLD: u8 = 70;
/// A dimension below this score is listed as a weakness.
pub const WEAKNESS_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Sub-score scaled to `[0, 100]`.
    pub score: u8,
    pub weight_percent: u32,
}

/// Full explanation of a compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub score: u8,
    pub industry_match: IndustryMatch,
    pub breakdown: Vec<DimensionScore>,
    pub strengths: Vec<Dimension>,
    pub weaknesses: Vec<Dimension>,
    pub recommendations: Vec<String>,
    pub suggested_partnership_types: Vec<PartnershipType>,
}

impl CompatibilityReport {
    #[must_use]
    pub fn dimension_score(&self, dimension: Dimension) -> u8 {
        self.breakdown
            .iter()
            .find(|d| d.dimension == dimension)
            .map_or(0, |d| d.score)
    }
}

fn overall_verdict(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Excellent match: prioritize outreach and propose a pilot collaboration.",
        60..=79 => "Good match: explore a limited-scope partnership to validate fit.",
        40..=59 => "Moderate match: address the weaker dimensions before committing resources.",
        _ => "Weak match: look at other partners unless there is a specific strategic reason.",
    }
}

fn weakness_advice(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Industry => {
            "Industries are unrelated: define a clear shared customer before pitching a joint offer."
        }
        Dimension::Values => {
            "Few shared values: agree on messaging guardrails early to protect both brands."
        }
        Dimension::Objectives => {
            "Partnership objectives diverge: align on success metrics before scoping the work."
        }
        Dimension::Geography => {
            "Geographic reach differs: start in the markets both brands already serve."
        }
        Dimension::CompanySize => {
            "Company sizes differ widely: plan for different approval speeds and resource levels."
        }
    }
}

fn suggested_types(
    a: &BrandProfile,
    b: &BrandProfile,
    industry_match: IndustryMatch,
    report: &CompatibilityReport,
) -> Vec<PartnershipType> {
    let mut types = Vec::new();
    let score = |d| report.dimension_score(d);

    if score(Dimension::Values) >= 70 && a.industry_key() != b.industry_key() {
        types.push(PartnershipType::CoBranding);
    }
    if score(Dimension::Objectives) >= 70 {
        types.push(PartnershipType::CoMarketing);
    }
    if industry_match == IndustryMatch::Complementary {
        types.push(PartnershipType::ProductCollaboration);
    }
    if score(Dimension::Geography) >= 80 {
        types.push(PartnershipType::Event);
    }
    if score(Dimension::CompanySize) < 50 {
        types.push(PartnershipType::Sponsorship);
    }
    if types.is_empty() {
        types.push(PartnershipType::ContentCollaboration);
    }
    types
}

/// Score `b` against `a` and explain the result.
#[must_use]
pub fn compatibility_report(a: &BrandProfile, b: &BrandProfile) -> CompatibilityReport {
    let subs = sub_scores(a, b);
    let industry_match = IndustryMatch::between(a, b);

    let breakdown: Vec<DimensionScore> = Dimension::ALL
        .iter()
        .map(|d| DimensionScore {
            dimension: *d,
            score: to_score(subs.get(*d) * 100.0),
            weight_percent: d.weight_percent(),
        })
        .collect();

    let strengths = breakdown
        .iter()
        .filter(|d| d.score >= STRENGTH_THRESHOLD)
        .map(|d| d.dimension)
        .collect();
    let weaknesses: Vec<Dimension> = breakdown
        .iter()
        .filter(|d| d.score < WEAKNESS_THRESHOLD)
        .map(|d| d.dimension)
        .collect();

    let score = to_score(100.0 * subs.weighted_total());
    let mut recommendations = vec![overall_verdict(score).to_string()];
    recommendations.extend(weaknesses.iter().map(|d| weakness_advice(*d).to_string()));

    let mut report = CompatibilityReport {
        score,
        industry_match,
        breakdown,
        strengths,
        weaknesses,
        recommendations,
        suggested_partnership_types: Vec::new(),
    };
    report.suggested_partnership_types = suggested_types(a, b, industry_match, &report);

    tracing::debug!(
        first = %a.name,
        second = %b.name,
        score = report.score,
        weaknesses = report.weaknesses.len(),
        "built compatibility report"
    );
    report
}
