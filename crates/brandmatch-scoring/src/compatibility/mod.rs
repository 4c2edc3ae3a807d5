//! Compatibility scoring between two brand profiles.
//!
//! Five weighted sub-scores in `[0.0, 1.0]` combine into an integer score in
//! `[0, 100]`.

mod report;
pub mod tables;

use std::collections::BTreeSet;

use brandmatch_core::BrandProfile;
use serde::Serialize;

pub use report::{compatibility_report, CompatibilityReport, DimensionScore};

use crate::to_score;
use tables::{
    geography_compatibility, is_complementary, size_compatibility, INDUSTRY_COMPLEMENTARY,
    INDUSTRY_SAME, INDUSTRY_UNRELATED,
};

// ---------------------------------------------------------------------------
// Weights (percent, must sum to exactly 100)
// ---------------------------------------------------------------------------

pub const W_INDUSTRY: u32 = 20;
pub const W_VALUES: u32 = 25;
pub const W_OBJECTIVES: u32 = 25;
pub const W_GEOGRAPHY: u32 = 15;
pub const W_COMPANY_SIZE: u32 = 15;

const _: () = assert!(
    W_INDUSTRY + W_VALUES + W_OBJECTIVES + W_GEOGRAPHY + W_COMPANY_SIZE == 100,
    "compatibility weights must sum to exactly 100"
);

/// The five scored dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Industry,
    Values,
    Objectives,
    Geography,
    CompanySize,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Industry,
        Dimension::Values,
        Dimension::Objectives,
        Dimension::Geography,
        Dimension::CompanySize,
    ];

    #[must_use]
    pub fn weight_percent(self) -> u32 {
        match self {
            Dimension::Industry => W_INDUSTRY,
            Dimension::Values => W_VALUES,
            Dimension::Objectives => W_OBJECTIVES,
            Dimension::Geography => W_GEOGRAPHY,
            Dimension::CompanySize => W_COMPANY_SIZE,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Industry => "industry",
            Dimension::Values => "values",
            Dimension::Objectives => "objectives",
            Dimension::Geography => "geography",
            Dimension::CompanySize => "company size",
        }
    }
}

/// How two industries relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IndustryMatch {
    Same,
    Complementary,
    Unrelated,
}

impl IndustryMatch {
    #[must_use]
    pub fn between(a: &BrandProfile, b: &BrandProfile) -> Self {
        let (a, b) = (a.industry_key(), b.industry_key());
        if a == b {
            IndustryMatch::Same
        } else if is_complementary(&a, &b) {
            IndustryMatch::Complementary
        } else {
            IndustryMatch::Unrelated
        }
    }

    #[must_use]
    pub fn sub_score(self) -> f64 {
        match self {
            IndustryMatch::Same => INDUSTRY_SAME,
            IndustryMatch::Complementary => INDUSTRY_COMPLEMENTARY,
            IndustryMatch::Unrelated => INDUSTRY_UNRELATED,
        }
    }
}

/// Raw sub-scores in `[0.0, 1.0]` for each dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub industry: f64,
    pub values: f64,
    pub objectives: f64,
    pub geography: f64,
    pub company_size: f64,
}

impl SubScores {
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Industry => self.industry,
            Dimension::Values => self.values,
            Dimension::Objectives => self.objectives,
            Dimension::Geography => self.geography,
            Dimension::CompanySize => self.company_size,
        }
    }

    /// Weighted sum in `[0.0, 1.0]`.
    #[must_use]
    pub fn weighted_total(&self) -> f64 {
        Dimension::ALL
            .iter()
            .map(|d| f64::from(d.weight_percent()) / 100.0 * self.get(*d).clamp(0.0, 1.0))
            .sum()
    }
}

/// `|shared| / min(|a|, |b|)`, or `0.0` when either set is empty.
#[must_use]
pub fn overlap_ratio(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = shared as f64 / smaller as f64;
    ratio
}

#[must_use]
pub fn sub_scores(a: &BrandProfile, b: &BrandProfile) -> SubScores {
    let geography = if a.geographic_focus.key() == b.geographic_focus.key() {
        1.0
    } else {
        geography_compatibility(&a.geographic_focus, &b.geographic_focus)
    };
    let company_size = if a.company_size.key() == b.company_size.key() {
        1.0
    } else {
        size_compatibility(&a.company_size, &b.company_size)
    };

    SubScores {
        industry: IndustryMatch::between(a, b).sub_score(),
        values: overlap_ratio(&a.value_keys(), &b.value_keys()),
        objectives: overlap_ratio(&a.objective_keys(), &b.objective_keys()),
        geography,
        company_size,
    }
}

/// Compatibility of `b` as a partner for `a`, in `[0, 100]`.
#[must_use]
pub fn compatibility_score(a: &BrandProfile, b: &BrandProfile) -> u8 {
    to_score(100.0 * sub_scores(a, b).weighted_total())
}

/// Like [`compatibility_score`], but tolerates absent profiles by scoring 0.
#[must_use]
pub fn score_profiles(a: Option<&BrandProfile>, b: Option<&BrandProfile>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) => compatibility_score(a, b),
        _ => {
            tracing::warn!(
                has_first = a.is_some(),
                has_second = b.is_some(),
                "compatibility requested without both profiles, scoring 0"
            );
            0
        }
    }
}
