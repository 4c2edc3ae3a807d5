//! Lookup tables for the compatibility sub-scores.
//!
//! The geography and company-size matrices are indexed by the enums' `index()`
//! and must stay symmetric; see the tests at the bottom of this file.

use brandmatch_core::{CompanySize, GeographicFocus};

/// Sub-score when both industries are the same.
pub const INDUSTRY_SAME: f64 = 1.0;
/// Sub-score when `b`'s industry complements `a`'s.
pub const INDUSTRY_COMPLEMENTARY: f64 = 0.7;
/// Sub-score for unrelated industries.
pub const INDUSTRY_UNRELATED: f64 = 0.3;

/// Geography sub-score when either side is unknown.
pub const GEOGRAPHY_DEFAULT: f64 = 0.3;
/// Company-size sub-score when either side is unknown.
pub const SIZE_DEFAULT: f64 = 0.5;

/// Directed table: industries that complement the key industry.
///
/// Lookup is keyed by the first profile's industry only, so a pair may be
/// complementary in one direction and unrelated in the other.
pub const COMPLEMENTARY_INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &["retail", "healthcare", "finance", "education", "entertainment"],
    ),
    ("retail", &["technology", "fashion", "food", "logistics"]),
    ("fashion", &["beauty", "retail", "entertainment", "sports"]),
    ("beauty", &["fashion", "health", "retail"]),
    ("food", &["beverage", "retail", "health", "hospitality"]),
    ("beverage", &["food", "entertainment", "sports", "hospitality"]),
    ("health", &["fitness", "food", "beauty", "technology"]),
    ("healthcare", &["technology", "insurance", "fitness"]),
    ("fitness", &["health", "sports", "apparel", "food"]),
    ("sports", &["beverage", "fitness", "apparel", "entertainment"]),
    ("entertainment", &["technology", "beverage", "fashion", "sports"]),
    ("finance", &["technology", "real-estate", "insurance"]),
    ("travel", &["hospitality", "finance", "entertainment"]),
    ("hospitality", &["travel", "food", "beverage"]),
    ("education", &["technology", "publishing"]),
    ("automotive", &["technology", "insurance", "travel"]),
];

/// Rows and columns ordered local, regional, national, international, global.
pub const GEOGRAPHY_MATRIX: [[f64; 5]; 5] = [
    [1.0, 0.8, 0.5, 0.3, 0.2],
    [0.8, 1.0, 0.8, 0.5, 0.4],
    [0.5, 0.8, 1.0, 0.8, 0.6],
    [0.3, 0.5, 0.8, 1.0, 0.9],
    [0.2, 0.4, 0.6, 0.9, 1.0],
];

/// Rows and columns ordered startup, small, medium, large, enterprise.
pub const SIZE_MATRIX: [[f64; 5]; 5] = [
    [1.0, 0.8, 0.6, 0.4, 0.3],
    [0.8, 1.0, 0.8, 0.5, 0.4],
    [0.6, 0.8, 1.0, 0.8, 0.6],
    [0.4, 0.5, 0.8, 1.0, 0.8],
    [0.3, 0.4, 0.6, 0.8, 1.0],
];

/// `true` when `candidate` appears in the complementary list for `industry`.
/// Both arguments must already be normalized keys.
#[must_use]
pub fn is_complementary(industry: &str, candidate: &str) -> bool {
    COMPLEMENTARY_INDUSTRIES
        .iter()
        .find(|(key, _)| *key == industry)
        .is_some_and(|(_, related)| related.contains(&candidate))
}

#[must_use]
pub fn geography_compatibility(a: &GeographicFocus, b: &GeographicFocus) -> f64 {
    match (a.index(), b.index()) {
        (Some(i), Some(j)) => GEOGRAPHY_MATRIX[i][j],
        _ => GEOGRAPHY_DEFAULT,
    }
}

#[must_use]
pub fn size_compatibility(a: &CompanySize, b: &CompanySize) -> f64 {
    match (a.index(), b.index()) {
        (Some(i), Some(j)) => SIZE_MATRIX[i][j],
        _ => SIZE_DEFAULT,
    }
}
