use brandmatch_core::StrategicFactors;
use serde::Serialize;

use super::{budget_total, dimension_score, mean_score};

// Point budgets per input, in the order the inputs are listed below.
const AUDIENCE: [u32; 3] = [40, 35, 25];
const BRAND: [u32; 3] = [40, 35, 25];
const INNOVATION: [u32; 2] = [50, 50];
const MARKET_ACCESS: [u32; 3] = [50, 30, 20];
const RELATIONSHIP: [u32; 2] = [60, 40];

const _: () = assert!(budget_total(&AUDIENCE) == 100);
const _: () = assert!(budget_total(&BRAND) == 100);
const _: () = assert!(budget_total(&INNOVATION) == 100);
const _: () = assert!(budget_total(&MARKET_ACCESS) == 100);
const _: () = assert!(budget_total(&RELATIONSHIP) == 100);

/// Strategic value of a partnership, each dimension in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicValue {
    pub audience: u8,
    pub brand: u8,
    pub innovation: u8,
    pub market_access: u8,
    pub relationship: u8,
    /// Unweighted mean of the five dimensions.
    pub overall: u8,
}

#[must_use]
pub fn calculate_strategic_value(factors: &StrategicFactors) -> StrategicValue {
    let audience = dimension_score(&[
        (factors.audience_overlap, AUDIENCE[0]),
        (factors.audience_growth, AUDIENCE[1]),
        (factors.demographic_alignment, AUDIENCE[2]),
    ]);
    let brand = dimension_score(&[
        (factors.brand_alignment, BRAND[0]),
        (factors.brand_awareness_lift, BRAND[1]),
        (factors.brand_perception, BRAND[2]),
    ]);
    let innovation = dimension_score(&[
        (factors.innovation_potential, INNOVATION[0]),
        (factors.knowledge_transfer, INNOVATION[1]),
    ]);
    let market_access = dimension_score(&[
        (factors.new_market_access, MARKET_ACCESS[0]),
        (factors.distribution_channels, MARKET_ACCESS[1]),
        (factors.competitive_advantage, MARKET_ACCESS[2]),
    ]);
    let relationship = dimension_score(&[
        (factors.long_term_potential, RELATIONSHIP[0]),
        (factors.relationship_strength, RELATIONSHIP[1]),
    ]);

    StrategicValue {
        audience,
        brand,
        innovation,
        market_access,
        relationship,
        overall: mean_score(&[audience, brand, innovation, market_access, relationship]),
    }
}
