//! ROI engine: financial return, strategic value, risk, and the combined
//! recommendation.
//!
//! Strategic and risk dimensions share one pattern: each input is a 0–5
//! rating mapped onto a point budget, and a dimension's budgets total 100.

mod financial;
mod recommendation;
mod risk;
mod strategic;

use brandmatch_core::PartnershipCase;
use serde::Serialize;

pub use financial::{calculate_financial_roi, total_investment, total_returns, FinancialRoi};
pub use recommendation::{financial_component, recommend, Recommendation, Verdict};
pub use risk::{assess_risk, Mitigation, RiskAssessment, RiskDimension, RiskLevel, Severity};
pub use strategic::{calculate_strategic_value, StrategicValue};

use crate::to_score;

/// Top of the rating scale.
pub const RATING_MAX: f64 = 5.0;

pub(crate) const fn budget_total(budgets: &[u32]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < budgets.len() {
        total += budgets[i];
        i += 1;
    }
    total
}

/// Points earned by one rating: `rating / 5 * budget`, rating clamped to the scale.
pub(crate) fn rating_points(rating: Option<f64>, budget: u32) -> f64 {
    rating.unwrap_or(0.0).clamp(0.0, RATING_MAX) / RATING_MAX * f64::from(budget)
}

pub(crate) fn dimension_score(inputs: &[(Option<f64>, u32)]) -> u8 {
    let raw: f64 = inputs
        .iter()
        .map(|(rating, budget)| rating_points(*rating, *budget))
        .sum();
    to_score(raw)
}

pub(crate) fn mean_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: f64 = scores.iter().copied().map(f64::from).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / scores.len() as f64;
    to_score(mean)
}

/// All four ROI analyses for one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiAnalysis {
    pub financial: Option<FinancialRoi>,
    pub strategic: StrategicValue,
    pub risk: RiskAssessment,
    pub recommendation: Recommendation,
}

#[must_use]
pub fn analyze_case(case: &PartnershipCase) -> RoiAnalysis {
    let financial = calculate_financial_roi(
        case.investment.as_ref(),
        case.returns.as_ref(),
        case.timeframe_months,
    );
    let strategic = calculate_strategic_value(&case.strategic_factors);
    let risk = assess_risk(&case.risk_factors);
    let recommendation = recommend(financial.as_ref(), &strategic, &risk);

    tracing::debug!(
        has_financial = financial.is_some(),
        strategic = strategic.overall,
        risk = risk.overall,
        score = recommendation.overall_score,
        "analyzed partnership case"
    );

    RoiAnalysis {
        financial,
        strategic,
        risk,
        recommendation,
    }
}
