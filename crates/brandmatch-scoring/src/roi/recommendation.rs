use serde::Serialize;

use super::financial::FinancialRoi;
use super::risk::RiskAssessment;
use super::strategic::StrategicValue;
use crate::to_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Verdict {
    #[serde(rename = "Not Recommended")]
    NotRecommended,
    #[serde(rename = "Consider with Modifications")]
    ConsiderWithModifications,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Strongly Recommended")]
    StronglyRecommended,
}

impl Verdict {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Verdict::StronglyRecommended,
            60..=79 => Verdict::Recommended,
            40..=59 => Verdict::ConsiderWithModifications,
            _ => Verdict::NotRecommended,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::StronglyRecommended => write!(f, "Strongly Recommended"),
            Verdict::Recommended => write!(f, "Recommended"),
            Verdict::ConsiderWithModifications => write!(f, "Consider with Modifications"),
            Verdict::NotRecommended => write!(f, "Not Recommended"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Points from ROI alone, `0..=40`.
    pub financial_component: u8,
    pub strategic_component: f64,
    pub risk_component: f64,
    pub overall_score: u8,
    pub verdict: Verdict,
}

/// Step function of ROI percentage onto `0..=40` points.
#[must_use]
pub fn financial_component(roi_percentage: f64) -> u8 {
    if roi_percentage > 200.0 {
        40
    } else if roi_percentage > 100.0 {
        30
    } else if roi_percentage > 50.0 {
        20
    } else if roi_percentage > 0.0 {
        10
    } else {
        0
    }
}

/// Combine the three analyses into one score and verdict.
///
/// Without a financial result the ROI component contributes 0 points.
#[must_use]
pub fn recommend(
    financial: Option<&FinancialRoi>,
    strategic: &StrategicValue,
    risk: &RiskAssessment,
) -> Recommendation {
    let financial_points = financial.map_or(0, |f| financial_component(f.roi_percentage));
    let strategic_component = f64::from(strategic.overall) * 0.4;
    let risk_component = f64::from(100 - risk.overall.min(100)) * 0.2;
    let overall_score =
        to_score(f64::from(financial_points) + strategic_component + risk_component);

    Recommendation {
        financial_component: financial_points,
        strategic_component,
        risk_component,
        overall_score,
        verdict: Verdict::from_score(overall_score),
    }
}
