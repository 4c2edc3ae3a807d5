use brandmatch_core::RiskFactors;
use serde::Serialize;

use super::{budget_total, dimension_score, mean_score};

const FINANCIAL: [u32; 3] = [40, 35, 25];
const REPUTATION: [u32; 3] = [50, 30, 20];
const OPERATIONAL: [u32; 3] = [40, 35, 25];
const STRATEGIC: [u32; 3] = [40, 35, 25];

const _: () = assert!(budget_total(&FINANCIAL) == 100);
const _: () = assert!(budget_total(&REPUTATION) == 100);
const _: () = assert!(budget_total(&OPERATIONAL) == 100);
const _: () = assert!(budget_total(&STRATEGIC) == 100);

/// Dimension score at or above which the severe mitigation applies.
pub const SEVERE_THRESHOLD: u8 = 60;
/// Dimension score at or above which the moderate mitigation applies.
pub const MODERATE_THRESHOLD: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => RiskLevel::Low,
            25..=49 => RiskLevel::Moderate,
            50..=74 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskDimension {
    Financial,
    Reputation,
    Operational,
    Strategic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mitigation {
    pub dimension: RiskDimension,
    pub severity: Severity,
    pub action: &'static str,
}

/// Risk profile of a partnership; higher is riskier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub financial: u8,
    pub reputation: u8,
    pub operational: u8,
    pub strategic: u8,
    pub overall: u8,
    pub level: RiskLevel,
    pub mitigations: Vec<Mitigation>,
}

fn mitigation_text(dimension: RiskDimension, severity: Severity) -> &'static str {
    match (dimension, severity) {
        (RiskDimension::Financial, Severity::Severe) => {
            "Stage the investment behind milestone-based payments and cap total exposure in the contract."
        }
        (RiskDimension::Financial, Severity::Moderate) => {
            "Set a budget review at the midpoint and track spend against projected returns monthly."
        }
        (RiskDimension::Reputation, Severity::Severe) => {
            "Run full due diligence on the partner and add morality and termination clauses."
        }
        (RiskDimension::Reputation, Severity::Moderate) => {
            "Agree on brand guidelines and a joint approval process for public messaging."
        }
        (RiskDimension::Operational, Severity::Severe) => {
            "Assign a dedicated partnership manager and reduce scope to a pilot before scaling."
        }
        (RiskDimension::Operational, Severity::Moderate) => {
            "Document responsibilities in a RACI chart and schedule weekly check-ins."
        }
        (RiskDimension::Strategic, Severity::Severe) => {
            "Negotiate exclusivity limits and a clear exit path before committing."
        }
        (RiskDimension::Strategic, Severity::Moderate) => {
            "Review market conditions quarterly and keep alternative partners warm."
        }
    }
}

fn mitigation_for(dimension: RiskDimension, score: u8) -> Option<Mitigation> {
    let severity = if score >= SEVERE_THRESHOLD {
        Severity::Severe
    } else if score >= MODERATE_THRESHOLD {
        Severity::Moderate
    } else {
        return None;
    };
    Some(Mitigation {
        dimension,
        severity,
        action: mitigation_text(dimension, severity),
    })
}

#[must_use]
pub fn assess_risk(factors: &RiskFactors) -> RiskAssessment {
    let financial = dimension_score(&[
        (factors.financial_exposure, FINANCIAL[0]),
        (factors.revenue_uncertainty, FINANCIAL[1]),
        (factors.cost_overrun, FINANCIAL[2]),
    ]);
    let reputation = dimension_score(&[
        (factors.partner_reputation, REPUTATION[0]),
        (factors.brand_misalignment, REPUTATION[1]),
        (factors.public_controversy, REPUTATION[2]),
    ]);
    let operational = dimension_score(&[
        (factors.execution_complexity, OPERATIONAL[0]),
        (factors.resource_constraints, OPERATIONAL[1]),
        (factors.dependency_risk, OPERATIONAL[2]),
    ]);
    let strategic = dimension_score(&[
        (factors.market_volatility, STRATEGIC[0]),
        (factors.competitive_conflict, STRATEGIC[1]),
        (factors.exit_difficulty, STRATEGIC[2]),
    ]);

    let overall = mean_score(&[financial, reputation, operational, strategic]);

    let mitigations = [
        (RiskDimension::Financial, financial),
        (RiskDimension::Reputation, reputation),
        (RiskDimension::Operational, operational),
        (RiskDimension::Strategic, strategic),
    ]
    .into_iter()
    .filter_map(|(dimension, score)| mitigation_for(dimension, score))
    .collect();

    RiskAssessment {
        financial,
        reputation,
        operational,
        strategic,
        overall,
        level: RiskLevel::from_score(overall),
        mitigations,
    }
}
