//! Inputs to the ROI engine.
//!
//! Every numeric field is optional and lenient: a missing or malformed value
//! contributes nothing.

use serde::{Deserialize, Serialize};

use crate::numeric::{lenient_f64, lenient_i64};

/// Costs committed to a partnership over its timeframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub direct_costs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub staff_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub resource_allocation: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub marketing_costs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub technology_costs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub other_costs: Option<f64>,
}

/// Expected returns. `direct_revenue` and `cost_savings` are monthly figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Returns {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub direct_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub cost_savings: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub new_customers: Option<f64>,
    #[serde(
        default,
        rename = "customerLTV",
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_ltv: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub market_share_increase: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub market_share_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub other_returns: Option<f64>,
}

/// Strategic-value ratings, each on a 0–5 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicFactors {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub audience_overlap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub audience_growth: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub demographic_alignment: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub brand_alignment: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub brand_awareness_lift: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub brand_perception: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub innovation_potential: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub knowledge_transfer: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub new_market_access: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub distribution_channels: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub competitive_advantage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub long_term_potential: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub relationship_strength: Option<f64>,
}

/// Risk ratings, each on a 0–5 scale where higher means riskier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub financial_exposure: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub revenue_uncertainty: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub cost_overrun: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub partner_reputation: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub brand_misalignment: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub public_controversy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub execution_complexity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub resource_constraints: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub dependency_risk: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub market_volatility: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub competitive_conflict: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub exit_difficulty: Option<f64>,
}

/// Everything needed to evaluate one proposed partnership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment: Option<Investment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Returns>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub timeframe_months: i64,
    #[serde(default)]
    pub strategic_factors: StrategicFactors,
    #[serde(default)]
    pub risk_factors: RiskFactors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_deserializes_from_form_strings() {
        let case: PartnershipCase = serde_json::from_str(
            r#"{
                "investment": {"directCosts": "1000", "staffHours": "", "hourlyRate": "50"},
                "returns": {"directRevenue": 200, "customerLTV": "n/a"},
                "timeframeMonths": "12",
                "riskFactors": {"financialExposure": 3}
            }"#,
        )
        .unwrap();
        let investment = case.investment.unwrap();
        assert_eq!(investment.direct_costs, Some(1000.0));
        assert_eq!(investment.staff_hours, None);
        assert_eq!(investment.hourly_rate, Some(50.0));
        let returns = case.returns.unwrap();
        assert_eq!(returns.direct_revenue, Some(200.0));
        assert_eq!(returns.customer_ltv, None);
        assert_eq!(case.timeframe_months, 12);
        assert_eq!(case.risk_factors.financial_exposure, Some(3.0));
        assert_eq!(case.strategic_factors, StrategicFactors::default());
    }

    #[test]
    fn absent_sections_stay_absent() {
        let case: PartnershipCase = serde_json::from_str(r#"{"timeframeMonths": 6}"#).unwrap();
        assert!(case.investment.is_none());
        assert!(case.returns.is_none());
    }

    #[test]
    fn customer_ltv_keeps_wire_name() {
        let returns = Returns {
            customer_ltv: Some(80.0),
            ..Returns::default()
        };
        let json = serde_json::to_string(&returns).unwrap();
        assert_eq!(json, r#"{"customerLTV":80.0}"#);
    }
}
