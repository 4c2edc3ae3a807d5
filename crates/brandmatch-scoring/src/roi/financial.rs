use brandmatch_core::{Investment, Returns};
use serde::Serialize;

/// Money in and money out over a partnership's timeframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRoi {
    pub total_investment: f64,
    pub total_returns: f64,
    pub net_return: f64,
    /// `net_return / total_investment * 100`, or `0.0` with no investment.
    pub roi_percentage: f64,
    pub monthly_return: f64,
    /// Months until returns cover the investment. `None` when returns are zero.
    pub payback_months: Option<f64>,
    pub timeframe_months: i64,
}

fn amount(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Sum of the six cost lines; staff cost is hours times rate.
#[must_use]
pub fn total_investment(investment: &Investment) -> f64 {
    amount(investment.direct_costs)
        + amount(investment.staff_hours) * amount(investment.hourly_rate)
        + amount(investment.resource_allocation)
        + amount(investment.marketing_costs)
        + amount(investment.technology_costs)
        + amount(investment.other_costs)
}

/// Returns accumulated over `months`. Revenue and savings are monthly.
#[must_use]
pub fn total_returns(returns: &Returns, months: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let months = months as f64;
    amount(returns.direct_revenue) * months
        + amount(returns.cost_savings) * months
        + amount(returns.new_customers) * amount(returns.customer_ltv)
        + amount(returns.market_share_increase) * amount(returns.market_share_value)
        + amount(returns.other_returns)
}

/// Compute financial ROI for a partnership.
///
/// Returns `None` when either side of the ledger is missing or the
/// timeframe is not positive.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn calculate_financial_roi(
    investment: Option<&Investment>,
    returns: Option<&Returns>,
    timeframe_months: i64,
) -> Option<FinancialRoi> {
    let (Some(investment), Some(returns)) = (investment, returns) else {
        tracing::warn!(
            has_investment = investment.is_some(),
            has_returns = returns.is_some(),
            "financial ROI needs both investment and returns"
        );
        return None;
    };
    if timeframe_months <= 0 {
        tracing::warn!(timeframe_months, "financial ROI needs a positive timeframe");
        return None;
    }

    let total_investment = total_investment(investment);
    let total_returns = total_returns(returns, timeframe_months);
    let net_return = total_returns - total_investment;

    let roi_percentage = if total_investment == 0.0 {
        0.0
    } else {
        net_return / total_investment * 100.0
    };

    #[allow(clippy::cast_precision_loss)]
    let monthly_return = total_returns / timeframe_months as f64;
    let payback_months = if total_returns == 0.0 {
        None
    } else {
        Some(total_investment / monthly_return)
    };

    Some(FinancialRoi {
        total_investment,
        total_returns,
        net_return,
        roi_percentage,
        monthly_return,
        payback_months,
        timeframe_months,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn basic_example() {
        let investment = Investment {
            direct_costs: Some(1000.0),
            ..Investment::default()
        };
        let returns = Returns {
            direct_revenue: Some(200.0),
            ..Returns::default()
        };
        let roi = calculate_financial_roi(Some(&investment), Some(&returns), 12).unwrap();
        assert_eq!(roi.total_investment, 1000.0);
        assert_eq!(roi.total_returns, 2400.0);
        assert_eq!(roi.net_return, 1400.0);
        assert_eq!(roi.roi_percentage, 140.0);
        assert_eq!(roi.monthly_return, 200.0);
        assert_eq!(roi.payback_months, Some(5.0));
    }

    #[test]
    fn every_cost_line_counts() {
        let investment = Investment {
            direct_costs: Some(100.0),
            staff_hours: Some(10.0),
            hourly_rate: Some(50.0),
            resource_allocation: Some(25.0),
            marketing_costs: Some(75.0),
            technology_costs: Some(200.0),
            other_costs: Some(100.0),
        };
        assert_eq!(total_investment(&investment), 1000.0);
    }

    #[test]
    fn every_return_line_counts() {
        let returns = Returns {
            direct_revenue: Some(100.0),
            cost_savings: Some(50.0),
            new_customers: Some(10.0),
            customer_ltv: Some(30.0),
            market_share_increase: Some(2.0),
            market_share_value: Some(500.0),
            other_returns: Some(200.0),
        };
        // 100*6 + 50*6 + 10*30 + 2*500 + 200
        assert_eq!(total_returns(&returns, 6), 2400.0);
    }

    #[test]
    fn staff_hours_without_rate_cost_nothing() {
        let investment = Investment {
            staff_hours: Some(40.0),
            ..Investment::default()
        };
        assert_eq!(total_investment(&investment), 0.0);
    }

    #[test]
    fn zero_investment_gives_zero_percentage() {
        let returns = Returns {
            other_returns: Some(500.0),
            ..Returns::default()
        };
        let roi = calculate_financial_roi(Some(&Investment::default()), Some(&returns), 3).unwrap();
        assert_eq!(roi.roi_percentage, 0.0);
        assert_eq!(roi.payback_months, Some(0.0));
    }

    #[test]
    fn zero_returns_never_pay_back() {
        let investment = Investment {
            direct_costs: Some(500.0),
            ..Investment::default()
        };
        let roi = calculate_financial_roi(Some(&investment), Some(&Returns::default()), 12).unwrap();
        assert_eq!(roi.payback_months, None);
        assert_eq!(roi.roi_percentage, -100.0);
    }

    #[test]
    fn missing_inputs_or_bad_timeframe_yield_none() {
        let investment = Investment::default();
        let returns = Returns::default();
        assert!(calculate_financial_roi(None, Some(&returns), 12).is_none());
        assert!(calculate_financial_roi(Some(&investment), None, 12).is_none());
        assert!(calculate_financial_roi(Some(&investment), Some(&returns), 0).is_none());
        assert!(calculate_financial_roi(Some(&investment), Some(&returns), -4).is_none());
    }
}
