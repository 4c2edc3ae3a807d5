//! Scoring and aggregation for brand partnerships.
//!
//! Every function here is pure: it borrows plain records from
//! `brandmatch-core` and returns new result values. Missing inputs produce
//! zero or `None` results and a `tracing` warning instead of an error.

pub mod compatibility;
pub mod partners;
pub mod progress;
pub mod ranking;
pub mod roi;

pub use compatibility::{
    compatibility_report, compatibility_score, score_profiles, CompatibilityReport, Dimension,
};
pub use partners::{find_most_promising_partners, PartnerMatch};
pub use progress::{
    calculate_milestone_progress, calculate_progress, calculate_task_progress,
    CollaborationProgress, MilestoneProgress, ScheduleStatus, TaskProgress,
};
pub use ranking::{recommended_resources, related_resources, RankedResource};
pub use roi::{
    analyze_case, assess_risk, calculate_financial_roi, calculate_strategic_value, recommend,
    FinancialRoi, Recommendation, RiskAssessment, RiskLevel, RoiAnalysis, StrategicValue,
};

/// Round a raw score and clamp it into `[0, 100]`.
#[must_use]
pub(crate) fn to_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = raw.round().clamp(0.0, 100.0) as u8;
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_score_rounds_half_away_from_zero() {
        assert_eq!(to_score(49.5), 50);
        assert_eq!(to_score(49.49), 49);
    }

    #[test]
    fn to_score_clamps() {
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(140.0), 100);
        assert_eq!(to_score(f64::NAN), 0);
    }
}
