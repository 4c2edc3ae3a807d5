//! Cross-module checks over the public scoring API.

use brandmatch_core::{
    BrandProfile, CompanySize, GeographicFocus, Investment, Partner, PartnershipPreferences,
    Returns, RiskFactors, Task, TaskStatus,
};
use brandmatch_scoring::{
    assess_risk, calculate_financial_roi, calculate_milestone_progress, calculate_task_progress,
    compatibility_score, find_most_promising_partners,
};

fn profile(
    industry: &str,
    size: CompanySize,
    geo: GeographicFocus,
    values: &[&str],
    objectives: &[&str],
) -> BrandProfile {
    BrandProfile {
        name: format!("{industry}-{size}-{geo}"),
        industry: industry.to_string(),
        company_size: size,
        geographic_focus: geo,
        values: values.iter().map(|v| (*v).to_string()).collect(),
        partnership: PartnershipPreferences {
            objectives: objectives.iter().map(|o| (*o).to_string()).collect(),
            preferred_types: Vec::new(),
        },
        ..BrandProfile::default()
    }
}

fn sample_profiles() -> Vec<BrandProfile> {
    let industries = ["technology", "food", "fashion", "mining", ""];
    let value_sets: [&[&str]; 3] = [&[], &["sustainability"], &["quality", "innovation"]];
    let mut out = Vec::new();
    for (i, industry) in industries.iter().enumerate() {
        for (j, size) in CompanySize::ALL.into_iter().enumerate() {
            let geo = GeographicFocus::ALL[(i + j) % GeographicFocus::ALL.len()].clone();
            let values = value_sets[(i + j) % value_sets.len()];
            out.push(profile(industry, size, geo, values, &["brand-awareness"]));
        }
    }
    out.push(BrandProfile::default());
    out
}

#[test]
fn compatibility_stays_in_range() {
    let profiles = sample_profiles();
    for a in &profiles {
        for b in &profiles {
            let score = compatibility_score(a, b);
            assert!(score <= 100, "{} vs {} scored {score}", a.name, b.name);
        }
    }
}

#[test]
fn fully_described_profile_matches_itself_perfectly() {
    let a = profile(
        "food",
        CompanySize::Medium,
        GeographicFocus::National,
        &["quality"],
        &["revenue-growth"],
    );
    assert_eq!(compatibility_score(&a, &a), 100);
}

#[test]
fn unrecognized_size_and_geography_match_themselves() {
    let a = profile(
        "food",
        CompanySize::Unknown("micro".to_string()),
        GeographicFocus::Unknown("continental".to_string()),
        &["quality"],
        &["revenue-growth"],
    );
    assert_eq!(compatibility_score(&a, &a), 100);
}

#[test]
fn roi_for_monthly_revenue_case() {
    let investment = Investment {
        direct_costs: Some(1000.0),
        ..Investment::default()
    };
    let returns = Returns {
        direct_revenue: Some(200.0),
        ..Returns::default()
    };
    let roi = calculate_financial_roi(Some(&investment), Some(&returns), 12).unwrap();
    assert!((roi.total_returns - 2400.0).abs() < 1e-9);
    assert!((roi.net_return - 1400.0).abs() < 1e-9);
    assert!((roi.roi_percentage - 140.0).abs() < 1e-9);
    assert!((roi.payback_months.unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn task_progress_example() {
    let tasks = vec![
        Task::new("a", TaskStatus::Completed),
        Task::new("b", TaskStatus::InProgress),
        Task::new("c", TaskStatus::Pending),
    ];
    assert_eq!(calculate_task_progress(&tasks).progress_percentage, 50);
}

#[test]
fn no_milestones_means_zero_progress() {
    let progress = calculate_milestone_progress(&[]);
    assert_eq!(progress.total, 0);
    assert_eq!(progress.progress_percentage, 0);
}

#[test]
fn raising_any_risk_rating_never_lowers_overall_risk() {
    let mut factors = RiskFactors::default();
    let mut previous = assess_risk(&factors).overall;
    let setters: [fn(&mut RiskFactors, f64); 12] = [
        |f, v| f.financial_exposure = Some(v),
        |f, v| f.revenue_uncertainty = Some(v),
        |f, v| f.cost_overrun = Some(v),
        |f, v| f.partner_reputation = Some(v),
        |f, v| f.brand_misalignment = Some(v),
        |f, v| f.public_controversy = Some(v),
        |f, v| f.execution_complexity = Some(v),
        |f, v| f.resource_constraints = Some(v),
        |f, v| f.dependency_risk = Some(v),
        |f, v| f.market_volatility = Some(v),
        |f, v| f.competitive_conflict = Some(v),
        |f, v| f.exit_difficulty = Some(v),
    ];
    for set in setters {
        for rating in [1.0, 3.0, 5.0] {
            set(&mut factors, rating);
            let current = assess_risk(&factors).overall;
            assert!(current >= previous, "risk fell from {previous} to {current}");
            previous = current;
        }
    }
}

#[test]
fn partner_ranking_is_sorted_and_bounded() {
    let me = profile(
        "technology",
        CompanySize::Small,
        GeographicFocus::Regional,
        &["innovation"],
        &["lead-generation"],
    );
    let partners: Vec<Partner> = sample_profiles().into_iter().map(Partner::new).collect();

    for limit in [0, 1, 5, partners.len() + 3] {
        let ranked = find_most_promising_partners(Some(&me), &partners, limit);
        assert!(ranked.len() <= limit);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].compatibility_score >= w[1].compatibility_score));
    }
}
