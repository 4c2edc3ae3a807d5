//! `score` and `roi` command handlers.

use std::path::Path;

use brandmatch_core::{BrandProfile, PartnershipCase};
use brandmatch_scoring::roi::Verdict;
use brandmatch_scoring::{analyze_case, compatibility_report, CompatibilityReport, RoiAnalysis};
use brandmatch_store::{KeyValueStore, Store};

use crate::input::read_input;
use crate::{print_json, Output};

/// Compatibility report for two profile files.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed.
pub(crate) fn run_score(a: &Path, b: &Path, output: Output) -> anyhow::Result<()> {
    let a: BrandProfile = read_input(a)?;
    let b: BrandProfile = read_input(b)?;
    let report = compatibility_report(&a, &b);

    if output.is_json() {
        return print_json(&report);
    }
    println!("{} x {}", a.name, b.name);
    print_report(&report);
    Ok(())
}

pub(crate) fn print_report(report: &CompatibilityReport) {
    println!("Compatibility: {}/100 ({:?} industries)", report.score, report.industry_match);
    println!();
    println!("{:<22}{:<8}WEIGHT", "DIMENSION", "SCORE");
    for entry in &report.breakdown {
        println!(
            "{:<22}{:<8}{}%",
            entry.dimension.label(),
            entry.score,
            entry.weight_percent
        );
    }

    let labels = |dims: &[brandmatch_scoring::Dimension]| {
        dims.iter().map(|d| d.label()).collect::<Vec<_>>().join(", ")
    };
    if !report.strengths.is_empty() {
        println!();
        println!("Strengths:  {}", labels(&report.strengths));
    }
    if !report.weaknesses.is_empty() {
        println!("Weaknesses: {}", labels(&report.weaknesses));
    }
    println!();
    for line in &report.recommendations {
        println!("- {line}");
    }
    let types = report
        .suggested_partnership_types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Suggested partnership types: {types}");
}

/// Full ROI analysis of a case file.
///
/// A case without a positive `timeframeMonths` takes the stored default.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn run_roi<K: KeyValueStore>(
    case: &Path,
    store: &Store<K>,
    output: Output,
) -> anyhow::Result<()> {
    let mut case: PartnershipCase = read_input(case)?;
    if case.timeframe_months <= 0 {
        case.timeframe_months = store.document().settings.default_timeframe_months;
        tracing::debug!(
            timeframe_months = case.timeframe_months,
            "case has no timeframe; using default"
        );
    }
    let analysis = analyze_case(&case);

    if output.is_json() {
        return print_json(&analysis);
    }
    print_analysis(&analysis, &store.document().settings.currency);
    Ok(())
}

pub(crate) fn print_analysis(analysis: &RoiAnalysis, currency: &str) {
    match &analysis.financial {
        Some(f) => {
            println!("Financial ({} months)", f.timeframe_months);
            println!("  Investment:   {:>14.2} {currency}", f.total_investment);
            println!("  Returns:      {:>14.2} {currency}", f.total_returns);
            println!("  Net return:   {:>14.2} {currency}", f.net_return);
            println!("  ROI:          {:>13.1}%", f.roi_percentage);
            println!("  Monthly:      {:>14.2} {currency}", f.monthly_return);
            match f.payback_months {
                Some(months) => println!("  Payback:      {months:>11.1} months"),
                None => println!("  Payback:      never"),
            }
        }
        None => println!("Financial: not enough data (needs investment, returns and a timeframe)"),
    }

    let s = &analysis.strategic;
    println!();
    println!("Strategic value: {}/100", s.overall);
    println!(
        "  audience {}  brand {}  innovation {}  market access {}  relationship {}",
        s.audience, s.brand, s.innovation, s.market_access, s.relationship
    );

    let r = &analysis.risk;
    println!();
    println!("Risk: {}/100 ({})", r.overall, r.level);
    println!(
        "  financial {}  reputation {}  operational {}  strategic {}",
        r.financial, r.reputation, r.operational, r.strategic
    );
    for mitigation in &r.mitigations {
        println!("  - {}", mitigation.action);
    }

    let rec = &analysis.recommendation;
    println!();
    println!("Overall: {}/100, {}", rec.overall_score, rec.verdict);
    if rec.verdict == Verdict::NotRecommended && analysis.financial.is_none() {
        println!("  (no financial data; ROI contributed 0 points)");
    }
}
