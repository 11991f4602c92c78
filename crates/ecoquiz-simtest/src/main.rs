//! EcoQuiz Headless Quiz Harness
//!
//! Runs sample quiz submissions through the footprint engine and checks
//! the engine's guarantees. Runs entirely in-process: no UI, no storage.
//!
//! Usage:
//!   cargo run -p ecoquiz-simtest
//!   cargo run -p ecoquiz-simtest -- --verbose --report --policy monotonic
//!   cargo run -p ecoquiz-simtest -- --profiles my_samples.json

mod cli;
mod logging;
mod samples;

use clap::Parser;
use ecoquiz_logic::constants::{categories, CHALLENGE_REWARD_POINTS, DOTS_PER_CATEGORY};
use ecoquiz_logic::footprint::{compute_footprint, compute_footprint_from_form, Score};
use ecoquiz_logic::indicator::{indicator_level, IndicatorLevel, IndicatorPolicy};
use ecoquiz_logic::points::PointsLedger;
use ecoquiz_logic::profile::{CommuteMethod, Diet, HomeEnergySource, LifestyleProfile};
use ecoquiz_logic::report::render_report;

use crate::cli::Args;
use crate::samples::SampleSubmission;

/// Tolerance for comparing totals in tonnes.
const TONNES_TOLERANCE: f64 = 1e-6;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose())?;

    println!("=== EcoQuiz Footprint Harness ===\n");

    let samples = samples::load_samples(args.profiles())?;
    tracing::info!("loaded {} sample submissions", samples.len());

    let mut results = Vec::new();

    // 1. Sample submissions against expected totals and scores
    results.extend(validate_samples(&samples, args.policy(), args.report()));

    // 2. Invariants over every option combination
    results.extend(validate_invariant_sweep());

    // 3. Indicator lighting tables
    results.extend(validate_indicator(args.policy()));

    // 4. Points ledger
    results.extend(validate_points());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose() {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        tracing::warn!("{} checks failed", failed);
        std::process::exit(1);
    }
    Ok(())
}

// ── 1. Sample submissions ───────────────────────────────────────────────

fn validate_samples(
    samples: &[SampleSubmission],
    policy: IndicatorPolicy,
    print_reports: bool,
) -> Vec<TestResult> {
    println!("--- Sample Submissions ---");
    samples
        .iter()
        .map(|sample| check_sample(sample, policy, print_reports))
        .collect()
}

fn check_sample(sample: &SampleSubmission, policy: IndicatorPolicy, print_report: bool) -> TestResult {
    let name = format!("sample_{}", sample.name);
    let result = match compute_footprint_from_form(&sample.form) {
        Ok(result) => result,
        Err(e) => {
            return TestResult {
                name,
                passed: sample.expect_rejected,
                detail: format!("rejected: {}", e),
            };
        }
    };

    if sample.expect_rejected {
        return TestResult {
            name,
            passed: false,
            detail: format!(
                "expected rejection, got {:.4} t",
                result.total_annual_co2_tonnes
            ),
        };
    }

    if print_report {
        println!("\n[{}] {}\n{}\n", sample.name, result.country, render_report(&result, policy));
    }

    let mut problems = Vec::new();
    if let Some(expected) = sample.expected_total_tonnes {
        if (result.total_annual_co2_tonnes - expected).abs() > TONNES_TOLERANCE {
            problems.push(format!(
                "total {:.4} t, expected {:.4} t",
                result.total_annual_co2_tonnes, expected
            ));
        }
    }
    if let Some(expected) = sample.expected_scores {
        let actual: Vec<u8> = result.category_scores.iter().map(|(_, s)| s.value()).collect();
        if actual != expected {
            problems.push(format!("scores {:?}, expected {:?}", actual, expected));
        }
    }

    TestResult {
        name,
        passed: problems.is_empty(),
        detail: if problems.is_empty() {
            format!(
                "{:.4} t, improve: {:?}",
                result.total_annual_co2_tonnes,
                result
                    .improvement_areas()
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
            )
        } else {
            problems.join("; ")
        },
    }
}

// ── 2. Invariant sweep ──────────────────────────────────────────────────

fn validate_invariant_sweep() -> Vec<TestResult> {
    println!("--- Invariant Sweep ---");
    let mut results = Vec::new();

    let mut profiles = Vec::new();
    for commute in CommuteMethod::all() {
        for diet in Diet::all() {
            for energy in HomeEnergySource::all() {
                for flights in [0, 1, 2, 3, 4, 20, 365, u32::MAX] {
                    profiles.push(LifestyleProfile::new(
                        "Sweep", *commute, flights, *diet, *energy,
                    ));
                }
            }
        }
    }

    let negative = profiles
        .iter()
        .filter(|p| compute_footprint(p).total_annual_co2_tonnes < 0.0)
        .count();
    results.push(TestResult {
        name: "sweep_non_negative_totals".into(),
        passed: negative == 0,
        detail: format!("{} profiles, {} negative totals", profiles.len(), negative),
    });

    let bad_keys = profiles
        .iter()
        .filter(|p| {
            let names: Vec<_> = compute_footprint(p)
                .category_scores
                .iter()
                .map(|(c, _)| c.name())
                .collect();
            names != categories::ALL
        })
        .count();
    results.push(TestResult {
        name: "sweep_four_fixed_categories".into(),
        passed: bad_keys == 0,
        detail: format!("{} results with wrong category keys", bad_keys),
    });

    let nondeterministic = profiles
        .iter()
        .filter(|p| compute_footprint(p) != compute_footprint(p))
        .count();
    results.push(TestResult {
        name: "sweep_deterministic".into(),
        passed: nondeterministic == 0,
        detail: format!("{} profiles gave differing results", nondeterministic),
    });

    let fair_flying = profiles
        .iter()
        .filter(|p| compute_footprint(p).category_scores.flying == Score::Fair)
        .count();
    results.push(TestResult {
        name: "sweep_flying_is_binary".into(),
        passed: fair_flying == 0,
        detail: format!("{} profiles scored Flying as 2", fair_flying),
    });

    results
}

// ── 3. Indicator ────────────────────────────────────────────────────────

fn validate_indicator(policy: IndicatorPolicy) -> Vec<TestResult> {
    println!("--- Indicator ({:?}) ---", policy);
    let mut results = Vec::new();

    for score in Score::all() {
        let lit = (0..DOTS_PER_CATEGORY)
            .filter(|p| indicator_level(*score, *p, policy) == IndicatorLevel::Filled)
            .count();
        let expected = match policy {
            IndicatorPolicy::Legacy => DOTS_PER_CATEGORY + 1 - score.value() as usize,
            IndicatorPolicy::Monotonic => score.value() as usize,
        };
        results.push(TestResult {
            name: format!("indicator_score_{}", score.value()),
            passed: lit == expected,
            detail: format!("{} of {} dots lit", lit, DOTS_PER_CATEGORY),
        });
    }

    let leaks = Score::all()
        .iter()
        .filter(|s| indicator_level(**s, DOTS_PER_CATEGORY, policy) != IndicatorLevel::Empty)
        .count();
    results.push(TestResult {
        name: "indicator_out_of_range_empty".into(),
        passed: leaks == 0,
        detail: format!("{} scores lit a dot past the last position", leaks),
    });

    results
}

// ── 4. Points ───────────────────────────────────────────────────────────

fn validate_points() -> Vec<TestResult> {
    println!("--- Points Ledger ---");
    let mut results = Vec::new();

    let mut ledger = PointsLedger::new();
    for _ in 0..5 {
        ledger.log_challenge();
    }
    results.push(TestResult {
        name: "points_per_challenge".into(),
        passed: ledger.total() == 5 * CHALLENGE_REWARD_POINTS && ledger.challenges_logged() == 5,
        detail: format!(
            "{} points after {} challenges",
            ledger.total(),
            ledger.challenges_logged()
        ),
    });

    let mut full = PointsLedger::with_total(u32::MAX - 1);
    let after = full.log_challenge();
    results.push(TestResult {
        name: "points_saturate".into(),
        passed: after == u32::MAX,
        detail: format!("total {} after logging near the ceiling", after),
    });

    results
}
