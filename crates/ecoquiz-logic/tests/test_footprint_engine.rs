//! Integration tests for the quiz pipeline.
//!
//! Exercises: LifestyleForm → LifestyleProfile → FootprintResult
//! → indicator rows → rendered report, over every option combination.
//!
//! All tests are pure logic, no UI.

use ecoquiz_logic::constants::categories;
use ecoquiz_logic::footprint::{compute_footprint, compute_footprint_from_form, Category, Score};
use ecoquiz_logic::indicator::{indicator_row, IndicatorColor, IndicatorPolicy};
use ecoquiz_logic::points::PointsLedger;
use ecoquiz_logic::profile::{CommuteMethod, Diet, HomeEnergySource, LifestyleForm, LifestyleProfile};
use ecoquiz_logic::report::render_report;

// ── Helpers ────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

/// Every option combination with a spread of flight counts.
fn all_profiles() -> Vec<LifestyleProfile> {
    let mut out = Vec::new();
    for commute in CommuteMethod::all() {
        for diet in Diet::all() {
            for energy in HomeEnergySource::all() {
                for flights in [0, 1, 2, 3, 10, 250] {
                    out.push(LifestyleProfile::new("USA", *commute, flights, *diet, *energy));
                }
            }
        }
    }
    out
}

fn form(commute: &str, flights: &str, diet: &str, energy: &str) -> LifestyleForm {
    LifestyleForm {
        country: "USA".to_string(),
        commute: commute.to_string(),
        flight_frequency: flights.to_string(),
        diet: diet.to_string(),
        energy: energy.to_string(),
    }
}

// ── Invariants over the whole input space ──────────────────────────────

#[test]
fn totals_never_negative() {
    for p in all_profiles() {
        let r = compute_footprint(&p);
        assert!(r.total_annual_co2_tonnes >= 0.0, "{p:?}");
    }
}

#[test]
fn always_four_scores_in_range() {
    for p in all_profiles() {
        let r = compute_footprint(&p);
        let names: Vec<_> = r.category_scores.iter().map(|(c, _)| c.name()).collect();
        assert_eq!(names, categories::ALL.to_vec());
        for (_, score) in r.category_scores.iter() {
            assert!((1..=3).contains(&score.value()));
        }
    }
}

#[test]
fn breakdown_sums_to_total() {
    for p in all_profiles() {
        let r = compute_footprint(&p);
        let kg: f64 = r.breakdown_kg.iter().map(|(_, kg)| kg).sum();
        assert!((kg / 1000.0 - r.total_annual_co2_tonnes).abs() < EPS);
    }
}

#[test]
fn deterministic_output() {
    for p in all_profiles() {
        assert_eq!(compute_footprint(&p), compute_footprint(&p));
    }
}

#[test]
fn greener_choice_never_raises_total() {
    // Swapping any single option for its greener neighbour lowers or keeps the total.
    let base = LifestyleProfile::new(
        "USA",
        CommuteMethod::Car,
        4,
        Diet::Carnivore,
        HomeEnergySource::NonRenewable,
    );
    let base_total = compute_footprint(&base).total_annual_co2_tonnes;
    let variants = [
        LifestyleProfile { commute_method: CommuteMethod::PublicTransport, ..base.clone() },
        LifestyleProfile { flights_per_year: 2, ..base.clone() },
        LifestyleProfile { diet: Diet::Mixed, ..base.clone() },
        LifestyleProfile { home_energy_source: HomeEnergySource::Mix, ..base.clone() },
    ];
    for v in variants {
        assert!(compute_footprint(&v).total_annual_co2_tonnes < base_total);
    }
}

// ── Reference scenarios ────────────────────────────────────────────────

#[test]
fn scenario_green_household() {
    let r = compute_footprint_from_form(&form("Walk/Bike", "0", "Veggie", "Renewable")).unwrap();
    assert!((r.total_annual_co2_tonnes - 1.2775).abs() < EPS);
    for (_, score) in r.category_scores.iter() {
        assert_eq!(score, Score::Good);
    }
}

#[test]
fn scenario_heavy_household() {
    let r = compute_footprint_from_form(&form("Car", "5", "Carnivore", "Non-Renewable")).unwrap();
    assert!((r.total_annual_co2_tonnes - 6.3467).abs() < EPS);
    for (_, score) in r.category_scores.iter() {
        assert_eq!(score, Score::Poor);
    }
}

#[test]
fn flight_boundary() {
    let two = compute_footprint_from_form(&form("Walk/Bike", "2", "Veggie", "Renewable")).unwrap();
    let three =
        compute_footprint_from_form(&form("Walk/Bike", "3", "Veggie", "Renewable")).unwrap();
    assert_eq!(two.category_scores.get(Category::Flying), Score::Good);
    assert_eq!(three.category_scores.get(Category::Flying), Score::Poor);
}

#[test]
fn malformed_flights_match_zero() {
    let zero = compute_footprint_from_form(&form("Walk/Bike", "0", "Veggie", "Renewable")).unwrap();
    for text in ["", "abc", "-3", "2.5", "  "] {
        let r =
            compute_footprint_from_form(&form("Walk/Bike", text, "Veggie", "Renewable")).unwrap();
        assert_eq!(r.breakdown_kg.flying, 0.0, "input {text:?}");
        assert_eq!(r, zero, "input {text:?}");
    }
}

// ── Serialization shape ────────────────────────────────────────────────

#[test]
fn scores_serialize_as_ordered_name_map() {
    let r = compute_footprint(&LifestyleProfile::new(
        "USA",
        CommuteMethod::PublicTransport,
        9,
        Diet::Mixed,
        HomeEnergySource::Renewable,
    ));
    let json = serde_json::to_string(&r.category_scores).unwrap();
    assert_eq!(
        json,
        r#"{"Commute":2,"Flying":1,"Diet":2,"Home Energy":3}"#
    );
}

#[test]
fn out_of_range_score_rejected_on_deserialize() {
    let bad = r#"{"Commute":0,"Flying":1,"Diet":2,"Home Energy":3}"#;
    let parsed: Result<ecoquiz_logic::footprint::PerCategory<Score>, _> = serde_json::from_str(bad);
    assert!(parsed.is_err());
}

// ── Presentation helpers ───────────────────────────────────────────────

#[test]
fn results_screen_rows_legacy() {
    let r = compute_footprint_from_form(&form("Public Transport", "1", "Carnivore", "Mix")).unwrap();
    let rows: Vec<_> = Category::all()
        .iter()
        .map(|c| indicator_row(r.category_scores.get(*c), IndicatorPolicy::Legacy))
        .collect();
    use IndicatorColor::{Gray, Green, Red, Yellow};
    assert_eq!(
        rows,
        vec![
            [Yellow, Yellow, Gray],
            [Green, Gray, Gray],
            [Red, Red, Red],
            [Yellow, Yellow, Gray],
        ]
    );
}

#[test]
fn report_renders_for_every_profile() {
    for p in all_profiles() {
        let r = compute_footprint(&p);
        for policy in [IndicatorPolicy::Legacy, IndicatorPolicy::Monotonic] {
            let text = render_report(&r, policy);
            assert!(text.contains("tonnes of CO2 annually"));
            assert_eq!(text.lines().count(), 9);
        }
    }
}

#[test]
fn quiz_and_points_are_independent() {
    let mut ledger = PointsLedger::new();
    ledger.log_challenge();
    let before = compute_footprint(&LifestyleProfile::default());
    ledger.log_challenge();
    let after = compute_footprint(&LifestyleProfile::default());
    assert_eq!(before, after);
    assert_eq!(ledger.total(), 100);
}
