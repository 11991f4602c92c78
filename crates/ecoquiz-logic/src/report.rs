//! Plain-text rendering of a footprint result, laid out like the results
//! screen: headline total, one dot row per category, closing hint.

use std::fmt::Write as _;

use crate::footprint::{Category, FootprintResult};
use crate::indicator::{indicator_row, IndicatorColor, IndicatorPolicy};

pub const IMPROVEMENT_HINT: &str = "Consider improving your EcoHabits in the areas marked.";

/// Total tonnes with one decimal place.
pub fn format_tonnes(total_tonnes: f64) -> String {
    format!("{:.1}", total_tonnes)
}

pub fn headline(result: &FootprintResult) -> String {
    format!(
        "My carbon footprint: {} tonnes of CO2 annually",
        format_tonnes(result.total_annual_co2_tonnes)
    )
}

pub fn dot_glyph(color: IndicatorColor) -> char {
    match color {
        IndicatorColor::Green => '🟢',
        IndicatorColor::Yellow => '🟡',
        IndicatorColor::Red => '🔴',
        IndicatorColor::Gray => '⚪',
    }
}

/// One breakdown line, e.g. `Commute      🔴🔴🔴`.
pub fn breakdown_line(result: &FootprintResult, category: Category, policy: IndicatorPolicy) -> String {
    let score = result.category_scores.get(category);
    let dots: String = indicator_row(score, policy).iter().map(|c| dot_glyph(*c)).collect();
    format!("{:<12} {}", category.name(), dots)
}

pub fn render_report(result: &FootprintResult, policy: IndicatorPolicy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", headline(result));
    let _ = writeln!(out);
    let _ = writeln!(out, "Your breakdown:");
    for category in Category::all() {
        let _ = writeln!(out, "  {}", breakdown_line(result, *category, policy));
    }
    let _ = writeln!(out);
    let _ = write!(out, "{}", IMPROVEMENT_HINT);
    out
}
