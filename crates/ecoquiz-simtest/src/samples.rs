//! Sample quiz submissions used by the harness.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use ecoquiz_logic::profile::LifestyleForm;
use serde::Deserialize;

// ── Bundled samples ─────────────────────────────────────────────────────
const SAMPLES_JSON: &str = include_str!("../../../data/sample_profiles.json");

/// One submission and what the engine should make of it.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleSubmission {
    pub name: String,
    pub form: LifestyleForm,
    /// Expected total in tonnes.
    #[serde(default)]
    pub expected_total_tonnes: Option<f64>,
    /// Expected scores in category order: commute, flying, diet, home energy.
    #[serde(default)]
    pub expected_scores: Option<[u8; 4]>,
    /// The form carries a label the quiz pickers never produce.
    #[serde(default)]
    pub expect_rejected: bool,
}

pub fn parse_samples(json: &str) -> anyhow::Result<Vec<SampleSubmission>> {
    let samples: Vec<SampleSubmission> =
        serde_json::from_str(json).context("sample file is not valid JSON")?;
    if samples.is_empty() {
        bail!("sample file contains no submissions");
    }
    Ok(samples)
}

/// Load samples from `path`, or the bundled set when no path is given.
pub fn load_samples(path: Option<&Path>) -> anyhow::Result<Vec<SampleSubmission>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading samples from {}", path.display()))?;
            parse_samples(&json).with_context(|| format!("parsing {}", path.display()))
        }
        None => parse_samples(SAMPLES_JSON).context("parsing bundled samples"),
    }
}
