//! Footprint engine: annual CO2 estimate and per-category scores.
//!
//! Each category's yearly emissions are the factor for the chosen option
//! times an annualization multiplier (52 weeks, 365 days, or the flight
//! count itself). The total is the sum in kilograms divided by 1000.
//!
//! Scores run from 1 (worst) to 3 (greenest) and feed the results screen's
//! three-dot indicator. Flying is binary: at most two flights a year scores
//! 3, anything more scores 1.
//!
//! ```
//! use ecoquiz_logic::footprint::{compute_footprint, Category, Score};
//! use ecoquiz_logic::profile::LifestyleProfile;
//!
//! let result = compute_footprint(&LifestyleProfile::default());
//! assert!((result.total_annual_co2_tonnes - 1.2775).abs() < 1e-9);
//! assert_eq!(result.category_scores.get(Category::Diet), Score::Good);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    categories, DAYS_PER_YEAR, FLIGHT_KG, KG_PER_TONNE, LOW_FLYER_MAX_FLIGHTS, WEEKS_PER_YEAR,
};
use crate::profile::{
    CommuteMethod, Diet, HomeEnergySource, LifestyleForm, LifestyleProfile, ProfileError,
};

// ============================================================================
// CATEGORIES
// ============================================================================

/// Breakdown category shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Commute,
    Flying,
    Diet,
    HomeEnergy,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Self::Commute => categories::COMMUTE,
            Self::Flying => categories::FLYING,
            Self::Diet => categories::DIET,
            Self::HomeEnergy => categories::HOME_ENERGY,
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[Self::Commute, Self::Flying, Self::Diet, Self::HomeEnergy]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value for each of the four categories.
///
/// Serializes as a map keyed by display name, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerCategory<T> {
    #[serde(rename = "Commute")]
    pub commute: T,
    #[serde(rename = "Flying")]
    pub flying: T,
    #[serde(rename = "Diet")]
    pub diet: T,
    #[serde(rename = "Home Energy")]
    pub home_energy: T,
}

impl<T: Copy> PerCategory<T> {
    pub fn get(&self, category: Category) -> T {
        match category {
            Category::Commute => self.commute,
            Category::Flying => self.flying,
            Category::Diet => self.diet,
            Category::HomeEnergy => self.home_energy,
        }
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, T)> + '_ {
        Category::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Look up by display name.
    pub fn get_by_name(&self, name: &str) -> Option<T> {
        Category::all()
            .iter()
            .find(|c| c.name() == name)
            .map(|c| self.get(*c))
    }

    pub fn len(&self) -> usize {
        Category::all().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// How green a category is. Only 1, 2 and 3 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Score {
    Poor = 1,
    Fair = 2,
    Good = 3,
}

impl Score {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn all() -> &'static [Score] {
        &[Self::Poor, Self::Fair, Self::Good]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score {0} outside 1..=3")]
pub struct ScoreOutOfRange(pub u8);

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.value()
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Poor),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Good),
            other => Err(ScoreOutOfRange(other)),
        }
    }
}

pub fn commute_score(method: CommuteMethod) -> Score {
    match method {
        CommuteMethod::WalkBike => Score::Good,
        CommuteMethod::PublicTransport => Score::Fair,
        CommuteMethod::Car => Score::Poor,
    }
}

/// Binary: no middle tier is reachable.
pub fn flying_score(flights_per_year: u32) -> Score {
    if flights_per_year <= LOW_FLYER_MAX_FLIGHTS {
        Score::Good
    } else {
        Score::Poor
    }
}

pub fn diet_score(diet: Diet) -> Score {
    match diet {
        Diet::Veggie => Score::Good,
        Diet::Mixed => Score::Fair,
        Diet::Carnivore => Score::Poor,
    }
}

pub fn home_energy_score(source: HomeEnergySource) -> Score {
    match source {
        HomeEnergySource::Renewable => Score::Good,
        HomeEnergySource::Mix => Score::Fair,
        HomeEnergySource::NonRenewable => Score::Poor,
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Outcome of one quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    /// Carried over from the profile.
    pub country: String,
    pub total_annual_co2_tonnes: f64,
    pub category_scores: PerCategory<Score>,
    /// Annual kg CO2 per category. Sums to the total times 1000.
    pub breakdown_kg: PerCategory<f64>,
}

impl FootprintResult {
    /// Categories scoring below the greenest tier, in display order.
    pub fn improvement_areas(&self) -> Vec<Category> {
        self.category_scores
            .iter()
            .filter(|(_, score)| *score < Score::Good)
            .map(|(category, _)| category)
            .collect()
    }

    /// The category with the most annual emissions. Ties go to the first in
    /// display order.
    pub fn largest_source(&self) -> Category {
        let mut best = Category::Commute;
        for (category, kg) in self.breakdown_kg.iter() {
            if kg > self.breakdown_kg.get(best) {
                best = category;
            }
        }
        best
    }
}

/// Annual kg CO2 per category for a profile.
pub fn annual_breakdown_kg(profile: &LifestyleProfile) -> PerCategory<f64> {
    PerCategory {
        commute: profile.commute_method.weekly_kg() * WEEKS_PER_YEAR,
        flying: f64::from(profile.flights_per_year) * FLIGHT_KG,
        diet: profile.diet.daily_kg() * DAYS_PER_YEAR,
        home_energy: profile.home_energy_source.daily_kg() * DAYS_PER_YEAR,
    }
}

pub fn category_scores(profile: &LifestyleProfile) -> PerCategory<Score> {
    PerCategory {
        commute: commute_score(profile.commute_method),
        flying: flying_score(profile.flights_per_year),
        diet: diet_score(profile.diet),
        home_energy: home_energy_score(profile.home_energy_source),
    }
}

/// Compute the annual footprint and category scores. Never fails.
pub fn compute_footprint(profile: &LifestyleProfile) -> FootprintResult {
    let breakdown_kg = annual_breakdown_kg(profile);
    let total_kg: f64 = breakdown_kg.iter().map(|(_, kg)| kg).sum();
    let total_annual_co2_tonnes = total_kg / KG_PER_TONNE;

    log::debug!(
        "footprint: commute={} flights={} diet={} energy={} -> {:.4} t",
        profile.commute_method,
        profile.flights_per_year,
        profile.diet,
        profile.home_energy_source,
        total_annual_co2_tonnes
    );

    FootprintResult {
        country: profile.country.clone(),
        total_annual_co2_tonnes,
        category_scores: category_scores(profile),
        breakdown_kg,
    }
}

/// Parse raw form values and compute. Fails only on an unknown picker label.
pub fn compute_footprint_from_form(form: &LifestyleForm) -> Result<FootprintResult, ProfileError> {
    let profile = LifestyleProfile::from_form(form)?;
    Ok(compute_footprint(&profile))
}
