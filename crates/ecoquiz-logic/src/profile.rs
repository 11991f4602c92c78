//! Lifestyle profile: the typed quiz input and its form parsing.
//!
//! The quiz form produces raw strings (a country text field, three pickers
//! and a free-text flight count). [`LifestyleProfile::from_form`] turns
//! those into typed choices. Picker labels must match exactly; the flight
//! count is permissive and falls back to zero.
//!
//! ```
//! use ecoquiz_logic::profile::{CommuteMethod, LifestyleForm, LifestyleProfile};
//!
//! let mut form = LifestyleForm::default();
//! form.commute = "Public Transport".to_string();
//! form.flight_frequency = "not sure".to_string();
//! let profile = LifestyleProfile::from_form(&form).unwrap();
//! assert_eq!(profile.commute_method, CommuteMethod::PublicTransport);
//! assert_eq!(profile.flights_per_year, 0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{commute_kg_per_week, diet_kg_per_day, energy_kg_per_day};

/// Form parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A picker value that is not one of the known labels.
    #[error("unknown {field} option {value:?}")]
    UnknownChoice { field: &'static str, value: String },
}

// ============================================================================
// CHOICES
// ============================================================================

/// How the user usually commutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommuteMethod {
    WalkBike,
    Car,
    PublicTransport,
}

impl CommuteMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::WalkBike => "Walk/Bike",
            Self::Car => "Car",
            Self::PublicTransport => "Public Transport",
        }
    }

    /// Emissions in kg CO2 per week.
    pub fn weekly_kg(self) -> f64 {
        match self {
            Self::WalkBike => commute_kg_per_week::WALK_BIKE,
            Self::Car => commute_kg_per_week::CAR,
            Self::PublicTransport => commute_kg_per_week::PUBLIC_TRANSPORT,
        }
    }

    pub fn all() -> &'static [CommuteMethod] {
        &[Self::WalkBike, Self::Car, Self::PublicTransport]
    }
}

/// The user's usual diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Veggie,
    Mixed,
    Carnivore,
}

impl Diet {
    pub fn label(self) -> &'static str {
        match self {
            Self::Veggie => "Veggie",
            Self::Mixed => "Mixed",
            Self::Carnivore => "Carnivore",
        }
    }

    /// Emissions in kg CO2 per day.
    pub fn daily_kg(self) -> f64 {
        match self {
            Self::Veggie => diet_kg_per_day::VEGGIE,
            Self::Mixed => diet_kg_per_day::MIXED,
            Self::Carnivore => diet_kg_per_day::CARNIVORE,
        }
    }

    pub fn all() -> &'static [Diet] {
        &[Self::Veggie, Self::Mixed, Self::Carnivore]
    }
}

/// Where the household's energy comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeEnergySource {
    Renewable,
    NonRenewable,
    Mix,
}

impl HomeEnergySource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Renewable => "Renewable",
            Self::NonRenewable => "Non-Renewable",
            Self::Mix => "Mix",
        }
    }

    /// Emissions in kg CO2 per day.
    pub fn daily_kg(self) -> f64 {
        match self {
            Self::Renewable => energy_kg_per_day::RENEWABLE,
            Self::NonRenewable => energy_kg_per_day::NON_RENEWABLE,
            Self::Mix => energy_kg_per_day::MIX,
        }
    }

    pub fn all() -> &'static [HomeEnergySource] {
        &[Self::Renewable, Self::NonRenewable, Self::Mix]
    }
}

/// Match a trimmed picker label against a choice table.
fn parse_choice<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, ProfileError> {
    let trimmed = value.trim();
    all.iter()
        .copied()
        .find(|choice| label(*choice) == trimmed)
        .ok_or_else(|| ProfileError::UnknownChoice {
            field,
            value: value.to_string(),
        })
}

impl FromStr for CommuteMethod {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("commute", s, Self::all(), Self::label)
    }
}

impl FromStr for Diet {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("diet", s, Self::all(), Self::label)
    }
}

impl FromStr for HomeEnergySource {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("home energy", s, Self::all(), Self::label)
    }
}

impl fmt::Display for CommuteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for HomeEnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// FLIGHT COUNT
// ============================================================================

/// Parse the free-text yearly flight count.
///
/// Anything that is not a non-negative integer (empty, words, negatives,
/// fractions, overflow) counts as zero flights. The form never shows an
/// error for this field.
pub fn parse_flights_per_year(text: &str) -> u32 {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(flights) => flights,
        Err(e) => {
            log::debug!("flight count {:?} not a whole number ({}), using 0", trimmed, e);
            0
        }
    }
}

// ============================================================================
// PROFILE
// ============================================================================

/// Raw quiz form values, exactly as the input fields hold them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleForm {
    pub country: String,
    pub commute: String,
    pub flight_frequency: String,
    pub diet: String,
    pub energy: String,
}

impl Default for LifestyleForm {
    fn default() -> Self {
        Self {
            country: "USA".to_string(),
            commute: CommuteMethod::WalkBike.label().to_string(),
            flight_frequency: "0".to_string(),
            diet: Diet::Veggie.label().to_string(),
            energy: HomeEnergySource::Renewable.label().to_string(),
        }
    }
}

/// One quiz submission, fully typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    /// Informational only; never used in the computation.
    pub country: String,
    pub commute_method: CommuteMethod,
    pub flights_per_year: u32,
    pub diet: Diet,
    pub home_energy_source: HomeEnergySource,
}

impl LifestyleProfile {
    pub fn new(
        country: impl Into<String>,
        commute_method: CommuteMethod,
        flights_per_year: u32,
        diet: Diet,
        home_energy_source: HomeEnergySource,
    ) -> Self {
        Self {
            country: country.into(),
            commute_method,
            flights_per_year,
            diet,
            home_energy_source,
        }
    }

    /// Build a profile from raw form values.
    ///
    /// Fails only on an unknown picker label. The country is carried over
    /// untouched.
    pub fn from_form(form: &LifestyleForm) -> Result<Self, ProfileError> {
        Ok(Self {
            country: form.country.clone(),
            commute_method: form.commute.parse()?,
            flights_per_year: parse_flights_per_year(&form.flight_frequency),
            diet: form.diet.parse()?,
            home_energy_source: form.energy.parse()?,
        })
    }

    /// Convert back to the labels a form would show.
    pub fn to_form(&self) -> LifestyleForm {
        LifestyleForm {
            country: self.country.clone(),
            commute: self.commute_method.label().to_string(),
            flight_frequency: self.flights_per_year.to_string(),
            diet: self.diet.label().to_string(),
            energy: self.home_energy_source.label().to_string(),
        }
    }
}

impl Default for LifestyleProfile {
    fn default() -> Self {
        Self::new(
            "USA",
            CommuteMethod::WalkBike,
            0,
            Diet::Veggie,
            HomeEnergySource::Renewable,
        )
    }
}
