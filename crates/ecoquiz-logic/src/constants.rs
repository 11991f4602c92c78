//! Quiz constants: emission factors, annualization, category names, rewards.
//!
//! Plain `const` values with no UI dependency. The footprint engine indexes
//! these through the profile enums, so a missing option is a compile error
//! rather than a silent zero.

/// Commute emissions in kg CO2 per week.
pub mod commute_kg_per_week {
    pub const WALK_BIKE: f64 = 0.0;
    pub const CAR: f64 = 4.6;
    pub const PUBLIC_TRANSPORT: f64 = 2.4;
}

/// Diet emissions in kg CO2 per day.
pub mod diet_kg_per_day {
    pub const VEGGIE: f64 = 3.5;
    pub const MIXED: f64 = 5.5;
    pub const CARNIVORE: f64 = 7.5;
}

/// Home energy emissions in kg CO2 per day.
pub mod energy_kg_per_day {
    pub const RENEWABLE: f64 = 0.0;
    pub const NON_RENEWABLE: f64 = 8.0;
    pub const MIX: f64 = 4.0;
}

/// Emissions per flight in kg CO2. Flight counts are already annual.
pub const FLIGHT_KG: f64 = 90.0;

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const KG_PER_TONNE: f64 = 1000.0;

/// Highest yearly flight count that still scores as green.
pub const LOW_FLYER_MAX_FLIGHTS: u32 = 2;

/// Display names of the breakdown categories, in display order.
pub mod categories {
    pub const COMMUTE: &str = "Commute";
    pub const FLYING: &str = "Flying";
    pub const DIET: &str = "Diet";
    pub const HOME_ENERGY: &str = "Home Energy";

    pub const ALL: [&str; 4] = [COMMUTE, FLYING, DIET, HOME_ENERGY];
}

/// Indicator dots rendered per category.
pub const DOTS_PER_CATEGORY: usize = 3;

/// Points awarded for logging one challenge card.
pub const CHALLENGE_REWARD_POINTS: u32 = 50;
