//! Pure footprint logic for EcoQuiz.
//!
//! This crate holds everything in the app that computes something. Functions
//! take plain data and return results, so the mobile front end, the headless
//! harness, and tests all share the same code path.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Emission factors, annualization, category names, rewards |
//! | [`footprint`] | Annual CO2 estimate and per-category scores |
//! | [`indicator`] | Three-dot indicator lighting (legacy and monotonic) |
//! | [`points`] | Points ledger for logged challenge cards |
//! | [`profile`] | Typed quiz input and form parsing |
//! | [`report`] | Text rendering of a result |

pub mod constants;
pub mod footprint;
pub mod indicator;
pub mod points;
pub mod profile;
pub mod report;

pub use footprint::{compute_footprint, compute_footprint_from_form, FootprintResult};
pub use profile::{LifestyleForm, LifestyleProfile};
