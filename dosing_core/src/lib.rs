#![forbid(unsafe_code)]

//! Core domain model and calculation logic for the pediatric dose calculator.
//!
//! This crate provides:
//! - Domain types (drug rules, localized text, dose results)
//! - The built-in rule table
//! - Weight validation and the dose calculator
//! - Locale-aware rendering and dosing chart export
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod rules;
pub mod config;
pub mod logging;
pub mod validation;
pub mod calculator;
pub mod render;
pub mod chart;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use rules::{build_default_rules, default_rules, MAX_CAP_MG};
pub use config::Config;
pub use validation::{parse_weight, validate_weight, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
pub use calculator::{calc_dose, calc_dose_default, clamp, round_to, DEFAULT_ROUNDING_STEP};
pub use render::{format_mg, invalid_weight_message, render_result};
pub use chart::{dosing_chart, write_chart_csv, ChartRow, MAX_CHART_ROWS};
