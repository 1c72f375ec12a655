//! Dose calculator.
//!
//! Maps a body weight and a drug identifier to a rounded per-dose and
//! 24-hour maximum:
//! - Multiply the weight by the per-kg factors
//! - Cap each value at the drug's absolute ceiling
//! - Clamp into `[0, cap]` and snap to the rounding step

use crate::{default_rules, DoseResult, Result, RuleTable};

/// Default granularity for rounded milligram values
pub const DEFAULT_ROUNDING_STEP: u32 = 10;

/// Compute the dosing estimate for `drug` at `weight_kg`
///
/// The weight is expected to have passed [`crate::validate_weight`].
/// Fails with [`crate::Error::UnknownDrug`] if `drug` is not in `rules`.
pub fn calc_dose(rules: &RuleTable, weight_kg: f64, drug: &str, step: u32) -> Result<DoseResult> {
    let rule = rules.lookup(drug)?;

    let per_dose_raw = weight_kg * rule.per_dose_mg_per_kg;
    let per_dose = per_dose_raw.min(rule.single_dose_cap_mg);
    let max_daily_by_weight = weight_kg * rule.max_daily_mg_per_kg;
    let max_daily = max_daily_by_weight.min(rule.max_daily_cap_mg);

    let result = DoseResult {
        per_dose: round_to(clamp(per_dose, 0.0, rule.single_dose_cap_mg), step),
        max_daily: round_to(clamp(max_daily, 0.0, rule.max_daily_cap_mg), step),
    };

    tracing::debug!(
        "{} @ {} kg: per dose {} mg (raw {}), max daily {} mg (raw {})",
        drug,
        weight_kg,
        result.per_dose,
        per_dose_raw,
        result.max_daily,
        max_daily_by_weight
    );

    Ok(result)
}

/// [`calc_dose`] against the built-in rules with the default step
pub fn calc_dose_default(weight_kg: f64, drug: &str) -> Result<DoseResult> {
    calc_dose(default_rules(), weight_kg, drug, DEFAULT_ROUNDING_STEP)
}

/// `min(max(value, min), max)`
///
/// Unlike `f64::clamp` this does not panic when `min > max`; the upper
/// bound wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round to the nearest multiple of `step`, halves away from zero
///
/// Negative inputs saturate to 0. A zero step is treated as 1.
pub fn round_to(value: f64, step: u32) -> u32 {
    let step = f64::from(step.max(1));
    let rounded = (value / step).round() * step;
    // Float-to-int `as` saturates; NaN becomes 0.
    rounded.max(0.0) as u32
}
