//! Weight input validation.
//!
//! Callers validate the weight before invoking the calculator; a rejected
//! weight never reaches it.

use crate::{Error, Result};

/// Lowest accepted body weight (inclusive)
pub const MIN_WEIGHT_KG: f64 = 2.0;

/// Highest accepted body weight (inclusive)
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Check that a weight is numeric, non-zero and within
/// [`MIN_WEIGHT_KG`, `MAX_WEIGHT_KG`]
pub fn validate_weight(weight_kg: f64) -> Result<f64> {
    if !weight_kg.is_finite()
        || weight_kg == 0.0
        || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg)
    {
        tracing::debug!("Rejected weight {}", weight_kg);
        return Err(Error::InvalidWeight(weight_kg));
    }
    Ok(weight_kg)
}

/// Parse a weight typed by the user, then validate it
///
/// Accepts a comma as decimal separator (`"12,5"`). Unparsable or empty
/// input is reported as `InvalidWeight(NaN)`.
pub fn parse_weight(input: &str) -> Result<f64> {
    let normalized = input.trim().replace(',', ".");
    let weight_kg = normalized.parse::<f64>().unwrap_or(f64::NAN);
    validate_weight(weight_kg)
}
