//! Built-in drug rule table.
//!
//! This module provides the default dosing rules and rule table validation.

use crate::types::*;
use once_cell::sync::Lazy;

/// Largest accepted cap; keeps rounded results inside `u32`
pub const MAX_CAP_MG: f64 = (u32::MAX / 2) as f64;

/// Cached default rule table - built once and shared read-only
static DEFAULT_RULES: Lazy<RuleTable> = Lazy::new(build_default_rules);

/// Get a reference to the cached default rule table
pub fn default_rules() -> &'static RuleTable {
    &DEFAULT_RULES
}

/// Builds the default rule table (ibuprofen and paracetamol)
///
/// **Note**: Prefer `default_rules()` unless the table is going to be
/// extended, e.g. with rules from the config file.
pub fn build_default_rules() -> RuleTable {
    let mut rules = RuleTable::new();

    rules.insert(
        "ibuprofen",
        DrugRule {
            per_dose_mg_per_kg: 10.0,
            single_dose_cap_mg: 400.0,
            max_daily_mg_per_kg: 40.0,
            max_daily_cap_mg: 1200.0,
            interval: LocalizedText::new("every 6–8 hours", "každých 6–8 hodin"),
            label: LocalizedText::uniform("Nurofen (Ibuprofen)"),
        },
    );

    rules.insert(
        "paracetamol",
        DrugRule {
            per_dose_mg_per_kg: 15.0,
            single_dose_cap_mg: 1000.0,
            max_daily_mg_per_kg: 75.0,
            max_daily_cap_mg: 3000.0,
            interval: LocalizedText::new("every 4–6 hours", "každé 4–6 hodiny"),
            label: LocalizedText::uniform("Paralen (Paracetamol)"),
        },
    );

    rules
}

impl RuleTable {
    /// Validate the table for data-entry mistakes
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    /// A daily factor below the per-dose factor is only logged.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, rule) in self.iter() {
            if id.trim().is_empty() {
                errors.push("Drug rule has empty ID".to_string());
            }

            let factors = [
                ("per_dose_mg_per_kg", rule.per_dose_mg_per_kg),
                ("single_dose_cap_mg", rule.single_dose_cap_mg),
                ("max_daily_mg_per_kg", rule.max_daily_mg_per_kg),
                ("max_daily_cap_mg", rule.max_daily_cap_mg),
            ];
            for (name, value) in factors {
                if !value.is_finite() || value <= 0.0 {
                    errors.push(format!(
                        "Drug '{}': {} must be positive, got {}",
                        id, name, value
                    ));
                }
            }

            let caps = [
                ("single_dose_cap_mg", rule.single_dose_cap_mg),
                ("max_daily_cap_mg", rule.max_daily_cap_mg),
            ];
            for (name, value) in caps {
                if value > MAX_CAP_MG {
                    errors.push(format!(
                        "Drug '{}': {} must not exceed {} mg, got {}",
                        id, name, MAX_CAP_MG, value
                    ));
                }
            }

            for locale in Locale::ALL {
                if rule.label.get(locale).trim().is_empty() {
                    errors.push(format!("Drug '{}' has empty {} label", id, locale));
                }
                if rule.interval.get(locale).trim().is_empty() {
                    errors.push(format!("Drug '{}' has empty {} interval", id, locale));
                }
            }

            if rule.max_daily_mg_per_kg < rule.per_dose_mg_per_kg {
                tracing::warn!(
                    "Drug '{}': max daily factor {} is below per-dose factor {}",
                    id,
                    rule.max_daily_mg_per_kg,
                    rule.per_dose_mg_per_kg
                );
            }
        }

        errors
    }
}
