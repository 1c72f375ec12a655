//! Core domain types for the dose calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Supported display locales and localized text
//! - Per-drug dosing rules and the rule table
//! - Calculation results and serializable reports

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Locale Types
// ============================================================================

/// Display locale
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Cs,
}

impl Locale {
    /// All supported locales, in display order
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Cs];

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cs => "cs",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "cs" => Ok(Locale::Cs),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

/// Text carried in every supported locale
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: String,
    pub cs: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, cs: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            cs: cs.into(),
        }
    }

    /// Same text for every locale (e.g. brand names)
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            cs: text,
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Cs => &self.cs,
        }
    }
}

// ============================================================================
// Rule Types
// ============================================================================

/// Weight-based dosing rule for a single drug
///
/// `max_daily_mg_per_kg >= per_dose_mg_per_kg` is expected of the data but
/// never enforced by the calculator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrugRule {
    /// mg per kg for one administration
    pub per_dose_mg_per_kg: f64,
    /// Ceiling for one administration regardless of weight
    pub single_dose_cap_mg: f64,
    /// Cumulative mg per kg over 24 hours
    pub max_daily_mg_per_kg: f64,
    /// Ceiling for the 24-hour total
    pub max_daily_cap_mg: f64,
    /// Dosing frequency advice
    pub interval: LocalizedText,
    /// Display name
    pub label: LocalizedText,
}

/// Immutable table of drug rules keyed by drug identifier
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RuleTable {
    rules: BTreeMap<String, DrugRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `id`, returning the previous rule
    pub fn insert(&mut self, id: impl Into<String>, rule: DrugRule) -> Option<DrugRule> {
        self.rules.insert(id.into(), rule)
    }

    /// Look up a rule, failing with [`Error::UnknownDrug`] for unknown ids
    pub fn lookup(&self, id: &str) -> Result<&DrugRule> {
        self.rules
            .get(id)
            .ok_or_else(|| Error::UnknownDrug(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    /// Drug identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DrugRule)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(String, DrugRule)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (String, DrugRule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Rounded dosing estimate in milligrams
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoseResult {
    pub per_dose: u32,
    pub max_daily: u32,
}

/// A calculation together with the context needed to present it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoseReport {
    pub drug: String,
    pub label: String,
    pub interval: String,
    pub locale: Locale,
    pub weight_kg: f64,
    pub per_dose_mg: u32,
    pub max_daily_mg: u32,
    pub rounding_step: u32,
    pub calculated_at: DateTime<Utc>,
}

impl DoseReport {
    pub fn new(
        drug: &str,
        rule: &DrugRule,
        locale: Locale,
        weight_kg: f64,
        result: DoseResult,
        rounding_step: u32,
    ) -> Self {
        Self {
            drug: drug.to_string(),
            label: rule.label.get(locale).to_string(),
            interval: rule.interval.get(locale).to_string(),
            locale,
            weight_kg,
            per_dose_mg: result.per_dose,
            max_daily_mg: result.max_daily,
            rounding_step,
            calculated_at: Utc::now(),
        }
    }
}
