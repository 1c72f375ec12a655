//! Locale-aware text output for calculation results.

use crate::{DoseResult, DrugRule, Locale};

/// Format milligrams with locale digit grouping, e.g. `1,200 mg` / `1 200 mg`
///
/// Czech groups with a no-break space (U+00A0).
pub fn format_mg(mg: u32, locale: Locale) -> String {
    let separator = match locale {
        Locale::En => ',',
        Locale::Cs => '\u{a0}',
    };

    let digits = mg.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    format!("{} mg", grouped)
}

fn per_dose_caption(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Per-dose estimate",
        Locale::Cs => "Dávka na jednu dávku",
    }
}

fn max_daily_caption(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Max in 24 hours",
        Locale::Cs => "Maximum za 24 hodin",
    }
}

/// Message shown instead of a result when the weight is rejected
pub fn invalid_weight_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Invalid weight.",
        Locale::Cs => "Neplatná hmotnost.",
    }
}

/// Render a result card as plain text
pub fn render_result(result: &DoseResult, rule: &DrugRule, locale: Locale) -> String {
    format!(
        "{} — {}\n  {}: {}\n  {}: {}",
        rule.label.get(locale),
        rule.interval.get(locale),
        per_dose_caption(locale),
        format_mg(result.per_dose, locale),
        max_daily_caption(locale),
        format_mg(result.max_daily, locale),
    )
}
