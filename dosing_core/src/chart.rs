//! Weight-indexed dosing charts with CSV export.

use crate::{calc_dose, validate_weight, Error, Result, RuleTable};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Upper bound on rows in one chart
pub const MAX_CHART_ROWS: usize = 10_000;

/// One row of a dosing chart
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartRow {
    pub weight_kg: f64,
    pub per_dose_mg: u32,
    pub max_daily_mg: u32,
}

/// Compute doses for every weight from `from_kg` to `to_kg` (inclusive)
/// in increments of `by_kg`
pub fn dosing_chart(
    rules: &RuleTable,
    drug: &str,
    from_kg: f64,
    to_kg: f64,
    by_kg: f64,
    step: u32,
) -> Result<Vec<ChartRow>> {
    if !by_kg.is_finite() || by_kg <= 0.0 {
        return Err(Error::Config(format!(
            "Chart increment must be positive, got {}",
            by_kg
        )));
    }
    if from_kg > to_kg {
        return Err(Error::Config(format!(
            "Chart start {} kg is above end {} kg",
            from_kg, to_kg
        )));
    }
    validate_weight(from_kg)?;
    validate_weight(to_kg)?;
    rules.lookup(drug)?;

    // Index-based stepping avoids accumulating float error.
    let intervals = ((to_kg - from_kg) / by_kg + 1e-9).floor();
    if intervals >= MAX_CHART_ROWS as f64 {
        return Err(Error::Config(format!(
            "Chart increment {} kg gives more than {} rows",
            by_kg, MAX_CHART_ROWS
        )));
    }
    let count = intervals as usize;
    let mut rows = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let weight_kg = from_kg + by_kg * i as f64;
        let result = calc_dose(rules, weight_kg, drug, step)?;
        rows.push(ChartRow {
            weight_kg,
            per_dose_mg: result.per_dose,
            max_daily_mg: result.max_daily,
        });
    }

    tracing::info!(
        "Built {} chart with {} rows ({}-{} kg)",
        drug,
        rows.len(),
        from_kg,
        to_kg
    );
    Ok(rows)
}

/// Write chart rows as CSV with a header line
pub fn write_chart_csv<W: Write>(rows: &[ChartRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
