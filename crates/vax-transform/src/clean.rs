//! Raw table cleaning.
//!
//! Missing numeric values become zero (a simplification kept for output
//! compatibility, not imputation) and the vaccination rate is derived.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use tracing::debug;
use vax_common::{any_to_f64, any_to_i64, column_f64, is_float_dtype, is_numeric_dtype};
use vax_model::{Metric, POPULATION_COLUMN};

use crate::error::Result;

/// How `vaccination_rate_pct` was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDerivation {
    /// Copied from `people_vaccinated_per_hundred`.
    CopiedPerHundred,
    /// Computed as `people_vaccinated / population * 100`.
    ComputedFromPopulation,
}

/// A cleaned table plus what cleaning did to it.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub data: DataFrame,
    /// Numeric columns that had at least one null or NaN replaced.
    pub filled_columns: Vec<String>,
    /// `None` when neither rate source was available and the column is absent.
    pub rate: Option<RateDerivation>,
}

/// Fills numeric gaps with zero and derives `vaccination_rate_pct`.
pub fn clean_table(mut df: DataFrame) -> Result<CleanedTable> {
    let filled_columns = fill_numeric_nulls(&mut df)?;
    let rate = derive_vaccination_rate(&mut df)?;
    debug!(
        rows = df.height(),
        filled = filled_columns.len(),
        rate = ?rate,
        "cleaned raw table"
    );
    Ok(CleanedTable {
        data: df,
        filled_columns,
        rate,
    })
}

/// Replaces nulls (and NaN in float columns) with zero in every numeric column.
///
/// Integer columns come back as `Int64` and float columns as `Float64`.
/// Returns the names of the columns that had a gap.
pub fn fill_numeric_nulls(df: &mut DataFrame) -> Result<Vec<String>> {
    let numeric: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(|column| column.name().to_string())
        .collect();

    let mut filled = Vec::new();
    for name in numeric {
        let column = df.column(&name)?;
        let height = column.len();
        let (series, had_gap) = if is_float_dtype(column.dtype()) {
            let mut gap = false;
            let values: Vec<f64> = (0..height)
                .map(|idx| {
                    match any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)) {
                        Some(v) if !v.is_nan() => v,
                        _ => {
                            gap = true;
                            0.0
                        }
                    }
                })
                .collect();
            (Series::new(name.as_str().into(), values), gap)
        } else {
            let mut gap = false;
            let values: Vec<i64> = (0..height)
                .map(|idx| {
                    any_to_i64(column.get(idx).unwrap_or(AnyValue::Null)).unwrap_or_else(|| {
                        gap = true;
                        0
                    })
                })
                .collect();
            (Series::new(name.as_str().into(), values), gap)
        };
        df.with_column(series)?;
        if had_gap {
            filled.push(name);
        }
    }
    Ok(filled)
}

/// Adds `vaccination_rate_pct` using the first available source.
///
/// `people_vaccinated_per_hundred` is copied when present. Otherwise the rate
/// is computed from `people_vaccinated` and `population`; a zero population
/// yields infinity or NaN. With neither source the column is not added.
pub fn derive_vaccination_rate(df: &mut DataFrame) -> Result<Option<RateDerivation>> {
    let rate_name = Metric::VaccinationRatePct.column_name();

    let per_hundred = df
        .column(Metric::PeopleVaccinatedPerHundred.column_name())
        .ok()
        .cloned();
    if let Some(per_hundred) = per_hundred {
        df.with_column(per_hundred.with_name(rate_name.into()))?;
        return Ok(Some(RateDerivation::CopiedPerHundred));
    }

    let vaccinated = column_f64(df, Metric::PeopleVaccinated.column_name());
    let population = column_f64(df, POPULATION_COLUMN);
    let (Some(vaccinated), Some(population)) = (vaccinated, population) else {
        return Ok(None);
    };

    let rates: Vec<Option<f64>> = vaccinated
        .into_iter()
        .zip(population)
        .map(|(vaccinated, population)| match (vaccinated, population) {
            (Some(v), Some(p)) => Some(v / p * 100.0),
            _ => None,
        })
        .collect();
    df.with_column(Series::new(rate_name.into(), rates))?;
    Ok(Some(RateDerivation::ComputedFromPopulation))
}
