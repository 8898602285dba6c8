//! Typed views over rows of the derived tables.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::labels::CALCULATED_WORLD_LABEL;
use crate::metric::Metric;

/// Where the rows of a global time series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesSource {
    /// Taken verbatim from `World` rows of the input.
    Sourced,
    /// Summed across all rows per date.
    Computed,
}

impl SeriesSource {
    /// Country label carried by computed rows, if any.
    pub fn synthetic_label(&self) -> Option<&'static str> {
        match self {
            SeriesSource::Sourced => None,
            SeriesSource::Computed => Some(CALCULATED_WORLD_LABEL),
        }
    }
}

impl fmt::Display for SeriesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesSource::Sourced => f.write_str("sourced"),
            SeriesSource::Computed => f.write_str("computed"),
        }
    }
}

/// One row of a derived table: key plus whichever known metrics it carries.
///
/// A metric missing from `metrics` means the column was absent from the
/// table (or the cell was null), never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub country: Option<String>,
    pub date: Option<NaiveDate>,
    pub metrics: BTreeMap<Metric, f64>,
}

impl MetricRecord {
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.metrics.get(&metric).copied()
    }

    /// Rate used for ranking: the derived rate, else people per hundred.
    pub fn rate(&self) -> Option<f64> {
        Metric::rate_sources()
            .into_iter()
            .find_map(|metric| self.metric(metric))
    }
}
