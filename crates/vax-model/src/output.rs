//! Names of the derived tables written by a pipeline run.

use std::fmt;

/// One of the three tables produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputTable {
    CountryDailyMetrics,
    GlobalTimeSeries,
    TopCountriesLatest,
}

impl OutputTable {
    /// All output tables in write order.
    pub const ALL: [OutputTable; 3] = [
        OutputTable::CountryDailyMetrics,
        OutputTable::GlobalTimeSeries,
        OutputTable::TopCountriesLatest,
    ];

    /// Base name of the table, without extension.
    pub fn name(&self) -> &'static str {
        match self {
            OutputTable::CountryDailyMetrics => "country_daily_metrics",
            OutputTable::GlobalTimeSeries => "global_time_series",
            OutputTable::TopCountriesLatest => "top_countries_latest",
        }
    }

    /// File name of the table inside the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for OutputTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
