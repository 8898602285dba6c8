//! The metric vocabulary.
//!
//! Input files carry any subset of these columns. The order of
//! [`Metric::ALL`] is the column order of the country metrics table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vaccination metric column the pipeline knows how to carry through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalVaccinations,
    PeopleVaccinated,
    PeopleFullyVaccinated,
    DailyVaccinations,
    TotalVaccinationsPerHundred,
    PeopleVaccinatedPerHundred,
    PeopleFullyVaccinatedPerHundred,
    DailyVaccinationsPerMillion,
    /// Derived during cleaning, see [`Metric::rate_sources`].
    VaccinationRatePct,
}

impl Metric {
    /// Every known metric, in output column order.
    pub const ALL: [Metric; 9] = [
        Metric::TotalVaccinations,
        Metric::PeopleVaccinated,
        Metric::PeopleFullyVaccinated,
        Metric::DailyVaccinations,
        Metric::TotalVaccinationsPerHundred,
        Metric::PeopleVaccinatedPerHundred,
        Metric::PeopleFullyVaccinatedPerHundred,
        Metric::DailyVaccinationsPerMillion,
        Metric::VaccinationRatePct,
    ];

    /// Column name of the metric in input and output tables.
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::TotalVaccinations => "total_vaccinations",
            Metric::PeopleVaccinated => "people_vaccinated",
            Metric::PeopleFullyVaccinated => "people_fully_vaccinated",
            Metric::DailyVaccinations => "daily_vaccinations",
            Metric::TotalVaccinationsPerHundred => "total_vaccinations_per_hundred",
            Metric::PeopleVaccinatedPerHundred => "people_vaccinated_per_hundred",
            Metric::PeopleFullyVaccinatedPerHundred => "people_fully_vaccinated_per_hundred",
            Metric::DailyVaccinationsPerMillion => "daily_vaccinations_per_million",
            Metric::VaccinationRatePct => "vaccination_rate_pct",
        }
    }

    /// Columns the ranking sorts by, in order of preference.
    pub fn rate_sources() -> [Metric; 2] {
        [Metric::VaccinationRatePct, Metric::PeopleVaccinatedPerHundred]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_nine_unique_columns() {
        let mut names: Vec<&str> = Metric::ALL.iter().map(Metric::column_name).collect();
        assert_eq!(names.len(), 9);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn display_matches_column_name() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string(), metric.column_name());
        }
    }

    #[test]
    fn ranking_prefers_derived_rate() {
        assert_eq!(
            Metric::rate_sources(),
            [Metric::VaccinationRatePct, Metric::PeopleVaccinatedPerHundred]
        );
    }

    #[test]
    fn vocabulary_order_is_fixed() {
        assert_eq!(Metric::ALL[0], Metric::TotalVaccinations);
        assert_eq!(Metric::ALL[8], Metric::VaccinationRatePct);
    }

    #[test]
    fn serializes_as_column_name() {
        let json = serde_json::to_string(&Metric::DailyVaccinationsPerMillion).unwrap();
        assert_eq!(json, "\"daily_vaccinations_per_million\"");
    }
}
