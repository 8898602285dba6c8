//! Column names and country labels with fixed meaning in the input data.

/// Country identifier column.
pub const COUNTRY_COLUMN: &str = "country";

/// Observation date column.
pub const DATE_COLUMN: &str = "date";

/// Population column used for the rate fallback.
pub const POPULATION_COLUMN: &str = "population";

/// Country label of the sourced worldwide series.
pub const WORLD_LABEL: &str = "World";

/// Country label written on a worldwide series computed by summation.
pub const CALCULATED_WORLD_LABEL: &str = "World (Calculated)";

/// Continental and worldwide pseudo-countries excluded from rankings.
///
/// Matching is exact and case-sensitive.
pub const AGGREGATE_LABELS: [&str; 7] = [
    "World",
    "Europe",
    "Asia",
    "Africa",
    "North America",
    "South America",
    "Oceania",
];

/// Maximum number of rows in the country ranking.
pub const TOP_COUNTRIES_LIMIT: usize = 20;

/// Substring identifying the main per-country input file.
pub const PREFERRED_INPUT_MARKER: &str = "country_vaccinations";

/// Substring disqualifying an otherwise preferred input file.
pub const PREFERRED_INPUT_EXCLUDE: &str = "manufacturer";

/// Returns true if `country` is one of the aggregate labels.
pub fn is_aggregate_label(country: &str) -> bool {
    AGGREGATE_LABELS.contains(&country)
}

/// Returns true if `country` names the worldwide series, ignoring case.
pub fn is_world_label(country: &str) -> bool {
    country.to_uppercase() == WORLD_LABEL.to_uppercase()
}
