//! Data model for the COVID-19 vaccination ETL.
//!
//! Shared vocabulary for every crate in the workspace: which metric columns
//! the pipeline knows about, which country labels are aggregates, the names
//! of the derived tables, and the typed views used to inspect them.

pub mod labels;
pub mod metric;
pub mod output;
pub mod quality;
pub mod record;

pub use labels::{
    AGGREGATE_LABELS, CALCULATED_WORLD_LABEL, COUNTRY_COLUMN, DATE_COLUMN, POPULATION_COLUMN,
    PREFERRED_INPUT_EXCLUDE, PREFERRED_INPUT_MARKER, TOP_COUNTRIES_LIMIT, WORLD_LABEL,
    is_aggregate_label, is_world_label,
};
pub use metric::Metric;
pub use output::OutputTable;
pub use quality::{DateRange, QualityReport};
pub use record::{MetricRecord, SeriesSource};
