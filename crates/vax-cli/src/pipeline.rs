//! Vaccination ETL pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: pick the raw CSV and parse its dates
//! 2. **Clean**: zero-fill numeric gaps, derive the vaccination rate
//! 3. **Derive**: country metrics, global series, top countries
//! 4. **Output**: commit the three tables to the output directory
//!
//! Any stage failure aborts the run before anything is written.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info_span;

use vax_ingest::{SourceTable, load_input_file, load_raw_table};
use vax_model::{OutputTable, SeriesSource};
use vax_output::{WrittenTable, write_tables};
use vax_transform::{CleanedTable, GlobalSeries, RateDerivation, clean_table};

use crate::logging::{PipelineLogger, TracingLogger};

/// Default location of the raw input files.
pub const DEFAULT_RAW_DIR: &str = "data/raw";
/// Default location of the derived tables.
pub const DEFAULT_OUT_DIR: &str = "data/processed";

/// Where the pipeline reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub raw_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Explicit input file; skips discovery in `raw_dir`.
    pub input_file: Option<PathBuf>,
    /// Derive every table but write nothing.
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            input_file: None,
            dry_run: false,
        }
    }
}

/// The three derived tables of one run.
#[derive(Debug, Clone)]
pub struct DerivedTables {
    pub country_metrics: DataFrame,
    pub global_series: GlobalSeries,
    pub top_countries: DataFrame,
}

impl DerivedTables {
    pub fn get(&self, table: OutputTable) -> &DataFrame {
        match table {
            OutputTable::CountryDailyMetrics => &self.country_metrics,
            OutputTable::GlobalTimeSeries => &self.global_series.data,
            OutputTable::TopCountriesLatest => &self.top_countries,
        }
    }

    /// Tables paired with their output names, in output order.
    pub fn outputs(&self) -> [(OutputTable, &DataFrame); 3] {
        OutputTable::ALL.map(|table| (table, self.get(table)))
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// File the raw table was read from.
    pub source: PathBuf,
    pub input_rows: usize,
    pub rate: Option<RateDerivation>,
    pub tables: DerivedTables,
    /// Committed tables; empty for a dry run.
    pub written: Vec<WrittenTable>,
}

/// Loads the raw table from an explicit file or by discovery in `raw_dir`.
pub fn load_source(raw_dir: &Path, input_file: Option<&Path>) -> Result<SourceTable> {
    match input_file {
        Some(path) => {
            load_input_file(path).with_context(|| format!("load input file {}", path.display()))
        }
        None => load_raw_table(raw_dir)
            .with_context(|| format!("load raw data from {}", raw_dir.display())),
    }
}

/// Batch ETL over one raw table.
///
/// Progress goes to the logger supplied at construction.
pub struct EtlPipeline<L = TracingLogger> {
    config: PipelineConfig,
    logger: L,
}

impl<L: PipelineLogger> EtlPipeline<L> {
    pub fn new(config: PipelineConfig, logger: L) -> Self {
        Self { config, logger }
    }

    pub fn load(&self) -> Result<SourceTable> {
        let origin = self
            .config
            .input_file
            .as_deref()
            .unwrap_or(&self.config.raw_dir);
        self.logger
            .info(&format!("loading data from {}", origin.display()));
        let source = load_source(&self.config.raw_dir, self.config.input_file.as_deref())?;
        self.logger.info(&format!(
            "loaded {} records from {}",
            source.record_count(),
            source.path().display()
        ));
        Ok(source)
    }

    pub fn clean(&self, raw: DataFrame) -> Result<CleanedTable> {
        self.logger.info("cleaning and preparing data");
        let cleaned = clean_table(raw).context("clean raw table")?;
        if cleaned.rate.is_none() {
            self.logger
                .info("no vaccination rate source columns; vaccination_rate_pct omitted");
        }
        Ok(cleaned)
    }

    pub fn create_country_metrics(&self, cleaned: &DataFrame) -> Result<DataFrame> {
        self.logger.info("creating daily country metrics");
        vax_transform::create_country_metrics(cleaned).context("create country metrics")
    }

    pub fn create_global_timeseries(&self, cleaned: &DataFrame) -> Result<GlobalSeries> {
        self.logger.info("creating global time series");
        let series =
            vax_transform::create_global_timeseries(cleaned).context("create global time series")?;
        if series.source == SeriesSource::Computed {
            self.logger
                .info("no World rows found; computed global totals from all countries");
        }
        Ok(series)
    }

    pub fn create_top_countries(&self, cleaned: &DataFrame) -> Result<DataFrame> {
        self.logger.info("creating country ranking");
        vax_transform::create_top_countries(cleaned).context("create top countries")
    }

    /// Builds all three tables from the cleaned table.
    pub fn derive(&self, cleaned: &DataFrame) -> Result<DerivedTables> {
        Ok(DerivedTables {
            country_metrics: self.create_country_metrics(cleaned)?,
            global_series: self.create_global_timeseries(cleaned)?,
            top_countries: self.create_top_countries(cleaned)?,
        })
    }

    /// Runs every stage; failures are reported to the logger and returned.
    pub fn run(&self) -> Result<RunOutcome> {
        let span = info_span!("etl", raw_dir = %self.config.raw_dir.display());
        let _guard = span.enter();
        self.logger.info("starting ETL pipeline");
        self.execute().inspect_err(|error| {
            self.logger.error(&format!("ETL pipeline failed: {error:#}"));
        })
    }

    fn execute(&self) -> Result<RunOutcome> {
        let source = self.load()?;
        let path = source.path().to_path_buf();
        let input_rows = source.record_count();
        let cleaned = self.clean(source.into_data())?;
        let tables = self.derive(&cleaned.data)?;

        let written = if self.config.dry_run {
            self.logger.info("dry run: no files written");
            Vec::new()
        } else {
            let written = write_tables(&self.config.out_dir, &tables.outputs())
                .with_context(|| format!("write outputs to {}", self.config.out_dir.display()))?;
            self.logger.info(&format!(
                "ETL completed successfully; files saved to {}",
                self.config.out_dir.display()
            ));
            written
        };

        Ok(RunOutcome {
            source: path,
            input_rows,
            rate: cleaned.rate,
            tables,
            written,
        })
    }
}
