//! Integration tests for the ETL pipeline.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use vax_cli::logging::PipelineLogger;
use vax_cli::pipeline::{EtlPipeline, PipelineConfig};
use vax_ingest::IngestError;
use vax_model::{OutputTable, SeriesSource};
use vax_transform::RateDerivation;

#[derive(Default)]
struct RecordingLogger {
    info: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl PipelineLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.info.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

const RAW: &str = "\
country,iso_code,date,total_vaccinations,people_vaccinated,people_vaccinated_per_hundred,daily_vaccinations
Israel,ISR,2021-01-01,100,80,10.5,
Israel,ISR,2021-01-02,200,150,20.0,100
Chile,CHL,2021-01-02,50,,5.0,50
World,OWID_WRL,2021-01-02,1000,900,1.2,500
Europe,OWID_EUR,2021-01-02,400,300,3.0,100
";

fn config(raw_dir: &Path, out_dir: &Path) -> PipelineConfig {
    PipelineConfig {
        raw_dir: raw_dir.to_path_buf(),
        out_dir: out_dir.to_path_buf(),
        ..PipelineConfig::default()
    }
}

#[test]
fn run_writes_three_tables() {
    let dir = tempdir().unwrap();
    let raw_dir = dir.path().join("raw");
    let out_dir = dir.path().join("processed");
    fs::create_dir_all(&raw_dir).unwrap();
    fs::write(raw_dir.join("country_vaccinations.csv"), RAW).unwrap();
    fs::write(raw_dir.join("country_vaccinations_by_manufacturer.csv"), "x\n1\n").unwrap();

    let logger = RecordingLogger::default();
    let pipeline = EtlPipeline::new(config(&raw_dir, &out_dir), &logger);
    let outcome = pipeline.run().unwrap();

    assert_eq!(outcome.input_rows, 5);
    assert_eq!(outcome.rate, Some(RateDerivation::CopiedPerHundred));
    assert_eq!(outcome.tables.global_series.source, SeriesSource::Sourced);
    assert_eq!(outcome.tables.country_metrics.height(), 5);
    assert_eq!(outcome.tables.top_countries.height(), 2);
    assert_eq!(outcome.written.len(), 3);
    for table in OutputTable::ALL {
        assert!(out_dir.join(table.file_name()).exists(), "{table}");
    }

    let info = logger.info.borrow();
    assert_eq!(info.first().map(String::as_str), Some("starting ETL pipeline"));
    assert!(info.iter().any(|line| line.starts_with("loaded 5 records")));
    assert!(info.last().unwrap().starts_with("ETL completed successfully"));
    assert!(logger.errors.borrow().is_empty());
}

#[test]
fn missing_input_is_reported_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let raw_dir = dir.path().join("raw");
    let out_dir = dir.path().join("processed");
    fs::create_dir_all(&raw_dir).unwrap();

    let logger = RecordingLogger::default();
    let pipeline = EtlPipeline::new(config(&raw_dir, &out_dir), &logger);
    let error = pipeline.run().unwrap_err();

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::NoInputData { .. })
    ));
    assert_eq!(logger.errors.borrow().len(), 1);
    assert!(logger.errors.borrow()[0].contains("no input data"));
    assert!(!out_dir.exists());
}

#[test]
fn absent_raw_directory_is_no_input_data() {
    let dir = tempdir().unwrap();
    let logger = RecordingLogger::default();
    let pipeline = EtlPipeline::new(
        config(&dir.path().join("data").join("raw"), &dir.path().join("out")),
        &logger,
    );
    let error = pipeline.run().unwrap_err();

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::NoInputData { .. })
    ));
    assert_eq!(logger.errors.borrow().len(), 1);
}

#[test]
fn dry_run_derives_without_writing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("extract.csv");
    fs::write(&input, RAW).unwrap();
    let out_dir = dir.path().join("processed");

    let logger = RecordingLogger::default();
    let pipeline = EtlPipeline::new(
        PipelineConfig {
            input_file: Some(input.clone()),
            out_dir: out_dir.clone(),
            dry_run: true,
            ..PipelineConfig::default()
        },
        &logger,
    );
    let outcome = pipeline.run().unwrap();

    assert_eq!(outcome.source, input);
    assert!(outcome.written.is_empty());
    assert_eq!(outcome.tables.global_series.data.height(), 1);
    assert!(!out_dir.exists());
    assert!(logger.info.borrow().iter().any(|line| line.starts_with("dry run")));
}

#[test]
fn computed_world_is_logged() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("no_world.csv");
    fs::write(
        &input,
        "country,date,people_vaccinated,population\nChile,2021-02-01,10,100\nPeru,2021-02-01,5,50\n",
    )
    .unwrap();

    let logger = RecordingLogger::default();
    let pipeline = EtlPipeline::new(
        PipelineConfig {
            input_file: Some(input),
            dry_run: true,
            ..PipelineConfig::default()
        },
        &logger,
    );
    let outcome = pipeline.run().unwrap();

    assert_eq!(outcome.rate, Some(RateDerivation::ComputedFromPopulation));
    assert_eq!(outcome.tables.global_series.source, SeriesSource::Computed);
    assert!(
        logger
            .info
            .borrow()
            .iter()
            .any(|line| line.starts_with("no World rows found"))
    );
}

#[test]
fn bad_date_aborts_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "country,date\nChile,not-a-date\n").unwrap();
    let out_dir = dir.path().join("processed");

    let logger = RecordingLogger::default();
    let pipeline = EtlPipeline::new(
        PipelineConfig {
            input_file: Some(input),
            out_dir: out_dir.clone(),
            ..PipelineConfig::default()
        },
        &logger,
    );
    let error = pipeline.run().unwrap_err();

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::DataFormat { row: 1, .. })
    ));
    assert!(!out_dir.exists());
}
