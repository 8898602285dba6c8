//! Tests for loading the raw input directory.

use std::fs;

use polars::prelude::DataType;
use tempfile::TempDir;
use vax_ingest::{IngestError, SelectionReason, load_input_file, load_raw_table};

const RAW: &str = "\
country,iso_code,date,total_vaccinations,people_vaccinated
Israel,ISR,2021-01-01,100,80
Israel,ISR,2021-01-02,,90
Chile,CHL,2021-01-01,50,40
";

#[test]
fn loads_preferred_file_from_directory() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("country_vaccinations.csv"), RAW).expect("write raw");
    fs::write(
        dir.path().join("country_vaccinations_by_manufacturer.csv"),
        "location,date,vaccine\nChile,2021-01-01,Pfizer\n",
    )
    .expect("write manufacturer");

    let table = load_raw_table(dir.path()).expect("load");

    assert_eq!(table.selection.reason, SelectionReason::Preferred);
    assert!(table.path().ends_with("country_vaccinations.csv"));
    assert_eq!(table.record_count(), 3);
    assert_eq!(
        table.data.column("date").expect("date").dtype(),
        &DataType::Date
    );
    assert_eq!(
        table.data.column("total_vaccinations").expect("metric").null_count(),
        1
    );
}

#[test]
fn single_unmarked_file_is_used() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("vaccinations.csv"), RAW).expect("write raw");

    let table = load_raw_table(dir.path()).expect("load");

    assert_eq!(table.selection.reason, SelectionReason::Fallback);
    assert!(!table.selection.is_ambiguous());
    assert_eq!(table.record_count(), 3);
}

#[test]
fn empty_directory_is_no_input_data() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_raw_table(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::NoInputData { .. }));
}

#[test]
fn missing_directory_is_no_input_data() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_raw_table(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, IngestError::NoInputData { .. }));
}

#[test]
fn explicit_file_bypasses_discovery() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("snapshot.csv");
    fs::write(&path, RAW).expect("write raw");

    let table = load_input_file(&path).expect("load");

    assert_eq!(table.selection.reason, SelectionReason::Explicit);
    assert_eq!(table.into_data().height(), 3);
}

#[test]
fn bad_date_aborts_load() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("country_vaccinations.csv"),
        "country,date\nIsrael,not-a-date\n",
    )
    .expect("write raw");

    let err = load_raw_table(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::DataFormat { row: 1, .. }));
}
