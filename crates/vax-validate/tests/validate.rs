//! Quality report over loaded tables.

use chrono::NaiveDate;
use polars::prelude::*;
use vax_validate::validate_quality;

fn table() -> DataFrame {
    let d = |day| NaiveDate::from_ymd_opt(2021, 1, day);
    DataFrame::new(vec![
        Series::new(
            "country".into(),
            vec![Some("Chile"), Some("Peru"), Some("Chile"), None],
        )
        .into_column(),
        Series::new("date".into(), vec![d(9), None, d(3), d(20)]).into_column(),
        Series::new(
            "total_vaccinations".into(),
            vec![Some(1.0), None, Some(f64::NAN), Some(4.0)],
        )
        .into_column(),
    ])
    .unwrap()
}

#[test]
fn report_counts_rows_and_missing_values() {
    let report = validate_quality(&table());
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.missing_values["country"], 1);
    assert_eq!(report.missing_values["date"], 1);
    assert_eq!(report.missing_values["total_vaccinations"], 2);
    assert_eq!(report.total_missing(), 4);
}

#[test]
fn report_distinct_countries_and_date_bounds() {
    let report = validate_quality(&table());
    assert_eq!(report.unique_countries, 2);
    assert_eq!(report.date_range.min_date, NaiveDate::from_ymd_opt(2021, 1, 3));
    assert_eq!(report.date_range.max_date, NaiveDate::from_ymd_opt(2021, 1, 20));
}

#[test]
fn report_without_key_columns_uses_defaults() {
    let df = DataFrame::new(vec![
        Series::new("people_vaccinated".into(), vec![1_i64, 2]).into_column(),
    ])
    .unwrap();
    let report = validate_quality(&df);
    assert_eq!(report.unique_countries, 0);
    assert_eq!(report.date_range.min_date, None);
    assert_eq!(report.date_range.max_date, None);
    assert_eq!(report.missing_values["people_vaccinated"], 0);
}

#[test]
fn report_serializes_to_json() {
    let report = validate_quality(&table());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_rows"], 4);
    assert_eq!(json["date_range"]["min_date"], "2021-01-03");
    assert_eq!(json["missing_values"]["total_vaccinations"], 2);
}
