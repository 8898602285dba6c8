//! Cleaning followed by the three table builders on a small realistic table.

use chrono::NaiveDate;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use vax_common::{column_f64, column_strings};
use vax_model::{Metric, SeriesSource};
use vax_transform::{
    RateDerivation, clean_table, create_country_metrics, create_global_timeseries,
    create_top_countries, metric_records,
};

fn raw() -> DataFrame {
    let d = |day| NaiveDate::from_ymd_opt(2021, 4, day);
    DataFrame::new(vec![
        Series::new(
            "country".into(),
            vec!["Israel", "Israel", "Chile", "Chile", "World", "Europe"],
        )
        .into_column(),
        Series::new("iso_code".into(), vec!["ISR", "ISR", "CHL", "CHL", "OWID_WRL", "OWID_EUR"])
            .into_column(),
        Series::new("date".into(), vec![d(1), d(2), d(1), d(2), d(2), d(2)]).into_column(),
        Series::new(
            "people_vaccinated".into(),
            vec![Some(5_000_i64), None, Some(3_000), Some(4_000), Some(900_000), Some(80_000)],
        )
        .into_column(),
        Series::new(
            "population".into(),
            vec![10_000_i64, 10_000, 20_000, 20_000, 8_000_000, 700_000],
        )
        .into_column(),
    ])
    .unwrap()
}

#[test]
fn rate_computed_after_zero_fill() {
    let cleaned = clean_table(raw()).unwrap();
    assert_eq!(cleaned.rate, Some(RateDerivation::ComputedFromPopulation));
    let rates = column_f64(&cleaned.data, "vaccination_rate_pct").unwrap();
    assert_eq!(rates[0], Some(50.0));
    assert_eq!(rates[1], Some(0.0));
    assert_eq!(rates[3], Some(20.0));
}

#[test]
fn derived_tables_from_cleaned_input() {
    let cleaned = clean_table(raw()).unwrap().data;

    let country = create_country_metrics(&cleaned).unwrap();
    assert_eq!(country.height(), 6);
    assert!(country.column("iso_code").is_err());
    assert!(country.column("population").is_err());
    let records = metric_records(&country);
    assert_eq!(records[0].country.as_deref(), Some("Chile"));
    assert_eq!(records[0].metric(Metric::PeopleVaccinated), Some(3_000.0));

    let global = create_global_timeseries(&cleaned).unwrap();
    assert_eq!(global.source, SeriesSource::Sourced);
    assert_eq!(global.data.height(), 1);

    let top = create_top_countries(&cleaned).unwrap();
    assert_eq!(
        column_strings(&top, "country").unwrap(),
        vec![Some("Chile".to_string()), Some("Israel".to_string())]
    );
}
