use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vax_cli::pipeline::RunOutcome;
use vax_common::{FormatMode, format_value};
use vax_model::{Metric, OutputTable, QualityReport};
use vax_transform::metric_records;

pub fn print_run_summary(outcome: &RunOutcome) {
    println!("Input: {} ({} records)", outcome.source.display(), outcome.input_rows);
    println!(
        "Global series: {}",
        outcome.tables.global_series.source
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for output in OutputTable::ALL {
        let df = outcome.tables.get(output);
        let written = outcome.written.iter().find(|written| written.table == output);
        table.add_row(vec![
            Cell::new(output.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(df.height()),
            Cell::new(df.width()),
            match written {
                Some(written) => Cell::new(written.path.display()),
                None => dim_cell("not written"),
            },
        ]);
    }
    println!("{table}");
    print_ranking(outcome);
}

fn print_ranking(outcome: &RunOutcome) {
    let records = metric_records(&outcome.tables.top_countries);
    if records.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell("Date"),
        header_cell("Vaccinated"),
        header_cell("People vaccinated"),
        header_cell("Total doses"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (rank, record) in records.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(record.country.as_deref().unwrap_or("-")),
            match record.date {
                Some(date) => Cell::new(date),
                None => dim_cell("-"),
            },
            value_cell(record.rate(), FormatMode::Percentage),
            value_cell(record.metric(Metric::PeopleVaccinated), FormatMode::Millions),
            value_cell(record.metric(Metric::TotalVaccinations), FormatMode::Thousands),
        ]);
    }
    println!();
    println!("Top countries:");
    println!("{table}");
}

pub fn print_quality_report(report: &QualityReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.total_rows)]);
    table.add_row(vec![
        Cell::new("Countries"),
        Cell::new(report.unique_countries),
    ]);
    table.add_row(vec![
        Cell::new("First date"),
        date_cell(report.date_range.min_date),
    ]);
    table.add_row(vec![
        Cell::new("Last date"),
        date_cell(report.date_range.max_date),
    ]);
    table.add_row(vec![
        Cell::new("Missing values"),
        count_cell(report.total_missing()),
    ]);
    println!("{table}");

    let incomplete = report.incomplete_columns();
    if incomplete.is_empty() {
        return;
    }
    let mut columns = Table::new();
    columns.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 1, CellAlignment::Right);
    for (name, count) in incomplete {
        columns.add_row(vec![Cell::new(name), count_cell(count)]);
    }
    println!();
    println!("Incomplete columns:");
    println!("{columns}");
}

pub fn print_quality_json(report: &QualityReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize quality report")?;
    println!("{json}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<f64>, mode: FormatMode) -> Cell {
    let text = format_value(value, mode);
    if value.is_some_and(|v| !v.is_nan()) {
        Cell::new(text)
    } else {
        dim_cell(text)
    }
}

fn date_cell(date: Option<NaiveDate>) -> Cell {
    match date {
        Some(date) => Cell::new(date),
        None => dim_cell("N/A"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
