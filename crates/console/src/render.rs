// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of the table and the chart.

use clap::ValueEnum;
use emp_console::{ChartAggregator, ListPage, ListRow};
use emp_console_domain::{EmployeeRecord, SortField, field_text};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt::{self, Write};

/// Widest bar or plot, in characters.
const CHART_WIDTH: usize = 40;

const TABLE_HEADERS: [&str; 10] = [
    "", "Id", "Name", "Designation", "DOB", "DOJ", "Age", "Salary", "Gender", "State",
];

/// How the salary series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChartKind {
    /// Horizontal bars.
    #[default]
    Bar,
    /// One point per designation.
    Line,
    /// Share of the total payroll.
    Pie,
}

fn row_cells(row: &ListRow) -> [String; 10] {
    let record: &EmployeeRecord = &row.record;
    [
        String::from(if row.selected { "[x]" } else { "[ ]" }),
        record.id.map(|id| id.to_string()).unwrap_or_default(),
        record.name.clone(),
        record.designation.clone(),
        field_text(record, SortField::DateOfBirth),
        field_text(record, SortField::DateOfJoining),
        row.age.map(|age| age.to_string()).unwrap_or_default(),
        field_text(record, SortField::Salary),
        field_text(record, SortField::Gender),
        field_text(record, SortField::State),
    ]
}

/// Renders one table page with a footer for paging and the salary total.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_table(page: &ListPage) -> Result<String, fmt::Error> {
    let cells: Vec<[String; 10]> = page.rows.iter().map(row_cells).collect();

    let mut widths: [usize; 10] = TABLE_HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out: String = String::new();
    push_row(&mut out, &TABLE_HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &cells {
        push_row(&mut out, row, &widths)?;
    }
    if cells.is_empty() {
        writeln!(out, "No employees found")?;
    }

    writeln!(
        out,
        "Page {} of {} ({} employees). Total salary: {}",
        page.page, page.total_pages, page.filtered_count, page.salary_total
    )?;
    Ok(out)
}

fn push_row(out: &mut String, cells: &[String; 10], widths: &[usize; 10]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

/// Scales `value` against `max` onto `0..=CHART_WIDTH`.
fn scaled(value: Decimal, max: Decimal) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    value
        .checked_div(max)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(CHART_WIDTH)))
        .and_then(|width| width.round().to_usize())
        .unwrap_or(0)
        .min(CHART_WIDTH)
}

/// Renders the salary-by-designation series.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_chart(chart: &ChartAggregator, kind: ChartKind) -> Result<String, fmt::Error> {
    let mut out: String = String::from("Salary by Designation\n");
    if chart.series().is_empty() {
        out.push_str("No salary data\n");
        return Ok(out);
    }

    let label_width: usize = chart
        .labels()
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let max: Decimal = chart
        .series()
        .iter()
        .map(|entry| entry.total)
        .max()
        .unwrap_or(Decimal::ZERO);

    for entry in chart.series() {
        let label: &str = &entry.designation;
        match kind {
            ChartKind::Bar => {
                let bar: String = "#".repeat(scaled(entry.total, max));
                writeln!(out, "{label:<label_width$} | {bar} {}", entry.total)?;
            }
            ChartKind::Line => {
                let offset: usize = scaled(entry.total, max);
                writeln!(
                    out,
                    "{label:<label_width$} |{:>offset$}* {}",
                    "", entry.total
                )?;
            }
            ChartKind::Pie => {
                let share: Decimal = chart.share_of_total(label).unwrap_or(Decimal::ZERO);
                let share_text: String = format!("{share:.1}");
                writeln!(
                    out,
                    "{label:<label_width$} | {share_text:>5}% {}",
                    entry.total
                )?;
            }
        }
    }
    Ok(out)
}
