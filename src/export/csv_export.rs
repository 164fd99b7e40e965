//! CSV export of projection series
//!
//! Layout:
//! `Date,Projected Value,Inflation Adjusted Value,Cumulative Contribution,Interest Earned`
//! with ISO dates and two-decimal amounts.

use chrono::NaiveDate;
use csv::{Reader, Writer};
use rust_decimal::Decimal;
use std::error::Error;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::decimal::to_currency;
use crate::insights::GoalInsights;
use crate::projection::{ProjectionPoint, ProjectionResult};

pub const PROJECTION_HEADER: [&str; 5] = [
    "Date",
    "Projected Value",
    "Inflation Adjusted Value",
    "Cumulative Contribution",
    "Interest Earned",
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write a projection as CSV rows
pub fn write_projection_csv<W: Write>(writer: W, projection: &ProjectionResult) -> Result<(), csv::Error> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(PROJECTION_HEADER)?;

    for point in &projection.points {
        csv_writer.write_record([
            point.date.format(DATE_FORMAT).to_string(),
            money(point.projected_value),
            money(point.inflation_adjusted_value),
            money(point.cumulative_contribution),
            money(point.interest_earned),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render a projection as a CSV string
pub fn projection_to_csv_string(projection: &ProjectionResult) -> Result<String, Box<dyn Error>> {
    let mut buffer = Vec::new();
    write_projection_csv(&mut buffer, projection)?;
    Ok(String::from_utf8(buffer)?)
}

/// Parse a projection CSV back into points; month index is the row position
pub fn read_projection_csv<R: Read>(reader: R) -> Result<Vec<ProjectionPoint>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().ne(PROJECTION_HEADER.iter().copied()) {
        return Err(format!("Unexpected projection header: {:?}", headers).into());
    }

    let mut points = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        if record.len() != PROJECTION_HEADER.len() {
            return Err(format!("Row {}: expected {} columns, found {}", row + 1, PROJECTION_HEADER.len(), record.len()).into());
        }

        points.push(ProjectionPoint {
            month_index: u32::try_from(row)?,
            date: NaiveDate::parse_from_str(&record[0], DATE_FORMAT)?,
            projected_value: Decimal::from_str(&record[1])?,
            inflation_adjusted_value: Decimal::from_str(&record[2])?,
            cumulative_contribution: Decimal::from_str(&record[3])?,
            interest_earned: Decimal::from_str(&record[4])?,
        });
    }

    Ok(points)
}

/// One summary row per goal, used by batch runs
pub fn write_insights_csv<'a, W, I>(writer: W, rows: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a GoalInsights)>,
{
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record([
        "Goal",
        "Required Monthly Contribution",
        "Projected Final Value",
        "Inflation Adjusted Final Value",
        "Projected Growth",
        "Total Contributions",
        "Total Interest Earned",
        "Completion Probability",
    ])?;

    for (name, insights) in rows {
        csv_writer.write_record([
            name.to_string(),
            money(insights.required_monthly_contribution),
            money(insights.projected_final_value),
            money(insights.inflation_adjusted_final_value),
            money(insights.projected_growth),
            money(insights.total_contributions),
            money(insights.total_interest_earned),
            format!("{:.2}", insights.completion_probability),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn money(value: Decimal) -> String {
    to_currency(value).to_string()
}
