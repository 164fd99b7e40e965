//! Plain-text goal report
//!
//! Goal details and insights go on the first page, followed by the monthly
//! projection table. The table shows at most `max_table_rows` rows and is
//! split into pages of `rows_per_page` rows, each closed by a page footer.

use std::fmt::Write;

use crate::goal::Goal;
use crate::insights::GoalInsights;
use crate::projection::{ProjectionPoint, ProjectionResult};
use super::csv_export::DATE_FORMAT;

/// Rows of the projection table shown before truncating
pub const DEFAULT_MAX_TABLE_ROWS: usize = 50;

/// Table rows per page
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

const RULE_WIDTH: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    pub max_table_rows: usize,
    pub rows_per_page: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            max_table_rows: DEFAULT_MAX_TABLE_ROWS,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// Render the report with the default layout
pub fn render_report(goal: &Goal, projection: &ProjectionResult, insights: &GoalInsights) -> String {
    render_report_with(goal, projection, insights, ReportLayout::default())
}

pub fn render_report_with(
    goal: &Goal,
    projection: &ProjectionResult,
    insights: &GoalInsights,
    layout: ReportLayout,
) -> String {
    let mut out = String::new();
    write_report(&mut out, goal, projection, insights, layout)
        .map(|_| out)
        .unwrap_or_default()
}

/// Write the whole report into any `fmt::Write` sink
pub fn write_report<W: Write>(
    out: &mut W,
    goal: &Goal,
    projection: &ProjectionResult,
    insights: &GoalInsights,
    layout: ReportLayout,
) -> std::fmt::Result {
    let shown = projection.points.len().min(layout.max_table_rows);
    let rows_per_page = layout.rows_per_page.max(1);
    let pages: Vec<&[ProjectionPoint]> = projection.points[..shown].chunks(rows_per_page).collect();
    let total_pages = pages.len().max(1);

    write_summary(out, goal, insights)?;
    writeln!(out, "Monthly Projections")?;

    if pages.is_empty() {
        writeln!(out, "(no projection rows)")?;
        write_footer(out, 1, 1)?;
    }

    for (index, page) in pages.iter().enumerate() {
        write_table_header(out)?;
        for point in page.iter() {
            write_row(out, point)?;
        }
        if index + 1 == total_pages && projection.points.len() > shown {
            writeln!(out, "... and {} more rows", projection.points.len() - shown)?;
        }
        write_footer(out, index + 1, total_pages)?;
    }

    Ok(())
}

fn write_summary<W: Write>(out: &mut W, goal: &Goal, insights: &GoalInsights) -> std::fmt::Result {
    writeln!(out, "Financial Goal Report: {}", goal.name)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(out, "Goal Details")?;
    if let Some(description) = &goal.description {
        writeln!(out, "Description: {}", description)?;
    }
    writeln!(out, "Target Amount: ${}", goal.target_amount)?;
    writeln!(out, "Current Amount: ${}", goal.current_amount)?;
    writeln!(out, "Monthly Contribution: ${}", goal.monthly_contribution)?;
    writeln!(out, "Time Horizon: {} months", goal.time_horizon_months)?;
    writeln!(out, "Expected Return Rate: {}%", goal.expected_return_rate)?;
    writeln!(out, "Inflation Rate: {}%", goal.inflation_rate)?;
    if let Some(date) = goal.target_date {
        writeln!(out, "Target Date: {}", date.format(DATE_FORMAT))?;
    }
    writeln!(out)?;

    writeln!(out, "Projected Insights")?;
    writeln!(out, "Projected Final Value: ${}", insights.projected_final_value)?;
    writeln!(out, "Inflation Adjusted Value: ${}", insights.inflation_adjusted_final_value)?;
    writeln!(out, "Required Monthly Contribution: ${}", insights.required_monthly_contribution)?;
    writeln!(out, "Total Contributions: ${}", insights.total_contributions)?;
    writeln!(out, "Total Interest Earned: ${}", insights.total_interest_earned)?;
    writeln!(out, "Completion Probability: {:.2}%", insights.completion_probability)?;
    writeln!(out)
}

fn write_table_header<W: Write>(out: &mut W) -> std::fmt::Result {
    writeln!(
        out,
        "{:<12} {:>15} {:>18} {:>15} {:>13}",
        "Date", "Projected Value", "Inflation Adjusted", "Contributions", "Interest"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn write_row<W: Write>(out: &mut W, point: &ProjectionPoint) -> std::fmt::Result {
    writeln!(
        out,
        "{:<12} {:>15} {:>18} {:>15} {:>13}",
        point.date.format(DATE_FORMAT).to_string(),
        format!("${}", point.projected_value),
        format!("${}", point.inflation_adjusted_value),
        format!("${}", point.cumulative_contribution),
        format!("${}", point.interest_earned),
    )
}

fn write_footer<W: Write>(out: &mut W, page: usize, total: usize) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "-- Page {} of {} --", page, total)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::required_monthly_contribution;
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn build(months: u32) -> (Goal, ProjectionResult, GoalInsights) {
        let goal = Goal::new("Holiday", dec!(10000), dec!(1000), dec!(100), months, dec!(6), dec!(2))
            .with_description("Trip to Japan");
        let engine = ProjectionEngine::new(ProjectionConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        let projection = engine.project_goal(&goal).unwrap();
        let required = required_monthly_contribution(&goal, &engine.config().math).unwrap();
        let insights = GoalInsights::from_projection(&goal, &projection, required, 37.5).unwrap();
        (goal, projection, insights)
    }

    fn table_rows(report: &str) -> usize {
        report.lines().filter(|l| l.starts_with("20")).count()
    }

    #[test]
    fn test_short_report_shows_every_row() {
        let (goal, projection, insights) = build(12);
        let report = render_report(&goal, &projection, &insights);

        assert!(report.starts_with("Financial Goal Report: Holiday\n"));
        assert!(report.contains("Description: Trip to Japan"));
        assert!(report.contains("Time Horizon: 12 months"));
        assert!(report.contains("Projected Final Value: $2295.23"));
        assert!(report.contains("Required Monthly Contribution: $724.60"));
        assert!(report.contains("Completion Probability: 37.50%"));
        assert_eq!(table_rows(&report), 13);
        assert!(report.contains("-- Page 1 of 1 --"));
        assert!(!report.contains("more rows"));
    }

    #[test]
    fn test_long_report_is_capped_and_paginated() {
        let (goal, projection, insights) = build(120);
        let report = render_report(&goal, &projection, &insights);

        assert_eq!(table_rows(&report), DEFAULT_MAX_TABLE_ROWS);
        assert!(report.contains("... and 71 more rows"));
        assert!(report.contains("-- Page 1 of 2 --"));
        assert!(report.contains("-- Page 2 of 2 --"));
    }

    #[test]
    fn test_write_report_appends_to_buffer() {
        let (goal, projection, insights) = build(12);
        let mut out = String::from("header\n");
        write_report(&mut out, &goal, &projection, &insights, ReportLayout::default()).unwrap();

        assert!(out.starts_with("header\nFinancial Goal Report: Holiday\n"));
        assert_eq!(&out["header\n".len()..], render_report(&goal, &projection, &insights));
    }

    #[test]
    fn test_custom_layout() {
        let (goal, projection, insights) = build(12);
        let layout = ReportLayout { max_table_rows: 5, rows_per_page: 2 };
        let report = render_report_with(&goal, &projection, &insights, layout);

        assert_eq!(table_rows(&report), 5);
        assert!(report.contains("-- Page 3 of 3 --"));
        assert!(report.contains("... and 8 more rows"));
    }
}
