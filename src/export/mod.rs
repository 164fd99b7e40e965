//! Renderers that turn projection output into files

pub mod csv_export;
pub mod report;

pub use csv_export::{
    projection_to_csv_string, read_projection_csv, write_insights_csv, write_projection_csv,
    PROJECTION_HEADER,
};
pub use report::{render_report, render_report_with, write_report, ReportLayout};
