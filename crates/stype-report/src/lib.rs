//! Report generation over classified serovar predictions.
//!
//! This crate turns a classified table into the outputs a QC run hands
//! downstream:
//!
//! - **Summary** view: one row per record with the fields a reviewer needs
//! - **Passed** / **review** subsets of the summary
//! - **Full** table: every input field plus every derived column
//! - **JSON run report**: per-status counts and the ids that need attention

mod run_report;
mod views;
mod writer;

pub use run_report::write_run_report_json;
pub use views::{SummaryRow, passed_rows, review_rows, status_counts, summary_rows};
pub use writer::{write_full_csv, write_summary_csv};
