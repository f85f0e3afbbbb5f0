//! Machine-readable run report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use stype_model::{ClassifiedRecord, Status};

use crate::views::status_counts;

const REPORT_SCHEMA: &str = "stype.run-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct RunReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    records: usize,
    statuses: Vec<StatusCount>,
    inconsistent_ids: Vec<String>,
}

#[derive(Serialize)]
struct StatusCount {
    status: Status,
    count: usize,
}

/// Write `run_report.json` under `output_dir` and return its path.
pub fn write_run_report_json(
    output_dir: &Path,
    classified: &[ClassifiedRecord],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let output_path = output_dir.join("run_report.json");
    let payload = RunReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        records: classified.len(),
        statuses: status_counts(classified)
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect(),
        inconsistent_ids: classified
            .iter()
            .filter(|item| !item.is_consistent())
            .map(|item| item.record.id.clone())
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload).context("serialize run report")?;
    fs::write(&output_path, json)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(path = %output_path.display(), "wrote run report");
    Ok(output_path)
}
