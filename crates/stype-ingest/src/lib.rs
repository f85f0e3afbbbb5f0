//! Ingestion of typing-tool CSV results.
//!
//! Each result file is checked against the declared schema before any row
//! is deserialized: a missing required column is a configuration error
//! that aborts the run, not a per-record fault. Multiple files are
//! concatenated in argument order.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{debug, info};

use stype_model::{Field, PredictionRecord};

/// Input header accepted as an alias for the `id` column; it is what the
/// typing tool writes.
const ID_ALIAS: &str = "genome";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: csv::Error,
    },
    #[error("failed to read {path}: {source}")]
    CsvRead {
        path: PathBuf,
        source: csv::Error,
    },
    #[error("{path}: required column {column} is missing from the header")]
    MissingColumn { path: PathBuf, column: String },
}

/// Read one result file, validating its header against the schema first.
pub fn read_predictions(path: &Path) -> Result<Vec<PredictionRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let headers = normalize_headers(&headers);
    validate_headers(path, &headers)?;
    reader.set_headers(headers);

    let mut records = Vec::new();
    for row in reader.deserialize::<PredictionRecord>() {
        let record = row.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }
    debug!(path = %path.display(), rows = records.len(), "read typing results");
    Ok(records)
}

/// Read and concatenate several result files, preserving argument order
/// and row order within each file.
pub fn concat_predictions(paths: &[PathBuf]) -> Result<Vec<PredictionRecord>, IngestError> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(read_predictions(path)?);
    }
    info!(files = paths.len(), rows = records.len(), "concatenated typing results");
    Ok(records)
}

/// Trim whitespace and a UTF-8 BOM from header cells.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}'))
        .collect()
}

fn validate_headers(path: &Path, headers: &StringRecord) -> Result<(), IngestError> {
    let has = |name: &str| headers.iter().any(|header| header == name);
    for field in Field::ALL {
        let name = field.as_str();
        let present = match field {
            Field::Id => has(name) || has(ID_ALIAS),
            _ => has(name),
        };
        if !present {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{normalize_headers, validate_headers};
    use csv::StringRecord;
    use std::path::Path;

    fn headers(names: &[&str]) -> StringRecord {
        names.iter().collect()
    }

    const FULL: &[&str] = &[
        "genome",
        "cgmlst_subspecies",
        "cgmlst_matching_alleles",
        "cgmlst_genome_match",
        "serovar",
        "serovar_antigen",
        "serovar_cgmlst",
        "h1",
        "h2",
        "o_antigen",
        "serogroup",
    ];

    #[test]
    fn genome_alias_satisfies_id() {
        assert!(validate_headers(Path::new("x.csv"), &headers(FULL)).is_ok());
    }

    #[test]
    fn missing_serogroup_is_rejected() {
        let mut names: Vec<&str> = FULL.to_vec();
        names.retain(|name| *name != "serogroup");
        let error = validate_headers(Path::new("x.csv"), &headers(&names)).unwrap_err();
        assert!(error.to_string().contains("serogroup"));
    }

    #[test]
    fn bom_and_padding_are_stripped() {
        let raw = headers(&["\u{feff}genome", " serovar "]);
        let normalized = normalize_headers(&raw);
        assert_eq!(&normalized[0], "genome");
        assert_eq!(&normalized[1], "serovar");
    }
}
