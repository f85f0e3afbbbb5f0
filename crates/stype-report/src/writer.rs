//! CSV export of report views.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::debug;

use stype_model::{ClassifiedRecord, Field};

use crate::views::SummaryRow;

/// Write a summary-shaped view (summary, passed or review subset).
pub fn write_summary_csv(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "wrote summary view");
    Ok(())
}

/// Write the full table: every input field followed by every derived
/// column. Flag columns come from the classified records themselves, so
/// the header matches whatever registries produced the table.
pub fn write_full_csv(path: &Path, classified: &[ClassifiedRecord]) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;

    let mut header: Vec<&str> = Field::ALL.iter().map(|field| field.as_str()).collect();
    header.push("serovar_original");
    if let Some(first) = classified.first() {
        header.extend(first.rules.iter().map(|flag| flag.name));
        header.extend(first.criteria.iter().map(|flag| flag.name));
        header.push("consistency_count");
        header.extend(first.filters.iter().map(|flag| flag.name));
        header.push("filter_match_count");
    }
    header.push("status");
    writer
        .write_record(&header)
        .with_context(|| format!("write header to {}", path.display()))?;

    for item in classified {
        let record = &item.record;
        let mut row: Vec<String> = vec![
            record.id.clone(),
            record.cgmlst_subspecies.clone(),
            record.cgmlst_matching_alleles.to_string(),
            record.cgmlst_genome_match.clone(),
            record.serovar.clone(),
            record.serovar_antigen.clone(),
            record.serovar_cgmlst.clone(),
            record.h1.clone(),
            record.h2.clone(),
            record.o_antigen.clone(),
            record.serogroup.clone(),
        ];
        row.push(item.serovar_original.clone());
        row.extend(item.rules.iter().map(|flag| flag.value.to_string()));
        row.extend(item.criteria.iter().map(|flag| flag.value.to_string()));
        row.push(item.consistency_count.to_string());
        row.extend(item.filters.iter().map(|flag| flag.value.to_string()));
        row.push(item.filter_match_count.to_string());
        row.push(item.status.as_str().to_string());
        writer
            .write_record(&row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = classified.len(), "wrote full table");
    Ok(())
}
