//! Derived views over a classified table.

use serde::Serialize;

use stype_model::{ClassifiedRecord, Status};

/// One summary row per record: the columns a reviewer scans, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub id: String,
    pub cgmlst_subspecies: String,
    pub cgmlst_matching_alleles: u32,
    pub serovar: String,
    pub serovar_original: String,
    pub o_antigen: String,
    pub h1: String,
    pub h2: String,
    pub serogroup: String,
    pub status: Status,
}

impl SummaryRow {
    fn from_classified(classified: &ClassifiedRecord) -> Self {
        let record = &classified.record;
        SummaryRow {
            id: record.id.clone(),
            cgmlst_subspecies: record.cgmlst_subspecies.clone(),
            cgmlst_matching_alleles: record.cgmlst_matching_alleles,
            serovar: record.serovar.clone(),
            serovar_original: classified.serovar_original.clone(),
            o_antigen: record.o_antigen.clone(),
            h1: record.h1.clone(),
            h2: record.h2.clone(),
            serogroup: record.serogroup.clone(),
            status: classified.status,
        }
    }
}

/// Summary view in input order.
pub fn summary_rows(classified: &[ClassifiedRecord]) -> Vec<SummaryRow> {
    classified.iter().map(SummaryRow::from_classified).collect()
}

/// Records that passed, in input order.
pub fn passed_rows(classified: &[ClassifiedRecord]) -> Vec<SummaryRow> {
    classified
        .iter()
        .filter(|item| item.status == Status::Pass)
        .map(SummaryRow::from_classified)
        .collect()
}

/// Records needing a human look, FAIL included. Sorted by status label
/// descending so EDGE and INCONSISTENT rows surface first; input order is
/// kept within a status.
pub fn review_rows(classified: &[ClassifiedRecord]) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = classified
        .iter()
        .filter(|item| item.status.needs_review())
        .map(SummaryRow::from_classified)
        .collect();
    rows.sort_by(|a, b| b.status.as_str().cmp(a.status.as_str()));
    rows
}

/// Per-status record counts, in `Status::ALL` order.
pub fn status_counts(classified: &[ClassifiedRecord]) -> Vec<(Status, usize)> {
    Status::ALL
        .iter()
        .map(|status| {
            let count = classified
                .iter()
                .filter(|item| item.status == *status)
                .count();
            (*status, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{passed_rows, review_rows, status_counts, summary_rows};
    use stype_model::{ClassifiedRecord, PredictionRecord, Status};

    fn classified(id: &str, status: Status) -> ClassifiedRecord {
        ClassifiedRecord {
            record: PredictionRecord {
                id: id.to_string(),
                cgmlst_subspecies: "enterica".to_string(),
                cgmlst_matching_alleles: 330,
                cgmlst_genome_match: "SRR0000000".to_string(),
                serovar: "Typhimurium".to_string(),
                serovar_antigen: "Typhimurium".to_string(),
                serovar_cgmlst: "Typhimurium".to_string(),
                h1: "i".to_string(),
                h2: "1,2".to_string(),
                o_antigen: "1,4,[5],12".to_string(),
                serogroup: "B".to_string(),
            },
            serovar_original: "Typhimurium".to_string(),
            rules: Vec::new(),
            criteria: Vec::new(),
            consistency_count: 1,
            filters: Vec::new(),
            filter_match_count: 0,
            status,
        }
    }

    fn mixed_table() -> Vec<ClassifiedRecord> {
        vec![
            classified("a", Status::Pass),
            classified("b", Status::Fail),
            classified("c", Status::Review),
            classified("d", Status::ReviewEdge),
            classified("e", Status::Pass),
            classified("f", Status::ReviewInconsistent),
        ]
    }

    #[test]
    fn subsets_partition_the_table() {
        let table = mixed_table();
        let passed = passed_rows(&table);
        let review = review_rows(&table);
        assert_eq!(passed.len() + review.len(), table.len());
        assert!(passed.iter().all(|row| row.status == Status::Pass));
        assert!(review.iter().all(|row| row.status != Status::Pass));
    }

    #[test]
    fn review_rows_sort_by_status_label_descending() {
        let review = review_rows(&mixed_table());
        let labels: Vec<&str> = review.iter().map(|row| row.status.as_str()).collect();
        assert_eq!(
            labels,
            vec!["REVIEW, INCONSISTENT", "REVIEW, EDGE", "REVIEW", "FAIL"]
        );
    }

    #[test]
    fn status_counts_cover_every_label() {
        let counts = status_counts(&mixed_table());
        assert_eq!(counts.len(), Status::ALL.len());
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 6);
        assert_eq!(counts[0], (Status::Pass, 2));
    }

    #[test]
    fn summary_preserves_input_order() {
        let rows = summary_rows(&mixed_table());
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f"]);
    }
}
