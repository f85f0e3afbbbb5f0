//! Report output tests over a classified table.

use std::fs;

use stype_engine::Engine;
use stype_model::{PredictionRecord, Status};
use stype_report::{
    review_rows, summary_rows, write_full_csv, write_run_report_json, write_summary_csv,
};
use tempfile::tempdir;

fn record(id: &str, alleles: u32, serovar: &str) -> PredictionRecord {
    PredictionRecord {
        id: id.to_string(),
        cgmlst_subspecies: "enterica".to_string(),
        cgmlst_matching_alleles: alleles,
        cgmlst_genome_match: "SRR0000000".to_string(),
        serovar: serovar.to_string(),
        serovar_antigen: serovar.to_string(),
        serovar_cgmlst: serovar.to_string(),
        h1: "i".to_string(),
        h2: "1,2".to_string(),
        o_antigen: "1,4,[5],12".to_string(),
        serogroup: "B".to_string(),
    }
}

fn classified_table() -> Vec<stype_model::ClassifiedRecord> {
    let engine = Engine::standard().expect("standard engine");
    engine.classify(vec![
        record("2024-00001", 350, "Typhimurium"),
        record("2024-00002", 50, "Agona"),
    ])
}

#[test]
fn summary_csv_round_trips_status_labels() {
    let table = classified_table();
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("summary.csv");
    write_summary_csv(&path, &summary_rows(&table)).expect("write summary");

    let contents = fs::read_to_string(&path).expect("read summary");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some(
            "id,cgmlst_subspecies,cgmlst_matching_alleles,serovar,serovar_original,\
             o_antigen,h1,h2,serogroup,status"
        )
    );
    assert!(contents.contains("2024-00001"));
    assert!(contents.contains("PASS"));
    assert!(contents.contains("FAIL"));
}

#[test]
fn review_subset_csv_contains_only_flagged_records() {
    let table = classified_table();
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("review.csv");
    write_summary_csv(&path, &review_rows(&table)).expect("write review");

    let contents = fs::read_to_string(&path).expect("read review");
    assert!(!contents.contains("2024-00001"));
    assert!(contents.contains("2024-00002"));
}

#[test]
fn full_csv_carries_rule_and_criterion_columns() {
    let table = classified_table();
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("full.csv");
    write_full_csv(&path, &table).expect("write full");

    let contents = fs::read_to_string(&path).expect("read full");
    let header = contents.lines().next().expect("header line");
    assert!(header.starts_with("id,cgmlst_subspecies"));
    assert!(header.contains("all_serovar_calls_must_match"));
    assert!(header.contains("consistency_count"));
    assert!(header.contains("filter_match_count"));
    assert!(header.ends_with("status"));
    // One line per record plus the header.
    assert_eq!(contents.lines().count(), table.len() + 1);
}

#[test]
fn run_report_names_schema_and_counts() {
    let table = classified_table();
    let dir = tempdir().expect("temp dir");
    let path = write_run_report_json(dir.path(), &table).expect("write report");

    let contents = fs::read_to_string(&path).expect("read report");
    let payload: serde_json::Value = serde_json::from_str(&contents).expect("parse report");
    assert_eq!(payload["schema"], "stype.run-report");
    assert_eq!(payload["schema_version"], 1);
    assert_eq!(payload["records"], 2);
    let statuses = payload["statuses"].as_array().expect("statuses array");
    assert_eq!(statuses.len(), Status::ALL.len());
    assert_eq!(statuses[0]["status"], "PASS");
    assert_eq!(statuses[0]["count"], 1);
    assert!(payload["inconsistent_ids"].as_array().expect("ids").is_empty());
}

#[test]
fn run_report_lists_inconsistent_ids() {
    let engine = Engine::standard().expect("standard engine");
    // Enteritidis edge pattern with too few alleles matches both the pass
    // and fail criteria, which routes it to REVIEW, INCONSISTENT.
    let mut conflicted = record("2024-00003", 50, "Enteritidis");
    conflicted.h1 = "g,m".to_string();
    conflicted.h2 = "-".to_string();
    conflicted.o_antigen = "1,9,12".to_string();
    conflicted.serogroup = "D1".to_string();
    conflicted.serovar_antigen =
        "Blegdam|Dublin|Enteritidis|Gueuletapee|Hillingdon|Kiel|Moscow|Naestved|Nitra|Rostock"
            .to_string();
    conflicted.serovar_cgmlst = "Enteritidis".to_string();
    let table = engine.classify(vec![conflicted]);
    assert_eq!(table[0].status, Status::ReviewInconsistent);

    let dir = tempdir().expect("temp dir");
    let path = write_run_report_json(dir.path(), &table).expect("write report");
    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read report"))
            .expect("parse report");
    assert_eq!(payload["inconsistent_ids"][0], "2024-00003");
}
