use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use stype_engine::Engine;
use stype_ingest::concat_predictions;
use stype_model::ClassifiedRecord;
use stype_report::{
    passed_rows, review_rows, summary_rows, write_full_csv, write_run_report_json,
    write_summary_csv,
};

use crate::cli::ClassifyArgs;
use crate::summary::apply_table_style;

/// Everything `classify` produced, for the terminal summary.
pub struct ClassifyResult {
    pub output_dir: PathBuf,
    pub classified: Vec<ClassifiedRecord>,
    pub run_report: Option<PathBuf>,
}

pub fn run_classify(args: &ClassifyArgs) -> Result<ClassifyResult> {
    let engine = Engine::standard().context("build rule catalog")?;
    let span = info_span!("classify", file_count = args.files.len());
    let _guard = span.enter();

    let records = concat_predictions(&args.files)?;
    let classified = engine.classify(records);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("output"));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    write_summary_csv(&output_dir.join("summary.csv"), &summary_rows(&classified))?;
    write_summary_csv(&output_dir.join("passed.csv"), &passed_rows(&classified))?;
    write_summary_csv(&output_dir.join("review.csv"), &review_rows(&classified))?;
    if args.full {
        write_full_csv(&output_dir.join("full.csv"), &classified)?;
    }
    let run_report = if args.json_report {
        Some(write_run_report_json(&output_dir, &classified)?)
    } else {
        None
    };

    info!(
        records = classified.len(),
        output_dir = %output_dir.display(),
        "classification complete"
    );
    Ok(ClassifyResult {
        output_dir,
        classified,
        run_report,
    })
}

pub fn run_rules() -> Result<()> {
    let engine = Engine::standard().context("build rule catalog")?;

    let mut rules = Table::new();
    rules.set_header(vec!["Rule", "Fields"]);
    apply_table_style(&mut rules);
    for rule in engine.rules().iter() {
        rules.add_row(vec![rule.name.to_string(), rule.fields.join(", ")]);
    }
    println!("Rules:");
    println!("{rules}");

    let mut criteria = Table::new();
    criteria.set_header(vec!["Criterion", "Rules"]);
    apply_table_style(&mut criteria);
    for criterion in engine.criteria() {
        let mut referenced = Vec::new();
        criterion.expr.rule_names(&mut referenced);
        criteria.add_row(vec![criterion.name.to_string(), referenced.join(", ")]);
    }
    println!();
    println!("Criteria:");
    println!("{criteria}");

    let mut filters = Table::new();
    filters.set_header(vec!["Filter", "Rule", "Replacement serovar"]);
    apply_table_style(&mut filters);
    for filter in engine.filters().iter() {
        filters.add_row(vec![filter.name, filter.rule, filter.serovar]);
    }
    println!();
    println!("Filters:");
    println!("{filters}");
    Ok(())
}
