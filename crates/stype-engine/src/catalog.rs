//! The built-in MMS136 rule, criteria and filter catalog.
//!
//! Plain rules express the general acceptance criteria; edge-case rules
//! match exact literal field combinations identified during validation,
//! some additionally gated on the closest cgMLST reference genome
//! belonging to a known-problematic allowlist.
//!
//! "All serovar calls must match" uses exact triple equality across
//! `serovar`, `serovar_antigen` and `serovar_cgmlst` (see DESIGN.md for
//! the revision decision).

use crate::criteria::{CriterionSpec, RuleGroup};
use crate::filters::Filter;
use crate::rules::Rule;
use stype_model::{PredictionRecord, SENTINEL};

/// Serovar-antigen group the typing tool reports for the D1 Enteritidis /
/// Dublin cluster.
const D1_ANTIGEN_GROUP: &str =
    "Blegdam|Dublin|Enteritidis|Gueuletapee|Hillingdon|Kiel|Moscow|Naestved|Nitra|Rostock";

const PARATYPHI_B_ANTIGEN_GROUP: &str = "Paratyphi B|Paratyphi B var. Java|Limete";

/// Reference genomes for which the tool calls Paratyphi B when the sample
/// is Paratyphi B var. Java.
const PARATYPHI_B_VAR_JAVA_GENOMES: &[&str] = &[
    "SRR1970070",
    "SRR1968302",
    "SRR1967079",
    "SRR1965379",
    "SRR1968102",
];

/// Reference genomes for which the tool calls Paratyphi B var. Java when
/// the sample is Paratyphi B.
const PARATYPHI_B_GENOMES: &[&str] = &["17-7324", "17-2557"];

const SENFTENBERG_GENOME: &str = "SRR1965561";
const ABONY_GENOME: &str = "2015-SEQ-0411";

fn must_be_subsp_enterica(record: &PredictionRecord) -> bool {
    record.cgmlst_subspecies == "enterica"
}

fn must_have_at_least_300_matching_alleles(record: &PredictionRecord) -> bool {
    record.cgmlst_matching_alleles >= 300
}

/// Fewer than 100 matched cgMLST loci. Leads to an automatic FAIL.
fn must_have_fewer_100_matching_alleles(record: &PredictionRecord) -> bool {
    record.cgmlst_matching_alleles < 100
}

/// serovar, serovar_antigen and serovar_cgmlst agree exactly.
fn all_serovar_calls_must_match(record: &PredictionRecord) -> bool {
    record.serovar == record.serovar_antigen && record.serovar == record.serovar_cgmlst
}

fn serogroup_inference_must_be_present(record: &PredictionRecord) -> bool {
    record.serogroup != SENTINEL
}

/// h1, h2 and o_antigen all have calls.
fn inferences_for_all_antigens_present(record: &PredictionRecord) -> bool {
    record.h1 != SENTINEL && record.h2 != SENTINEL && record.o_antigen != SENTINEL
}

/// No antigen call and no serogroup call at all.
fn no_antigens_or_serogroup_found(record: &PredictionRecord) -> bool {
    record.no_calls_at_all()
}

/// Dublin reported as Enteritidis: g,p phase-1 antigen in the D1 group.
fn edge_case_dublin(record: &PredictionRecord) -> bool {
    record.h1 == "g,p"
        && record.h2 == SENTINEL
        && record.o_antigen == "1,9,12"
        && record.serogroup == "D1"
        && record.serovar == "Enteritidis"
        && record.serovar_antigen == D1_ANTIGEN_GROUP
}

/// Enteritidis with the multi-valued D1 antigen group. One element apart
/// from the Dublin pattern: h1 is g,m here, g,p there.
fn edge_case_enteritidis(record: &PredictionRecord) -> bool {
    record.h1 == "g,m"
        && record.h2 == SENTINEL
        && record.o_antigen == "1,9,12"
        && record.serogroup == "D1"
        && record.serovar == "Enteritidis"
        && record.serovar_antigen == D1_ANTIGEN_GROUP
}

/// Monophasic Typhimurium reported as Typhimurium.
fn edge_case_monophasic_typhimurium(record: &PredictionRecord) -> bool {
    record.h1 == "i"
        && record.h2 == SENTINEL
        && record.o_antigen == "1,4,[5],12"
        && record.serogroup == "B"
        && record.serovar == "Typhimurium"
        && record.serovar_antigen == "I 4,[5],12:i:-"
}

/// Paratyphi B var. Java reported as Paratyphi B when the closest cgMLST
/// genome is one of the known offenders.
fn edge_case_paratyphi_b_var_java(record: &PredictionRecord) -> bool {
    PARATYPHI_B_VAR_JAVA_GENOMES.contains(&record.cgmlst_genome_match.as_str())
        && record.serovar == "Paratyphi B"
        && record.serovar_cgmlst == "Paratyphi B"
        && record.serovar_antigen == PARATYPHI_B_ANTIGEN_GROUP
        && record.o_antigen == "1,4,[5],12"
        && record.h1 == "b"
        && record.h2 == "1,2"
}

/// The converse: Paratyphi B reported as Paratyphi B var. Java.
fn edge_case_paratyphi_b(record: &PredictionRecord) -> bool {
    PARATYPHI_B_GENOMES.contains(&record.cgmlst_genome_match.as_str())
        && record.serovar == "Paratyphi B var. Java"
        && record.serovar_cgmlst == "Paratyphi B var. Java"
        && record.serovar_antigen == PARATYPHI_B_ANTIGEN_GROUP
        && record.o_antigen == "1,4,[5],12"
        && record.h1 == "b"
        && record.h2 == "1,2"
}

/// Senftenberg with a Westhampton cgMLST call; a PASS, not a review.
fn edge_case_senftenberg_westhampton(record: &PredictionRecord) -> bool {
    record.cgmlst_genome_match == SENFTENBERG_GENOME
        && record.h1 == "g,[s],t"
        && record.h2 == SENTINEL
        && record.o_antigen == "1,3,19"
        && record.serovar_antigen == "Senftenberg"
        && record.serovar == "Senftenberg"
        && record.serovar_cgmlst == "Westhampton"
}

/// Typhimurium|Lagos with an Abony cgMLST call; a PASS, not a review.
fn edge_case_typhimurium_abony(record: &PredictionRecord) -> bool {
    record.cgmlst_genome_match == ABONY_GENOME
        && record.h1 == "i"
        && record.h2 == "1,2"
        && record.o_antigen == SENTINEL
        && record.serovar_antigen == "Typhimurium|Lagos"
        && record.serovar == "Typhimurium|Lagos"
        && record.serovar_cgmlst == "Abony"
}

/// Sophia (subspecies salamae) reported as monophasic Paratyphi B var. Java.
fn edge_case_sophia(record: &PredictionRecord) -> bool {
    record.cgmlst_subspecies == "salamae"
        && record.h1 == "b"
        && record.h2 == SENTINEL
        && record.o_antigen == "1,4,12,27"
        && record.serogroup == "B"
        && record.serovar == "Paratyphi B var. Java monophasic"
        && record.serovar_antigen == "II 1,4,[5],12,[27]:b:[e,n,x]"
}

const ANTIGEN_FIELDS: &[&str] = &["h1", "h2", "o_antigen"];
const EDGE_FIELDS: &[&str] = &[
    "h1",
    "h2",
    "o_antigen",
    "serogroup",
    "serovar",
    "serovar_antigen",
];
const EDGE_FIELDS_WITH_GENOME: &[&str] = &[
    "cgmlst_genome_match",
    "h1",
    "h2",
    "o_antigen",
    "serovar",
    "serovar_antigen",
    "serovar_cgmlst",
];

/// Every registered rule, in catalog order.
pub fn standard_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "must_be_subsp_enterica",
            fields: &["cgmlst_subspecies"],
            predicate: must_be_subsp_enterica,
        },
        Rule {
            name: "must_have_at_least_300_matching_alleles",
            fields: &["cgmlst_matching_alleles"],
            predicate: must_have_at_least_300_matching_alleles,
        },
        Rule {
            name: "must_have_fewer_100_matching_alleles",
            fields: &["cgmlst_matching_alleles"],
            predicate: must_have_fewer_100_matching_alleles,
        },
        Rule {
            name: "all_serovar_calls_must_match",
            fields: &["serovar", "serovar_antigen", "serovar_cgmlst"],
            predicate: all_serovar_calls_must_match,
        },
        Rule {
            name: "serogroup_inference_must_be_present",
            fields: &["serogroup"],
            predicate: serogroup_inference_must_be_present,
        },
        Rule {
            name: "inferences_for_all_antigens_present",
            fields: ANTIGEN_FIELDS,
            predicate: inferences_for_all_antigens_present,
        },
        Rule {
            name: "no_antigens_or_serogroup_found",
            fields: &["h1", "h2", "o_antigen", "serogroup"],
            predicate: no_antigens_or_serogroup_found,
        },
        Rule {
            name: "edge_case_dublin",
            fields: EDGE_FIELDS,
            predicate: edge_case_dublin,
        },
        Rule {
            name: "edge_case_enteritidis",
            fields: EDGE_FIELDS,
            predicate: edge_case_enteritidis,
        },
        Rule {
            name: "edge_case_monophasic_typhimurium",
            fields: EDGE_FIELDS,
            predicate: edge_case_monophasic_typhimurium,
        },
        Rule {
            name: "edge_case_paratyphi_b",
            fields: EDGE_FIELDS_WITH_GENOME,
            predicate: edge_case_paratyphi_b,
        },
        Rule {
            name: "edge_case_paratyphi_b_var_java",
            fields: EDGE_FIELDS_WITH_GENOME,
            predicate: edge_case_paratyphi_b_var_java,
        },
        Rule {
            name: "edge_case_senftenberg_westhampton",
            fields: EDGE_FIELDS_WITH_GENOME,
            predicate: edge_case_senftenberg_westhampton,
        },
        Rule {
            name: "edge_case_typhimurium_abony",
            fields: EDGE_FIELDS_WITH_GENOME,
            predicate: edge_case_typhimurium_abony,
        },
        Rule {
            name: "edge_case_sophia",
            fields: &[
                "cgmlst_subspecies",
                "h1",
                "h2",
                "o_antigen",
                "serogroup",
                "serovar",
                "serovar_antigen",
            ],
            predicate: edge_case_sophia,
        },
    ]
}

/// The five standard criteria.
///
/// PASS is the general acceptance conjunction OR any edge case verified to
/// auto-pass; FAIL and EDGE are disjunctions of independent conditions;
/// the two REVIEW groups are conjunctions.
pub fn standard_criteria() -> Vec<CriterionSpec> {
    vec![
        CriterionSpec::new(
            "PASS",
            vec![
                RuleGroup::new(vec![
                    "must_be_subsp_enterica",
                    "must_have_at_least_300_matching_alleles",
                    "all_serovar_calls_must_match",
                ]),
                RuleGroup::new(vec![
                    "edge_case_enteritidis",
                    "edge_case_senftenberg_westhampton",
                    "edge_case_typhimurium_abony",
                ]),
            ],
        ),
        CriterionSpec::new(
            "REVIEW_1",
            vec![RuleGroup::new(vec![
                "~all_serovar_calls_must_match",
                "serogroup_inference_must_be_present",
                "inferences_for_all_antigens_present",
            ])],
        ),
        CriterionSpec::new(
            "REVIEW_2",
            vec![RuleGroup::new(vec![
                "~must_be_subsp_enterica",
                "must_have_at_least_300_matching_alleles",
                "all_serovar_calls_must_match",
            ])],
        ),
        CriterionSpec::new(
            "FAIL",
            vec![RuleGroup::any(vec![
                "must_have_fewer_100_matching_alleles",
                "no_antigens_or_serogroup_found",
            ])],
        ),
        CriterionSpec::new(
            "EDGE",
            vec![RuleGroup::any(vec![
                "edge_case_dublin",
                "edge_case_monophasic_typhimurium",
                "edge_case_paratyphi_b",
                "edge_case_paratyphi_b_var_java",
                "edge_case_sophia",
            ])],
        ),
    ]
}

/// Serovar corrections, in resolution order.
pub fn standard_filters() -> Vec<Filter> {
    vec![
        Filter {
            name: "edge_case_dublin",
            rule: "edge_case_dublin",
            serovar: "Dublin",
        },
        Filter {
            name: "edge_case_sophia",
            rule: "edge_case_sophia",
            serovar: "Sophia",
        },
        Filter {
            name: "edge_case_paratyphi_b",
            rule: "edge_case_paratyphi_b",
            serovar: "Paratyphi B",
        },
        Filter {
            name: "edge_case_paratyphi_b_var_java",
            rule: "edge_case_paratyphi_b_var_java",
            serovar: "Paratyphi B var. Java",
        },
        Filter {
            name: "edge_case_senftenberg_westhampton",
            rule: "edge_case_senftenberg_westhampton",
            serovar: "Senftenberg",
        },
        Filter {
            name: "edge_case_typhimurium_abony",
            rule: "edge_case_typhimurium_abony",
            serovar: "Typhimurium|Lagos",
        },
    ]
}
