use thiserror::Error;

/// Fatal registry/schema problems detected at build time, before any
/// record is processed. Per-record inconsistencies are never errors; they
/// surface as the `REVIEW, INCONSISTENT` status instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("criterion {criterion} references unknown rule {rule}")]
    UnknownRuleInCriterion { criterion: String, rule: String },
    #[error("filter {filter} references unknown rule {rule}")]
    UnknownRuleInFilter { filter: String, rule: String },
    #[error("duplicate rule name {0}")]
    DuplicateRule(String),
    #[error("duplicate criterion name {0}")]
    DuplicateCriterion(String),
    #[error("duplicate filter name {0}")]
    DuplicateFilter(String),
    #[error("rule {rule} reads field {field}, which is not in the declared schema")]
    UnknownField { rule: String, field: String },
}
