//! Rule, criteria, filter and status classification engine for serovar
//! prediction QC.
//!
//! The engine is built once from three registries (rules, criteria,
//! filters), validated for referential integrity at build time, and then
//! treated as immutable for the lifetime of a run. Classification is pure
//! and independent per record: order of input rows never changes any
//! outcome.

pub mod catalog;
pub mod classify;
pub mod criteria;
pub mod expr;
pub mod filters;
pub mod rules;

pub use catalog::{standard_criteria, standard_filters, standard_rules};
pub use classify::{CriterionFlags, consistency_count, decide};
pub use criteria::{Criterion, CriterionSpec, GroupMode, RuleGroup, compile_criteria};
pub use expr::Expr;
pub use filters::{Filter, FilterResolution, FilterSet};
pub use rules::{Rule, RuleSet};

use tracing::debug;

use stype_model::{ClassifiedRecord, ConfigError, NamedFlag, PredictionRecord};

/// A validated, immutable classification engine.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RuleSet,
    criteria: Vec<Criterion>,
    filters: FilterSet,
}

impl Engine {
    /// Build an engine from registries, validating every cross-reference.
    /// Configuration errors abort here, before any record is processed.
    pub fn new(
        rules: RuleSet,
        criteria: Vec<CriterionSpec>,
        filters: Vec<Filter>,
    ) -> Result<Self, ConfigError> {
        let criteria = compile_criteria(&criteria, &rules)?;
        let filters = FilterSet::new(filters)?;
        for filter in filters.iter() {
            if !rules.contains(filter.rule) {
                return Err(ConfigError::UnknownRuleInFilter {
                    filter: filter.name.to_string(),
                    rule: filter.rule.to_string(),
                });
            }
        }
        Ok(Self {
            rules,
            criteria,
            filters,
        })
    }

    /// The built-in MMS136 catalog.
    pub fn standard() -> Result<Self, ConfigError> {
        let rules = RuleSet::new(standard_rules())?;
        Self::new(rules, standard_criteria(), standard_filters())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Run the full pipeline for one record: rules, criteria, consistency,
    /// filter resolution, status.
    pub fn classify_record(&self, record: PredictionRecord) -> ClassifiedRecord {
        let rule_flags = self.rules.evaluate(&record);
        let lookup = |name: &str| {
            rule_flags
                .iter()
                .find(|flag| flag.name == name)
                .map(|flag| flag.value)
        };

        let criterion_flags: Vec<NamedFlag> = self
            .criteria
            .iter()
            .map(|criterion| NamedFlag {
                name: criterion.name,
                value: criterion.expr.eval(&lookup),
            })
            .collect();
        let consistency = consistency_count(&criterion_flags);

        let resolution = self.filters.resolve(&lookup);

        let status = decide(
            CriterionFlags::from_flags(&criterion_flags),
            consistency,
            resolution.match_count,
        );

        let serovar_original = record.serovar.clone();
        let mut record = record;
        if let Some(replacement) = resolution.replacement {
            record.serovar = replacement.to_string();
        }

        ClassifiedRecord {
            record,
            serovar_original,
            rules: rule_flags,
            criteria: criterion_flags,
            consistency_count: consistency,
            filters: resolution.flags,
            filter_match_count: resolution.match_count,
            status,
        }
    }

    /// Classify a batch. Records are independent; output order matches
    /// input order.
    pub fn classify(&self, records: Vec<PredictionRecord>) -> Vec<ClassifiedRecord> {
        let total = records.len();
        let classified: Vec<ClassifiedRecord> = records
            .into_iter()
            .map(|record| self.classify_record(record))
            .collect();
        let inconsistent = classified
            .iter()
            .filter(|record| !record.is_consistent())
            .count();
        debug!(total, inconsistent, "classified batch");
        classified
    }
}
