use serde::Serialize;

use crate::record::PredictionRecord;
use crate::status::Status;

/// A boolean column value attached to a record by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedFlag {
    pub name: &'static str,
    pub value: bool,
}

/// A record after the full pipeline: rule/criterion/filter flags, the
/// consistency and filter-match counts, the corrected serovar and the
/// terminal status. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRecord {
    /// The input record with `serovar` corrected (at most once).
    pub record: PredictionRecord,
    /// The serovar exactly as it arrived, always preserved.
    pub serovar_original: String,
    /// One flag per registered rule, in registry order.
    pub rules: Vec<NamedFlag>,
    /// One flag per criterion, in composition order.
    pub criteria: Vec<NamedFlag>,
    /// Number of criteria groups that matched. Exactly 1 is well-formed.
    pub consistency_count: u32,
    /// One flag per filter, in registration order.
    pub filters: Vec<NamedFlag>,
    /// Number of filters that fired. At most 1 is well-formed.
    pub filter_match_count: u32,
    pub status: Status,
}

impl ClassifiedRecord {
    pub fn rule(&self, name: &str) -> Option<bool> {
        lookup(&self.rules, name)
    }

    pub fn criterion(&self, name: &str) -> Option<bool> {
        lookup(&self.criteria, name)
    }

    pub fn filter(&self, name: &str) -> Option<bool> {
        lookup(&self.filters, name)
    }

    /// True when the rule/filter authoring left this record ambiguous.
    pub fn is_consistent(&self) -> bool {
        self.consistency_count == 1 && self.filter_match_count <= 1
    }
}

fn lookup(flags: &[NamedFlag], name: &str) -> Option<bool> {
    flags
        .iter()
        .find(|flag| flag.name == name)
        .map(|flag| flag.value)
}
