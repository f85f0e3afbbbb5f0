//! Rule registry: named boolean predicates over a single record.
//!
//! Rules are plain data (name, declared fields, predicate function) held in
//! a table built once at startup. There is no discovery by naming
//! convention; a rule exists because it is registered, and registration
//! validates the declared fields against the schema.

use std::collections::BTreeMap;

use stype_model::{ConfigError, Field, NamedFlag, PredictionRecord};

/// A pure predicate over one record, with a stable unique name.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    /// Column names the predicate reads. Checked against the declared
    /// schema when the registry is built.
    pub fields: &'static [&'static str],
    pub predicate: fn(&PredictionRecord) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// The fixed catalog of rules for one classification run. Immutable after
/// construction; concurrent runs may share it read-only.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    index: BTreeMap<&'static str, usize>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        let mut index = BTreeMap::new();
        for (position, rule) in rules.iter().enumerate() {
            if index.insert(rule.name, position).is_some() {
                return Err(ConfigError::DuplicateRule(rule.name.to_string()));
            }
            for field in rule.fields {
                if !Field::ALL.iter().any(|known| known.as_str() == *field) {
                    return Err(ConfigError::UnknownField {
                        rule: rule.name.to_string(),
                        field: (*field).to_string(),
                    });
                }
            }
        }
        Ok(Self { rules, index })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against one record, in registration order.
    /// No row is dropped or reordered; the result is one flag per rule.
    pub fn evaluate(&self, record: &PredictionRecord) -> Vec<NamedFlag> {
        self.rules
            .iter()
            .map(|rule| NamedFlag {
                name: rule.name,
                value: (rule.predicate)(record),
            })
            .collect()
    }
}
