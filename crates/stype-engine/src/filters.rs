//! Filter registry and resolver: literal serovar corrections for known
//! systematic misclassification patterns.
//!
//! Each filter ties a predicate rule to a replacement serovar. At most one
//! correction is applied per record; when more than one filter fires the
//! conflict is surfaced through the match count so the status classifier
//! can force review rather than pick silently.

use stype_model::{ConfigError, NamedFlag};

/// A correction: when `rule` is true for a record, `serovar` is the value
/// the record's serovar should have been.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    pub name: &'static str,
    pub rule: &'static str,
    pub serovar: &'static str,
}

/// Registration-ordered filter catalog. Ties between firing filters break
/// by order, not content.
#[derive(Debug, Clone)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

/// Outcome of resolving the filters against one record.
#[derive(Debug, Clone)]
pub struct FilterResolution {
    /// One flag per filter, in registration order.
    pub flags: Vec<NamedFlag>,
    /// How many filters fired. At most 1 is well-formed.
    pub match_count: u32,
    /// Replacement from the first firing filter, if any fired.
    pub replacement: Option<&'static str>,
}

impl FilterSet {
    pub fn new(filters: Vec<Filter>) -> Result<Self, ConfigError> {
        let mut seen = std::collections::BTreeSet::new();
        for filter in &filters {
            if !seen.insert(filter.name) {
                return Err(ConfigError::DuplicateFilter(filter.name.to_string()));
            }
        }
        Ok(Self { filters })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Resolve corrections for one record given its rule results.
    pub fn resolve<F>(&self, rule_result: &F) -> FilterResolution
    where
        F: Fn(&str) -> Option<bool>,
    {
        let mut flags = Vec::with_capacity(self.filters.len());
        let mut match_count = 0u32;
        let mut replacement = None;
        for filter in &self.filters {
            let fired = rule_result(filter.rule).unwrap_or(false);
            flags.push(NamedFlag {
                name: filter.name,
                value: fired,
            });
            if fired {
                match_count += 1;
                if replacement.is_none() {
                    replacement = Some(filter.serovar);
                }
            }
        }
        FilterResolution {
            flags,
            match_count,
            replacement,
        }
    }
}
