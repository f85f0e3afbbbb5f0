//! Criteria composer: named boolean criteria built from rule results.
//!
//! A criterion is authored as an ordered list of rule groups. Within a
//! group the members combine with AND by default, or with OR when the
//! group is an edge-case group; across groups the results combine with OR.
//! A member name prefixed with `~` is negated. Authoring is resolved by
//! name lookup at build time, never by execution order.

use crate::expr::Expr;
use crate::rules::RuleSet;
use stype_model::ConfigError;

/// How a group's members combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// AND, unless any member is an edge-case rule, then OR.
    #[default]
    Auto,
    /// Always AND.
    All,
    /// Always OR.
    Any,
}

/// One authored rule group. `~name` negates a member.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub members: Vec<&'static str>,
    pub mode: GroupMode,
}

impl RuleGroup {
    /// Conjunctive by default; a group of edge-case rules resolves to OR.
    pub fn new(members: Vec<&'static str>) -> Self {
        Self {
            members,
            mode: GroupMode::Auto,
        }
    }

    pub fn any(members: Vec<&'static str>) -> Self {
        Self {
            members,
            mode: GroupMode::Any,
        }
    }

    fn is_disjunctive(&self) -> bool {
        match self.mode {
            GroupMode::All => false,
            GroupMode::Any => true,
            GroupMode::Auto => self
                .members
                .iter()
                .any(|member| member.trim_start_matches('~').contains("edge_case")),
        }
    }

    fn compile(&self) -> Expr {
        let members: Vec<Expr> = self
            .members
            .iter()
            .map(|member| match member.strip_prefix('~') {
                Some(name) => Expr::Not(Box::new(Expr::Rule(name))),
                None => Expr::Rule(member),
            })
            .collect();
        if self.is_disjunctive() {
            Expr::Any(members)
        } else {
            Expr::All(members)
        }
    }
}

/// An authored criterion: its name and rule groups.
#[derive(Debug, Clone)]
pub struct CriterionSpec {
    pub name: &'static str,
    pub groups: Vec<RuleGroup>,
}

impl CriterionSpec {
    pub fn new(name: &'static str, groups: Vec<RuleGroup>) -> Self {
        Self { name, groups }
    }
}

/// A compiled criterion, ready to evaluate.
#[derive(Debug, Clone)]
pub struct Criterion {
    pub name: &'static str,
    pub expr: Expr,
}

/// Compile criterion specs against a rule set, validating that every
/// referenced rule exists and criterion names are unique.
pub fn compile_criteria(
    specs: &[CriterionSpec],
    rules: &RuleSet,
) -> Result<Vec<Criterion>, ConfigError> {
    let mut criteria = Vec::with_capacity(specs.len());
    let mut seen = std::collections::BTreeSet::new();
    for spec in specs {
        if !seen.insert(spec.name) {
            return Err(ConfigError::DuplicateCriterion(spec.name.to_string()));
        }
        let mut groups: Vec<Expr> = spec.groups.iter().map(RuleGroup::compile).collect();
        let expr = match groups.len() {
            1 => groups.remove(0),
            _ => Expr::Any(groups),
        };
        let mut referenced = Vec::new();
        expr.rule_names(&mut referenced);
        for name in referenced {
            if !rules.contains(name) {
                return Err(ConfigError::UnknownRuleInCriterion {
                    criterion: spec.name.to_string(),
                    rule: name.to_string(),
                });
            }
        }
        criteria.push(Criterion {
            name: spec.name,
            expr,
        });
    }
    Ok(criteria)
}
