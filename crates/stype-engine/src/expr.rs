//! Boolean expression trees over rule names.
//!
//! Criteria are compiled into these trees once at engine build time; the
//! interpreter below is the only place criterion logic is evaluated, so
//! there is no operator-precedence ambiguity to inherit from string forms.

/// AND/OR/NOT expression referencing rules by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Rule(&'static str),
    Not(Box<Expr>),
    All(Vec<Expr>),
    Any(Vec<Expr>),
}

impl Expr {
    /// Evaluate against a rule-result lookup. The lookup is total for a
    /// validated engine; an unresolved name evaluates to false only in the
    /// unvalidated case exercised by tests.
    pub fn eval<F>(&self, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<bool>,
    {
        match self {
            Expr::Rule(name) => lookup(name).unwrap_or(false),
            Expr::Not(inner) => !inner.eval(lookup),
            Expr::All(items) => items.iter().all(|item| item.eval(lookup)),
            Expr::Any(items) => items.iter().any(|item| item.eval(lookup)),
        }
    }

    /// Collect every rule name the expression references.
    pub fn rule_names(&self, out: &mut Vec<&'static str>) {
        match self {
            Expr::Rule(name) => out.push(name),
            Expr::Not(inner) => inner.rule_names(out),
            Expr::All(items) | Expr::Any(items) => {
                for item in items {
                    item.rule_names(out);
                }
            }
        }
    }
}
