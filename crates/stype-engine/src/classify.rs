//! Status classification: a flat decision table over criterion flags and
//! the two well-formedness counts. One initial state, one terminal label
//! per record, independent across records.

use stype_model::{NamedFlag, Status};

/// Criterion flags distilled to the classifier's inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriterionFlags {
    pub pass: bool,
    /// True when any criterion whose name starts with `REVIEW` matched.
    pub review_any: bool,
    pub edge: bool,
    pub fail: bool,
}

impl CriterionFlags {
    pub fn from_flags(flags: &[NamedFlag]) -> Self {
        let mut out = Self::default();
        for flag in flags {
            if !flag.value {
                continue;
            }
            match flag.name {
                "PASS" => out.pass = true,
                "EDGE" => out.edge = true,
                "FAIL" => out.fail = true,
                name if name.starts_with("REVIEW") => out.review_any = true,
                _ => {}
            }
        }
        out
    }
}

/// Number of criteria groups that matched. Each group contributes once,
/// however many OR'd members it has internally.
pub fn consistency_count(flags: &[NamedFlag]) -> u32 {
    flags.iter().filter(|flag| flag.value).count() as u32
}

/// The decision table. Rows are tried in priority order and the first
/// match wins; the first four rows are gated on the record being
/// well-formed (exactly one criterion matched, at most one filter fired).
pub fn decide(flags: CriterionFlags, consistency_count: u32, filter_match_count: u32) -> Status {
    let well_formed = consistency_count == 1 && filter_match_count <= 1;
    if !well_formed {
        return Status::ReviewInconsistent;
    }
    if flags.pass {
        Status::Pass
    } else if flags.review_any {
        Status::Review
    } else if flags.edge {
        Status::ReviewEdge
    } else if flags.fail {
        Status::Fail
    } else {
        // consistency_count == 1 with none of the primary flags set can
        // only happen with a non-standard criteria catalog; keep the
        // conservative outcome.
        Status::ReviewInconsistent
    }
}

#[cfg(test)]
mod tests {
    use super::{CriterionFlags, consistency_count, decide};
    use stype_model::{NamedFlag, Status};

    fn flags(pass: bool, review: bool, edge: bool, fail: bool) -> CriterionFlags {
        CriterionFlags {
            pass,
            review_any: review,
            edge,
            fail,
        }
    }

    #[test]
    fn well_formed_rows_in_priority_order() {
        assert_eq!(decide(flags(true, false, false, false), 1, 0), Status::Pass);
        assert_eq!(
            decide(flags(false, true, false, false), 1, 0),
            Status::Review
        );
        assert_eq!(
            decide(flags(false, false, true, false), 1, 1),
            Status::ReviewEdge
        );
        assert_eq!(decide(flags(false, false, false, true), 1, 0), Status::Fail);
    }

    #[test]
    fn malformed_counts_force_inconsistent() {
        assert_eq!(
            decide(flags(true, false, false, false), 2, 0),
            Status::ReviewInconsistent
        );
        assert_eq!(
            decide(flags(true, false, false, false), 1, 2),
            Status::ReviewInconsistent
        );
        assert_eq!(
            decide(flags(false, false, false, false), 0, 0),
            Status::ReviewInconsistent
        );
    }

    #[test]
    fn review_any_matches_by_prefix() {
        let parsed = CriterionFlags::from_flags(&[
            NamedFlag {
                name: "REVIEW_2",
                value: true,
            },
            NamedFlag {
                name: "PASS",
                value: false,
            },
        ]);
        assert!(parsed.review_any);
        assert!(!parsed.pass);
    }

    #[test]
    fn consistency_counts_groups_once() {
        let flags = [
            NamedFlag {
                name: "PASS",
                value: true,
            },
            NamedFlag {
                name: "REVIEW_1",
                value: false,
            },
            NamedFlag {
                name: "EDGE",
                value: true,
            },
        ];
        assert_eq!(consistency_count(&flags), 2);
    }
}
