use serde::{Deserialize, Serialize};

/// Terminal QC label assigned to a record. Exactly one per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "REVIEW")]
    Review,
    #[serde(rename = "REVIEW, EDGE")]
    ReviewEdge,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "REVIEW, INCONSISTENT")]
    ReviewInconsistent,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pass,
        Status::Review,
        Status::ReviewEdge,
        Status::Fail,
        Status::ReviewInconsistent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Review => "REVIEW",
            Status::ReviewEdge => "REVIEW, EDGE",
            Status::Fail => "FAIL",
            Status::ReviewInconsistent => "REVIEW, INCONSISTENT",
        }
    }

    /// True when a human should look at the record before release.
    pub fn needs_review(self) -> bool {
        self != Status::Pass
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
