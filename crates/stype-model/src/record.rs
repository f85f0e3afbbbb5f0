use serde::{Deserialize, Serialize};

/// Literal the typing tool writes when it could not make a call for an
/// antigen or serogroup field. An ordinary value, never an error.
pub const SENTINEL: &str = "-";

/// One row of typing-tool output, as received. Fields are strings except
/// the matching-allele count; the sentinel `"-"` is carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Sample identifier. The typing tool writes this column as `genome`.
    #[serde(alias = "genome")]
    pub id: String,
    pub cgmlst_subspecies: String,
    pub cgmlst_matching_alleles: u32,
    /// Identifier of the closest reference genome in the cgMLST scheme.
    pub cgmlst_genome_match: String,
    pub serovar: String,
    pub serovar_antigen: String,
    pub serovar_cgmlst: String,
    pub h1: String,
    pub h2: String,
    pub o_antigen: String,
    pub serogroup: String,
}

impl PredictionRecord {
    /// True when every antigen field and the serogroup carry the sentinel.
    pub fn no_calls_at_all(&self) -> bool {
        self.h1 == SENTINEL
            && self.h2 == SENTINEL
            && self.o_antigen == SENTINEL
            && self.serogroup == SENTINEL
    }
}
