use serde::{Deserialize, Serialize};

/// The declared input schema. Rules name the fields they read so the
/// registry can reject a rule over a field that does not exist before any
/// record is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    CgmlstSubspecies,
    CgmlstMatchingAlleles,
    CgmlstGenomeMatch,
    Serovar,
    SerovarAntigen,
    SerovarCgmlst,
    H1,
    H2,
    OAntigen,
    Serogroup,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Id,
        Field::CgmlstSubspecies,
        Field::CgmlstMatchingAlleles,
        Field::CgmlstGenomeMatch,
        Field::Serovar,
        Field::SerovarAntigen,
        Field::SerovarCgmlst,
        Field::H1,
        Field::H2,
        Field::OAntigen,
        Field::Serogroup,
    ];

    /// Column name as it appears in the tabular schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::CgmlstSubspecies => "cgmlst_subspecies",
            Field::CgmlstMatchingAlleles => "cgmlst_matching_alleles",
            Field::CgmlstGenomeMatch => "cgmlst_genome_match",
            Field::Serovar => "serovar",
            Field::SerovarAntigen => "serovar_antigen",
            Field::SerovarCgmlst => "serovar_cgmlst",
            Field::H1 => "h1",
            Field::H2 => "h2",
            Field::OAntigen => "o_antigen",
            Field::Serogroup => "serogroup",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
