pub mod error;
pub mod field;
pub mod outcome;
pub mod record;
pub mod status;

pub use error::ConfigError;
pub use field::Field;
pub use outcome::{ClassifiedRecord, NamedFlag};
pub use record::{PredictionRecord, SENTINEL};
pub use status::Status;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).expect("serialize status");
            let round: Status = serde_json::from_str(&json).expect("deserialize status");
            assert_eq!(round, status);
        }
        assert_eq!(Status::ReviewEdge.to_string(), "REVIEW, EDGE");
        assert_eq!(Status::ReviewInconsistent.to_string(), "REVIEW, INCONSISTENT");
    }

    #[test]
    fn field_names_cover_schema() {
        assert_eq!(Field::ALL.len(), 11);
        assert!(Field::ALL.iter().any(|field| field.as_str() == "serovar_cgmlst"));
    }

    #[test]
    fn record_deserializes_from_genome_alias() {
        let json = r#"{
            "genome": "2099-12345",
            "cgmlst_subspecies": "enterica",
            "cgmlst_matching_alleles": 330,
            "cgmlst_genome_match": "SRR0000001",
            "serovar": "Typhimurium",
            "serovar_antigen": "Typhimurium",
            "serovar_cgmlst": "Typhimurium",
            "h1": "i",
            "h2": "1,2",
            "o_antigen": "1,4,[5],12",
            "serogroup": "B"
        }"#;
        let record: PredictionRecord = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.id, "2099-12345");
        assert_eq!(record.cgmlst_matching_alleles, 330);
    }
}
