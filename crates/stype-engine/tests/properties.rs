//! Property tests: classification invariants that must hold for any
//! record, not just the curated scenarios.

use proptest::prelude::*;

use stype_engine::Engine;
use stype_model::{PredictionRecord, Status};

fn subspecies() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("enterica".to_string()),
        Just("salamae".to_string()),
        Just("houtenae".to_string()),
    ]
}

fn serovar_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Typhimurium".to_string()),
        Just("Enteritidis".to_string()),
        Just("Agona".to_string()),
        Just(
            "Blegdam|Dublin|Enteritidis|Gueuletapee|Hillingdon|Kiel|Moscow|Naestved|Nitra|Rostock"
                .to_string()
        ),
    ]
}

fn antigen_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_string()),
        Just("i".to_string()),
        Just("g,m".to_string()),
        Just("g,p".to_string()),
        Just("1,9,12".to_string()),
        Just("1,4,[5],12".to_string()),
    ]
}

fn serogroup_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_string()),
        Just("B".to_string()),
        Just("D1".to_string()),
    ]
}

prop_compose! {
    fn arb_record()(
        subspecies in subspecies(),
        alleles in 0u32..400,
        serovar in serovar_value(),
        serovar_antigen in serovar_value(),
        serovar_cgmlst in serovar_value(),
        h1 in antigen_value(),
        h2 in antigen_value(),
        o_antigen in antigen_value(),
        serogroup in serogroup_value(),
    ) -> PredictionRecord {
        PredictionRecord {
            id: "2024-00001".to_string(),
            cgmlst_subspecies: subspecies,
            cgmlst_matching_alleles: alleles,
            cgmlst_genome_match: "SRR0000000".to_string(),
            serovar,
            serovar_antigen,
            serovar_cgmlst,
            h1,
            h2,
            o_antigen,
            serogroup,
        }
    }
}

proptest! {
    #[test]
    fn exactly_one_status_and_original_serovar_preserved(record in arb_record()) {
        let engine = Engine::standard().expect("standard engine");
        let input_serovar = record.serovar.clone();
        let classified = engine.classify_record(record);

        prop_assert!(Status::ALL.contains(&classified.status));
        prop_assert_eq!(classified.serovar_original, input_serovar);
    }

    #[test]
    fn malformed_counts_always_route_to_inconsistent(record in arb_record()) {
        let engine = Engine::standard().expect("standard engine");
        let classified = engine.classify_record(record);

        if classified.consistency_count != 1 || classified.filter_match_count > 1 {
            prop_assert_eq!(classified.status, Status::ReviewInconsistent);
        } else {
            prop_assert_ne!(classified.status, Status::ReviewInconsistent);
        }
    }

    #[test]
    fn batch_outcome_is_order_independent(
        records in prop::collection::vec(arb_record(), 1..12),
    ) {
        let engine = Engine::standard().expect("standard engine");
        let forward = engine.classify(records.clone());

        let mut reversed_input = records;
        reversed_input.reverse();
        let mut backward = engine.classify(reversed_input);
        backward.reverse();

        for (a, b) in forward.iter().zip(backward.iter()) {
            prop_assert_eq!(a.status, b.status);
            prop_assert_eq!(a.consistency_count, b.consistency_count);
            prop_assert_eq!(a.filter_match_count, b.filter_match_count);
            prop_assert_eq!(&a.record.serovar, &b.record.serovar);
        }
    }
}
