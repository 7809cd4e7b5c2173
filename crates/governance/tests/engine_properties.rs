//! Property tests for the governance engine's bookkeeping invariants.

use conclave_governance::{GovernanceEngine, GovernanceError, VOTING_WINDOW};
use conclave_types::{CredentialId, Identity, MetadataRef, ProspectId, Tick};
use proptest::prelude::*;

fn identity(seed: u64) -> Identity {
    Identity::from_content(&seed.to_le_bytes())
}

fn dossier(seed: u64) -> MetadataRef {
    MetadataRef::from_content(&seed.to_be_bytes())
}

/// Distinct identity seeds for a bootstrap cohort.
fn cohort_seeds() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::btree_set(0u64..10_000, 1..8)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn bootstrap_order_matches_credential_ids(seeds in cohort_seeds()) {
        let cohort: Vec<Identity> = seeds.iter().map(|&s| identity(s)).collect();
        let mut engine = GovernanceEngine::new(identity(u64::MAX));
        engine.initialize_members(&cohort).unwrap();

        let token = engine.governance_token();
        prop_assert_eq!(token.total_issued(), cohort.len() as u64);
        for (i, owner) in cohort.iter().enumerate() {
            prop_assert_eq!(token.owner_of(CredentialId(i as u64 + 1)).unwrap(), *owner);
            prop_assert_eq!(token.balance_of(owner), 1);
        }
        prop_assert_eq!(engine.init_members(), cohort.as_slice());
    }

    #[test]
    fn prospect_ids_strictly_increase(
        seeds in cohort_seeds(),
        intros in proptest::collection::vec((0usize..8, 10_000u64..20_000), 1..40),
    ) {
        let cohort: Vec<Identity> = seeds.iter().map(|&s| identity(s)).collect();
        let mut engine = GovernanceEngine::new(identity(u64::MAX));
        engine.initialize_members(&cohort).unwrap();

        let mut expected = 1u64;
        for (i, (referrer_idx, candidate_seed)) in intros.iter().enumerate() {
            let referrer = cohort[referrer_idx % cohort.len()];
            let id = engine
                .introduce_prospect(
                    &referrer,
                    identity(*candidate_seed),
                    dossier(*candidate_seed),
                    Tick(i as u64),
                )
                .unwrap();
            prop_assert_eq!(id, ProspectId(expected));
            expected += 1;
        }
    }

    #[test]
    fn tallies_equal_distinct_voters(
        seeds in cohort_seeds(),
        supports in proptest::collection::vec(any::<bool>(), 0..8),
    ) {
        let cohort: Vec<Identity> = seeds.iter().map(|&s| identity(s)).collect();
        let mut engine = GovernanceEngine::new(identity(u64::MAX));
        engine.initialize_members(&cohort).unwrap();

        let id = engine
            .introduce_prospect(&cohort[0], identity(99_999), dossier(1), Tick(1))
            .unwrap();

        let voters: Vec<(Identity, bool)> = cohort
            .iter()
            .zip(supports.iter())
            .map(|(voter, support)| (*voter, *support))
            .collect();
        for (voter, support) in &voters {
            engine.vote_on_prospect(voter, id, *support, Tick(2)).unwrap();
        }

        let (for_votes, against_votes) = engine.prospect_votes(id).unwrap();
        prop_assert_eq!(for_votes + against_votes, voters.len() as u64);
        prop_assert_eq!(
            for_votes,
            voters.iter().filter(|(_, support)| *support).count() as u64
        );

        for (voter, support) in &voters {
            let receipt = engine.prospect_receipt(id, voter).unwrap();
            prop_assert!(receipt.voted);
            prop_assert_eq!(receipt.support, *support);
        }
    }

    #[test]
    fn second_vote_never_alters_the_tally(
        seeds in cohort_seeds(),
        first_support in any::<bool>(),
        second_support in any::<bool>(),
    ) {
        let cohort: Vec<Identity> = seeds.iter().map(|&s| identity(s)).collect();
        let mut engine = GovernanceEngine::new(identity(u64::MAX));
        engine.initialize_members(&cohort).unwrap();

        let id = engine
            .introduce_prospect(&cohort[0], identity(99_999), dossier(1), Tick(1))
            .unwrap();
        engine
            .vote_on_prospect(&cohort[0], id, first_support, Tick(2))
            .unwrap();
        let tally = engine.prospect_votes(id).unwrap();

        let err = engine
            .vote_on_prospect(&cohort[0], id, second_support, Tick(3))
            .unwrap_err();
        prop_assert!(
            matches!(err, GovernanceError::AlreadyVoted { .. }),
            "expected AlreadyVoted, got {:?}",
            err
        );
        prop_assert_eq!(engine.prospect_votes(id).unwrap(), tally);

        let receipt = engine.prospect_receipt(id, &cohort[0]).unwrap();
        prop_assert_eq!(receipt.support, first_support);
    }

    #[test]
    fn snapshots_round_trip_engine_state(
        seeds in cohort_seeds(),
        supports in proptest::collection::vec(any::<bool>(), 0..8),
        resolve in any::<bool>(),
    ) {
        let cohort: Vec<Identity> = seeds.iter().map(|&s| identity(s)).collect();
        let mut engine = GovernanceEngine::new(identity(u64::MAX));
        engine.initialize_members(&cohort).unwrap();

        let id = engine
            .introduce_prospect(&cohort[0], identity(99_999), dossier(1), Tick(1))
            .unwrap();
        for (voter, &support) in cohort.iter().zip(supports.iter()) {
            engine.vote_on_prospect(voter, id, support, Tick(2)).unwrap();
        }
        if resolve {
            // Outcome depends on the generated votes; both paths resolve.
            let _ = engine.induct_member(id, Tick(1).advance(VOTING_WINDOW + 1));
        }

        let bytes = engine.snapshot().unwrap();
        let restored = GovernanceEngine::restore(&bytes).unwrap();
        prop_assert_eq!(restored.snapshot().unwrap(), bytes);
        prop_assert_eq!(restored.member_count(), engine.member_count());
        prop_assert_eq!(restored.events(), engine.events());
    }
}
