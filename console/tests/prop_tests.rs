use proptest::prelude::*;

use authentic_console::{RandomVerifier, ResultFormatter, StatsAccumulator, StdEntropy, Verifier};
use authentic_types::{Outcome, ScanRequest, ScanResult, ScanStats};
use chrono::{TimeZone, Utc};

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![Just(Outcome::Verified), Just(Outcome::Failed)]
}

proptest! {
    /// Scores land in the range of their outcome, and only there.
    #[test]
    fn verdict_score_matches_outcome(seed in any::<u64>(), input in ".*") {
        let mut verifier = RandomVerifier::new(Box::new(StdEntropy::seeded(seed)), 0.65);
        let verdict = verifier.verify(&ScanRequest::new(input));
        match verdict.outcome {
            Outcome::Verified => prop_assert!((78..=99).contains(&verdict.score)),
            Outcome::Failed => prop_assert!((12..=49).contains(&verdict.score)),
        }
    }

    /// The digest is 64 characters of lowercase hex regardless of input.
    #[test]
    fn verdict_digest_is_64_hex(seed in any::<u64>()) {
        let mut verifier = RandomVerifier::new(Box::new(StdEntropy::seeded(seed)), 0.65);
        let hex = verifier.verify(&ScanRequest::new("test")).digest.to_hex();
        prop_assert_eq!(hex.len(), 64);
        prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    /// A result built from any verdict carries exactly its outcome's flags.
    #[test]
    fn result_flags_never_mix(seed in any::<u64>()) {
        let mut verifier = RandomVerifier::new(Box::new(StdEntropy::seeded(seed)), 0.65);
        let verdict = verifier.verify(&ScanRequest::new("test"));
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap();
        let result = ScanResult::new(verdict.outcome, verdict.score, verdict.digest, at).unwrap();
        prop_assert_eq!(result.flags(), verdict.outcome.flags());
    }

    /// Each record bumps exactly one of verified/flagged and drains pending
    /// by one, flooring at zero.
    #[test]
    fn record_moves_exactly_one_counter(
        verified in 0u64..10_000,
        flagged in 0u64..10_000,
        pending in 0u64..5,
        outcomes in prop::collection::vec(outcome(), 1..20),
    ) {
        let mut acc = StatsAccumulator::new(ScanStats::new(verified, flagged, pending));
        for outcome in outcomes {
            let before = acc.snapshot();
            let after = acc.record(outcome);
            prop_assert_eq!(after.total(), before.total() + 1);
            match outcome {
                Outcome::Verified => prop_assert_eq!(after.verified, before.verified + 1),
                Outcome::Failed => prop_assert_eq!(after.flagged, before.flagged + 1),
            }
            prop_assert_eq!(after.pending, before.pending.saturating_sub(1));
        }
    }

    /// Grouping only inserts separators: removing spaces gives the hex back.
    #[test]
    fn digest_grouping_preserves_hex(bytes in prop::array::uniform32(0u8..)) {
        let hex = authentic_types::Digest::new(bytes).to_hex();
        let grouped = ResultFormatter::group_digest(&hex);
        prop_assert_eq!(grouped.replace(' ', ""), hex);
        prop_assert_eq!(grouped.split(' ').count(), 8);
    }
}
