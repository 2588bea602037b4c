//! The verdict seam.
//!
//! The console's verification is simulated. [`Verifier`] is the contract a
//! real implementation (signature check, provenance lookup) would satisfy:
//! request in, outcome + score + digest out. The state machine does not
//! change when the implementation does.

use authentic_types::{Digest, Entropy, Outcome, ScanRequest};

/// Decision produced for one scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    pub score: u8,
    pub digest: Digest,
}

/// Produces a verdict for a scan request.
pub trait Verifier: Send {
    fn verify(&mut self, request: &ScanRequest) -> Verdict;

    fn name(&self) -> &str;
}

/// Uniform-random placeholder verifier.
///
/// The input is ignored. The digest is random bytes, not a hash of the
/// content.
pub struct RandomVerifier {
    entropy: Box<dyn Entropy>,
    verified_probability: f64,
}

impl RandomVerifier {
    pub const DEFAULT_VERIFIED_PROBABILITY: f64 = 0.65;

    pub fn new(entropy: Box<dyn Entropy>, verified_probability: f64) -> Self {
        Self {
            entropy,
            verified_probability: verified_probability.clamp(0.0, 1.0),
        }
    }

    pub fn verified_probability(&self) -> f64 {
        self.verified_probability
    }

    fn draw_score(&mut self, outcome: Outcome) -> u8 {
        let range = outcome.score_range();
        let score = self
            .entropy
            .between(u32::from(*range.start()), u32::from(*range.end()));
        // between() is inclusive, so this never leaves the range.
        score.min(u32::from(*range.end())) as u8
    }

    fn draw_digest(&mut self) -> Digest {
        let mut bytes = [0u8; 32];
        self.entropy.fill(&mut bytes);
        Digest::new(bytes)
    }
}

impl Verifier for RandomVerifier {
    fn verify(&mut self, _request: &ScanRequest) -> Verdict {
        // A draw strictly above the failure share verifies: 0.65 → draw > 0.35.
        let threshold = 1.0 - self.verified_probability;
        let outcome = if self.entropy.unit() > threshold {
            Outcome::Verified
        } else {
            Outcome::Failed
        };
        let score = self.draw_score(outcome);
        let digest = self.draw_digest();
        Verdict {
            outcome,
            score,
            digest,
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::StdEntropy;
    use authentic_nullables::NullRandom;

    fn verifier(rng: NullRandom) -> RandomVerifier {
        RandomVerifier::new(Box::new(rng), RandomVerifier::DEFAULT_VERIFIED_PROBABILITY)
    }

    #[test]
    fn draw_above_threshold_verifies() {
        let mut v = verifier(NullRandom::constant(0.36).with_offset(5).with_byte(0xcd));
        let verdict = v.verify(&ScanRequest::new("test"));
        assert_eq!(verdict.outcome, Outcome::Verified);
        assert_eq!(verdict.score, 83);
        assert_eq!(verdict.digest, Digest::new([0xcd; 32]));
    }

    #[test]
    fn draw_at_threshold_fails() {
        let mut v = verifier(NullRandom::constant(0.35));
        let verdict = v.verify(&ScanRequest::new("test"));
        assert_eq!(verdict.outcome, Outcome::Failed);
        assert_eq!(verdict.score, 12);
    }

    #[test]
    fn probability_is_clamped() {
        let v = RandomVerifier::new(Box::new(NullRandom::constant(0.5)), 3.0);
        assert_eq!(v.verified_probability(), 1.0);
        let v = RandomVerifier::new(Box::new(NullRandom::constant(0.5)), -1.0);
        assert_eq!(v.verified_probability(), 0.0);
    }

    #[test]
    fn certain_failure_never_verifies() {
        let mut v = RandomVerifier::new(Box::new(StdEntropy::seeded(3)), 0.0);
        for _ in 0..200 {
            assert_eq!(v.verify(&ScanRequest::new("x")).outcome, Outcome::Failed);
        }
    }

    #[test]
    fn seeded_rate_is_close_to_sixty_five_percent() {
        let mut v = RandomVerifier::new(
            Box::new(StdEntropy::seeded(2026)),
            RandomVerifier::DEFAULT_VERIFIED_PROBABILITY,
        );
        let verified = (0..10_000)
            .filter(|_| v.verify(&ScanRequest::new("x")).outcome == Outcome::Verified)
            .count();
        assert!((6_000..7_000).contains(&verified), "verified {verified}");
    }
}
