//! # Decision State Machine
//!
//! Converts a sequence of single-attempt outcomes into one verdict per address.
//!
//! A [`Campaign`] is fed outcomes one by one and tells the caller when to stop:
//! * enough successes ⇒ **reachable** right away,
//! * too many failures in a row ⇒ **unreachable** right away,
//! * attempts exhausted ⇒ reachable only if enough successes were collected.
//!
//! The state machine does no IO and never waits; pacing and timeouts belong to
//! the orchestrator in [`crate::scanner`].

use std::net::Ipv4Addr;

use sweepr_common::config::ProbePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Reachable,
    Unreachable,
}

impl Verdict {
    pub fn is_reachable(self) -> bool {
        matches!(self, Verdict::Reachable)
    }
}

/// Per-address counters. Owned by the task running the campaign, never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignState {
    pub successes: u32,
    pub consecutive_failures: u32,
    pub attempts_taken: u32,
}

/// Final result for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignVerdict {
    pub address: Ipv4Addr,
    pub verdict: Verdict,
    pub attempts_taken: u32,
}

impl CampaignVerdict {
    pub fn reachable(&self) -> bool {
        self.verdict.is_reachable()
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    max_attempts: u32,
    success_threshold: u32,
    failure_threshold: Option<u32>,
    state: CampaignState,
    verdict: Option<Verdict>,
}

impl Campaign {
    /// Starts a campaign. With `max_attempts == 0` the verdict is already
    /// [`Verdict::Unreachable`] and no attempt should be made.
    pub fn new(policy: &ProbePolicy) -> Self {
        Self {
            max_attempts: policy.max_attempts,
            success_threshold: policy.effective_success_threshold(),
            failure_threshold: policy.effective_failure_threshold(),
            state: CampaignState::default(),
            verdict: (policy.max_attempts == 0).then_some(Verdict::Unreachable),
        }
    }

    /// `Some` once the campaign has ended. No further attempts are needed after that.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn state(&self) -> CampaignState {
        self.state
    }

    /// Records one attempt and returns the verdict if this attempt ended the campaign.
    ///
    /// Outcomes recorded after the campaign ended are ignored.
    pub fn record(&mut self, succeeded: bool) -> Option<Verdict> {
        if self.verdict.is_some() {
            return self.verdict;
        }

        self.state.attempts_taken += 1;

        if succeeded {
            self.state.successes += 1;
            self.state.consecutive_failures = 0;
            if self.state.successes >= self.success_threshold {
                return self.decide(Verdict::Reachable);
            }
        } else {
            self.state.consecutive_failures += 1;
            if let Some(limit) = self.failure_threshold
                && self.state.consecutive_failures >= limit
            {
                return self.decide(Verdict::Unreachable);
            }
        }

        if self.state.attempts_taken >= self.max_attempts {
            let verdict = self.exhausted_verdict();
            return self.decide(verdict);
        }

        None
    }

    /// Ends the campaign early, e.g. when a recorded sequence runs out.
    pub fn finish(&mut self) -> Verdict {
        match self.verdict {
            Some(verdict) => verdict,
            None => {
                let verdict = self.exhausted_verdict();
                self.verdict = Some(verdict);
                verdict
            }
        }
    }

    fn exhausted_verdict(&self) -> Verdict {
        if self.state.successes >= self.success_threshold {
            Verdict::Reachable
        } else {
            Verdict::Unreachable
        }
    }

    fn decide(&mut self, verdict: Verdict) -> Option<Verdict> {
        self.verdict = Some(verdict);
        self.verdict
    }
}

/// Replays a recorded outcome sequence through a fresh campaign.
///
/// Only as many outcomes are consumed as the campaign asks for.
pub fn evaluate<I>(policy: &ProbePolicy, outcomes: I) -> (Verdict, CampaignState)
where
    I: IntoIterator<Item = bool>,
{
    let mut campaign = Campaign::new(policy);
    let mut outcomes = outcomes.into_iter();

    while campaign.verdict().is_none() {
        let Some(succeeded) = outcomes.next() else {
            break;
        };
        campaign.record(succeeded);
    }

    (campaign.finish(), campaign.state())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max: u32, successes: u32, fail_streak: Option<u32>) -> ProbePolicy {
        ProbePolicy::default()
            .with_max_attempts(max)
            .with_success_threshold(successes)
            .with_consecutive_failure_threshold(fail_streak)
    }

    #[test]
    fn test_early_success() {
        for max in [2, 5, 50] {
            let (verdict, state) = evaluate(&policy(max, 2, Some(3)), [true, true, false, false]);
            assert_eq!(verdict, Verdict::Reachable);
            assert_eq!(state.attempts_taken, 2);
        }
    }

    #[test]
    fn test_early_failure() {
        let (verdict, state) = evaluate(&policy(5, 2, Some(3)), [false, false, false, true, true]);
        assert_eq!(verdict, Verdict::Unreachable);
        assert_eq!(state.attempts_taken, 3);
        assert_eq!(state.consecutive_failures, 3);
    }

    #[test]
    fn test_success_resets_failure_streak() {
        let (verdict, state) =
            evaluate(&policy(10, 2, Some(3)), [false, false, true, false, false, true]);
        assert_eq!(verdict, Verdict::Reachable);
        assert_eq!(state.attempts_taken, 6);
    }

    #[test]
    fn test_exhaustion_without_failure_rule() {
        let (verdict, state) = evaluate(&policy(5, 2, None), [true, false, false, false, false]);
        assert_eq!(verdict, Verdict::Unreachable);
        assert_eq!(state.attempts_taken, 5);
        assert_eq!(state.successes, 1);
    }

    #[test]
    fn test_zero_failure_threshold_disables_rule() {
        let (verdict, state) = evaluate(&policy(4, 1, Some(0)), [false, false, false, true]);
        assert_eq!(verdict, Verdict::Reachable);
        assert_eq!(state.attempts_taken, 4);
    }

    #[test]
    fn test_never_exceeds_max_attempts() {
        let (verdict, state) = evaluate(&policy(3, 5, None), std::iter::repeat(true));
        assert_eq!(verdict, Verdict::Unreachable);
        assert_eq!(state.attempts_taken, 3);
    }

    #[test]
    fn test_zero_max_attempts() {
        let campaign = Campaign::new(&policy(0, 1, None));
        assert_eq!(campaign.verdict(), Some(Verdict::Unreachable));

        let (verdict, state) = evaluate(&policy(0, 1, None), [true, true]);
        assert_eq!(verdict, Verdict::Unreachable);
        assert_eq!(state.attempts_taken, 0);
    }

    #[test]
    fn test_success_threshold_normalised() {
        let (verdict, state) = evaluate(&policy(5, 0, Some(3)), [true]);
        assert_eq!(verdict, Verdict::Reachable);
        assert_eq!(state.attempts_taken, 1);
    }

    #[test]
    fn test_record_after_verdict_is_ignored() {
        let mut campaign = Campaign::new(&policy(5, 1, Some(1)));
        assert_eq!(campaign.record(false), Some(Verdict::Unreachable));
        assert_eq!(campaign.record(true), Some(Verdict::Unreachable));
        assert_eq!(campaign.state().attempts_taken, 1);
    }

    #[test]
    fn test_short_sequence_finishes_on_counts() {
        let (verdict, state) = evaluate(&policy(5, 2, None), [true]);
        assert_eq!(verdict, Verdict::Unreachable);
        assert_eq!(state.attempts_taken, 1);
    }

    #[test]
    fn test_replay_is_deterministic() {
        for _ in 0..200 {
            let max = rand::random_range(0..8);
            let successes = rand::random_range(0..4);
            let streak = match rand::random_range(0..4) {
                0 => None,
                n => Some(n),
            };
            let policy = policy(max, successes, streak);
            let outcomes: Vec<bool> = (0..8).map(|_| rand::random_bool(0.5)).collect();

            let first = evaluate(&policy, outcomes.iter().copied());
            let second = evaluate(&policy, outcomes.iter().copied());
            assert_eq!(first, second);
            assert!(first.1.attempts_taken <= max);
        }
    }
}
