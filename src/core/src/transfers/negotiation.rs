use crate::transfers::RejectionReason;
use serde::{Deserialize, Serialize};

pub const MAX_NEGOTIATION_ROUNDS: u8 = 3;

/// Percent of value.
const OPENING_BID: f64 = 85.0;
const BID_RAISE: f64 = 10.0;
const ASK_CONCESSION: f64 = 5.0;

/// Seller asking multiplier for a first-choice player.
pub const KEY_PLAYER_MULTIPLIER: f64 = 1.3;
pub const SQUAD_PLAYER_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NegotiationOutcome {
    Accepted { fee: f64, rounds: u8 },
    Rejected(RejectionReason),
}

impl NegotiationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, NegotiationOutcome::Accepted { .. })
    }
}

/// Alternating bids: the buyer opens at 85% of `value` and raises 10% of
/// value per round up to `budget`, the seller asks `value * multiplier` and
/// concedes 5% per round. A round succeeds when the bid meets the ask.
pub fn negotiate_transfer(value: f64, seller_multiplier: f64, budget: f64, max_rounds: u8) -> NegotiationOutcome {
    let rounds = max_rounds.clamp(1, MAX_NEGOTIATION_ROUNDS);

    if value <= 0.0 || budget < value * OPENING_BID / 100.0 {
        return NegotiationOutcome::Rejected(RejectionReason::InsufficientBudget);
    }

    let mut capped = false;

    for round in 1..=rounds {
        let step = (round - 1) as f64;

        let ask_pct = seller_multiplier * (100.0 - ASK_CONCESSION * step);
        let mut bid_pct = OPENING_BID + BID_RAISE * step;

        if value * bid_pct / 100.0 > budget {
            bid_pct = budget / value * 100.0;
            capped = true;
        }

        if bid_pct >= ask_pct {
            return NegotiationOutcome::Accepted {
                fee: value * bid_pct / 100.0,
                rounds: round,
            };
        }
    }

    match capped {
        true => NegotiationOutcome::Rejected(RejectionReason::InsufficientBudget),
        false => NegotiationOutcome::Rejected(RejectionReason::NegotiationExhausted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn squad_player_sells_in_the_second_round() {
        let outcome = negotiate_transfer(1_000_000.0, SQUAD_PLAYER_MULTIPLIER, 5_000_000.0, 3);

        match outcome {
            NegotiationOutcome::Accepted { fee, rounds } => {
                assert_eq!(rounds, 2);
                assert!((fee - 950_000.0).abs() < 1e-6);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn key_player_holds_out() {
        let outcome = negotiate_transfer(1_000_000.0, KEY_PLAYER_MULTIPLIER, 5_000_000.0, 3);

        assert_eq!(outcome, NegotiationOutcome::Rejected(RejectionReason::NegotiationExhausted));
    }

    #[test]
    fn one_round_is_not_enough() {
        let outcome = negotiate_transfer(1_000_000.0, SQUAD_PLAYER_MULTIPLIER, 5_000_000.0, 1);

        assert_eq!(outcome, NegotiationOutcome::Rejected(RejectionReason::NegotiationExhausted));
    }

    #[test]
    fn poor_buyers_cannot_open() {
        let outcome = negotiate_transfer(1_000_000.0, SQUAD_PLAYER_MULTIPLIER, 500_000.0, 3);

        assert_eq!(outcome, NegotiationOutcome::Rejected(RejectionReason::InsufficientBudget));
    }

    #[test]
    fn budget_cap_ends_as_insufficient_budget() {
        let outcome = negotiate_transfer(1_000_000.0, SQUAD_PLAYER_MULTIPLIER, 850_000.0, 3);

        assert_eq!(outcome, NegotiationOutcome::Rejected(RejectionReason::InsufficientBudget));
    }

    proptest! {
        #[test]
        fn terminates_within_budget_and_rounds(
            value in 10_000.0f64..50_000_000.0,
            multiplier in 1.0f64..1.5,
            budget in 0.0f64..80_000_000.0,
            rounds in 0u8..10,
        ) {
            match negotiate_transfer(value, multiplier, budget, rounds) {
                NegotiationOutcome::Accepted { fee, rounds: used } => {
                    prop_assert!(used >= 1 && used <= MAX_NEGOTIATION_ROUNDS);
                    prop_assert!(fee <= budget + 1e-6);
                }
                NegotiationOutcome::Rejected(reason) => {
                    prop_assert!(matches!(
                        reason,
                        RejectionReason::InsufficientBudget | RejectionReason::NegotiationExhausted
                    ));
                }
            }
        }
    }
}
