use crate::domain::state::{Round, RoundState};
use crate::domain::test_state_helpers::bidding_round;
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

fn kind(err: crate::errors::DomainError) -> ValidationKind {
    err.validation_kind().cloned().unwrap_or(ValidationKind::Other("not a validation error".into()))
}

/// Four seats, five cards, dealer at seat 3; seats 0..=2 bid 1, 2, 0.
fn dealer_to_bid() -> Round {
    let mut r = bidding_round(4, 5, 3);
    r.make_bid(0, 1).unwrap();
    r.make_bid(1, 2).unwrap();
    r.make_bid(2, 0).unwrap();
    r
}

#[test]
fn hook_rule_rejects_only_the_exact_total() {
    let r = dealer_to_bid();
    assert_eq!(r.turn, 3);

    let mut rejected = r.clone();
    assert_eq!(kind(rejected.make_bid(3, 2).unwrap_err()), ValidationKind::InvalidBid);
    assert_eq!(rejected.state, RoundState::Bidding);
    assert_eq!(rejected.players[3].bid, None, "rejected bid must not be recorded");
    assert_eq!(rejected.turn, 3);

    for value in [0u8, 1, 3, 4, 5] {
        let mut accepted = r.clone();
        accepted.make_bid(3, value).unwrap();
        assert_eq!(accepted.state, RoundState::Playing);
        assert_eq!(accepted.turn, accepted.first_to_act);
    }
}

#[test]
fn legal_bids_exclude_forbidden_total_for_dealer_only() {
    let r = dealer_to_bid();
    assert_eq!(r.legal_bids(3), vec![0, 1, 3, 4, 5]);
    assert!(r.legal_bids(0).is_empty(), "not seat 0's turn");

    let fresh = bidding_round(4, 5, 3);
    assert_eq!(fresh.legal_bids(0), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn non_dealer_may_reach_the_total() {
    let mut r = bidding_round(3, 2, 2);
    r.make_bid(0, 2).unwrap();
    assert_eq!(r.bids_sum(), 2);
    r.make_bid(1, 0).unwrap();
    assert_eq!(r.forbidden_bid(), Some(0));
    assert_eq!(kind(r.make_bid(2, 0).unwrap_err()), ValidationKind::InvalidBid);
    r.make_bid(2, 1).unwrap();
}

#[test]
fn overshooting_others_leaves_dealer_unrestricted() {
    let mut r = bidding_round(3, 2, 2);
    r.make_bid(0, 2).unwrap();
    r.make_bid(1, 2).unwrap();
    assert_eq!(r.forbidden_bid(), None);
    assert_eq!(r.legal_bids(2), vec![0, 1, 2]);
}

#[test]
fn bid_above_hand_size_is_rejected() {
    let mut r = bidding_round(3, 2, 0);
    assert_eq!(kind(r.make_bid(1, 3).unwrap_err()), ValidationKind::InvalidBid);
}

#[test]
fn out_of_turn_bid_is_rejected() {
    let mut r = bidding_round(3, 2, 0);
    assert_eq!(kind(r.make_bid(2, 1).unwrap_err()), ValidationKind::OutOfTurn);
    assert_eq!(r.players[2].bid, None);
}

#[test]
fn bidding_outside_bidding_state_is_a_phase_error() {
    let mut r = bidding_round(3, 1, 0);
    r.state = RoundState::Playing;
    assert_eq!(kind(r.make_bid(1, 0).unwrap_err()), ValidationKind::PhaseMismatch);
}

#[test]
fn trump_choice_only_by_dealer_while_waiting() {
    let mut r = bidding_round(3, 2, 1);
    assert_eq!(
        kind(r.set_trump_suit(1, Suit::Clubs).unwrap_err()),
        ValidationKind::PhaseMismatch
    );

    r.state = RoundState::AwaitingTrumpChoice;
    r.trump = None;
    r.turn = r.dealer;
    assert_eq!(
        kind(r.set_trump_suit(0, Suit::Clubs).unwrap_err()),
        ValidationKind::OutOfTurn
    );
    assert_eq!(r.trump, None);

    r.set_trump_suit(1, Suit::Clubs).unwrap();
    assert_eq!(r.trump, Some(Suit::Clubs));
    assert_eq!(r.state, RoundState::Bidding);
    assert_eq!(r.turn, 2);
}
