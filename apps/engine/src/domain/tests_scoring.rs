use crate::domain::state::RoundState;
use crate::domain::test_state_helpers::{bidding_round, finished_round};
use crate::errors::domain::ValidationKind;

#[test]
fn exact_and_missed_bids() {
    let mut r = finished_round(&[(2, 2), (0, 1), (1, 0)]);
    r.players[0].score = 15;
    let points = r.calculate_scores().unwrap();
    assert_eq!(points, vec![40, -10, -10]);
    assert_eq!(r.players[0].score, 55);
    assert_eq!(r.players[1].score, -10);
    assert_eq!(r.points_earned, vec![Some(40), Some(-10), Some(-10)]);
}

#[test]
fn zero_bid_made_scores_bonus_only() {
    let mut r = finished_round(&[(0, 0), (3, 3), (0, 0)]);
    assert_eq!(r.calculate_scores().unwrap(), vec![20, 50, 20]);
}

#[test]
fn scoring_twice_is_idempotent() {
    let mut r = finished_round(&[(1, 1), (2, 0), (0, 2)]);
    let first = r.calculate_scores().unwrap();
    let scores: Vec<i32> = r.players.iter().map(|p| p.score).collect();

    let second = r.calculate_scores().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        r.players.iter().map(|p| p.score).collect::<Vec<_>>(),
        scores,
        "second call must not apply points again"
    );
    assert!(r.is_scored());
}

#[test]
fn scoring_before_finish_is_rejected() {
    let mut r = bidding_round(3, 2, 0);
    let err = r.calculate_scores().unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(r.state, RoundState::Bidding);
    assert!(!r.is_scored());
}
