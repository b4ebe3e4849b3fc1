use crate::domain::cards_serde::CardRef;
use crate::domain::fixtures::CardFixtures;
use crate::domain::state::RoundState;
use crate::domain::test_state_helpers::round_from_hands;
use crate::domain::tricks::winning_index;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn cards(tokens: &[&str]) -> Vec<Card> {
    CardFixtures::parse_hardcoded(tokens)
}

fn kind(err: DomainError) -> Option<ValidationKind> {
    err.validation_kind().cloned()
}

#[test]
fn wild_in_trick_wins_over_trump_and_led() {
    let trick = cards(&["HEARTS-10", "CLUBS-5", "WILD-0", "NULL-0"]);
    assert_eq!(winning_index(&trick, Some(Suit::Spades)), 2);
}

#[test]
fn low_trump_beats_high_led_card() {
    let trick = cards(&["HEARTS-10", "HEARTS-13", "SPADES-2"]);
    assert_eq!(winning_index(&trick, Some(Suit::Spades)), 2);
}

#[test]
fn first_wild_wins_when_several_are_played() {
    let trick = cards(&["NULL-1", "WILD-3", "SPADES-13", "WILD-0"]);
    assert_eq!(winning_index(&trick, Some(Suit::Spades)), 1);
}

#[test]
fn leading_nulls_are_skipped_for_led_suit() {
    let trick = cards(&["NULL-0", "DIAMONDS-3", "CLUBS-13", "DIAMONDS-9"]);
    assert_eq!(winning_index(&trick, None), 3);
}

#[test]
fn all_nulls_go_to_first_player() {
    let trick = cards(&["NULL-2", "NULL-0", "NULL-1"]);
    assert_eq!(winning_index(&trick, Some(Suit::Hearts)), 0);
}

#[test]
fn off_suit_high_card_cannot_win_without_trump() {
    let trick = cards(&["CLUBS-2", "HEARTS-13", "DIAMONDS-12"]);
    assert_eq!(winning_index(&trick, None), 0);
    assert_eq!(winning_index(&trick, Some(Suit::Spades)), 0);
}

#[test]
fn highest_trump_wins_among_trumps() {
    let trick = cards(&["CLUBS-9", "HEARTS-4", "HEARTS-11", "CLUBS-13"]);
    assert_eq!(winning_index(&trick, Some(Suit::Hearts)), 2);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty trick")]
fn empty_trick_has_no_winner() {
    winning_index(&[], Some(Suit::Hearts));
}

#[test]
fn valid_moves_follow_led_suit_but_allow_specials() {
    let mut r = round_from_hands(
        vec![
            cards(&["HEARTS-5", "CLUBS-3"]),
            cards(&["NULL-3", "HEARTS-9", "SPADES-1"]),
            cards(&["WILD-0", "NULL-2", "DIAMONDS-8"]),
        ],
        2,
        None,
    );
    assert_eq!(r.valid_moves(0).len(), 2, "empty table: whole hand");

    r.play_card(0, cards(&["HEARTS-5"])[0]).unwrap();
    assert_eq!(r.valid_moves(1), cards(&["NULL-3", "HEARTS-9"]));
    assert_eq!(r.valid_moves(2).len(), 3, "void in hearts: whole hand");
}

#[test]
fn void_player_may_play_anything() {
    let mut r = round_from_hands(
        vec![
            cards(&["HEARTS-5"]),
            cards(&["CLUBS-9"]),
            cards(&["SPADES-4"]),
        ],
        2,
        Some(Suit::Spades),
    );
    r.play_card(0, cards(&["HEARTS-5"])[0]).unwrap();
    assert_eq!(r.valid_moves(1), cards(&["CLUBS-9"]));
    r.play_card(1, cards(&["CLUBS-9"])[0]).unwrap();
    assert!(r.memory.voids(1).contains(Suit::Hearts));
}

#[test]
fn wild_lead_frees_everyone() {
    let mut r = round_from_hands(
        vec![
            cards(&["WILD-1", "DIAMONDS-2"]),
            cards(&["CLUBS-9", "HEARTS-1"]),
            cards(&["SPADES-4", "SPADES-6"]),
        ],
        2,
        None,
    );
    r.play_card(0, Card::Wild(1)).unwrap();
    assert_eq!(r.valid_moves(1).len(), 2);
    r.play_card(1, cards(&["CLUBS-9"])[0]).unwrap();
    assert!(r.memory.voids(1).is_empty(), "no led suit, no inference");
}

#[test]
fn full_trick_resolves_and_hands_lead_to_winner() {
    let mut r = round_from_hands(
        vec![
            cards(&["HEARTS-10", "CLUBS-2"]),
            cards(&["HEARTS-13", "CLUBS-3"]),
            cards(&["SPADES-2", "CLUBS-4"]),
        ],
        2,
        Some(Suit::Spades),
    );
    assert_eq!(r.turn, 0);
    r.play_card(0, cards(&["HEARTS-10"])[0]).unwrap();
    r.play_card(1, cards(&["HEARTS-13"])[0]).unwrap();
    let res = r.play_card(2, cards(&["SPADES-2"])[0]).unwrap();

    assert!(res.trick_completed);
    assert_eq!(res.trick_winner, Some(2));
    assert_eq!(res.tricks_completed, 1);
    assert_eq!(res.state_transitioned, None);
    assert_eq!(r.turn, 2);
    assert!(r.table.is_empty());
    assert_eq!(r.history.len(), 3);
    assert_eq!(r.last_trick_winner, Some(2));
    assert_eq!(r.players[2].tricks_won, 1);
    assert!(r.memory.voids(2).contains(Suit::Hearts));

    r.play_card(2, cards(&["CLUBS-4"])[0]).unwrap();
    r.play_card(0, cards(&["CLUBS-2"])[0]).unwrap();
    let last = r.play_card(1, cards(&["CLUBS-3"])[0]).unwrap();
    assert_eq!(last.trick_winner, Some(2));
    assert_eq!(last.state_transitioned, Some(RoundState::Finished));
    assert_eq!(r.state, RoundState::Finished);
    assert_eq!(r.tricks_won(), vec![0, 0, 2]);
}

#[test]
fn rejected_plays_leave_round_untouched() {
    let mut r = round_from_hands(
        vec![
            cards(&["HEARTS-10", "CLUBS-2"]),
            cards(&["HEARTS-13", "CLUBS-3"]),
            cards(&["SPADES-2", "CLUBS-4"]),
        ],
        2,
        None,
    );
    r.play_card(0, cards(&["HEARTS-10"])[0]).unwrap();
    let before = (r.players.clone(), r.table.clone(), r.turn, r.memory.clone());

    assert_eq!(
        kind(r.play_card(0, cards(&["CLUBS-2"])[0]).unwrap_err()),
        Some(ValidationKind::OutOfTurn)
    );
    assert_eq!(
        kind(r.play_card(1, cards(&["CLUBS-3"])[0]).unwrap_err()),
        Some(ValidationKind::MustFollowSuit)
    );
    assert_eq!(
        kind(r.play_card(1, cards(&["SPADES-2"])[0]).unwrap_err()),
        Some(ValidationKind::CardNotInHand)
    );
    assert_eq!(before, (r.players.clone(), r.table.clone(), r.turn, r.memory.clone()));

    r.state = RoundState::Bidding;
    assert_eq!(
        kind(r.play_card(1, cards(&["HEARTS-13"])[0]).unwrap_err()),
        Some(ValidationKind::PhaseMismatch)
    );
}

#[test]
fn play_by_reference_resolves_id_less_specials() {
    let mut r = round_from_hands(
        vec![
            cards(&["NULL-2", "WILD-1"]),
            cards(&["CLUBS-9", "HEARTS-1"]),
            cards(&["SPADES-4", "SPADES-6"]),
        ],
        2,
        None,
    );
    let wild = CardRef {
        kind: crate::domain::CardKind::Wild,
        suit: None,
        value: None,
        id: None,
        display: None,
    };
    r.play_card_ref(0, &wild).unwrap();
    assert_eq!(r.table, vec![(0, Card::Wild(1))]);

    let missing = CardRef::from(cards(&["HEARTS-2"])[0]);
    assert_eq!(
        kind(r.play_card_ref(1, &missing).unwrap_err()),
        Some(ValidationKind::CardNotInHand)
    );
}
