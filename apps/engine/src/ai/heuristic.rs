//! Card-strength bidding and trump selection.

use crate::domain::dealing::deck;
use crate::domain::player_view::PlayerView;
use crate::domain::state::{seat_offset, RoundState, Seat};
use crate::domain::{winning_index, Card, Suit};

/// Expected tricks contributed by one card.
pub fn card_strength(card: &Card, trump: Option<Suit>, seats: usize) -> f64 {
    let (suit, rank) = match card {
        Card::Wild(_) => return 1.0,
        Card::Null(_) => return 0.0,
        Card::Numbered { suit, rank } => (*suit, rank.value()),
    };

    match trump {
        Some(t) if t == suit => match rank {
            11.. => 0.95,
            8.. => 0.7,
            5.. => 0.4,
            _ => 0.1,
        },
        Some(_) => {
            // More seats means more chances of being trumped.
            let crowding = if seats <= 4 { 1.0 } else { 0.8 };
            match rank {
                13 => 0.7 * crowding,
                12 => 0.5 * crowding,
                11 => 0.2 * crowding,
                _ => 0.0,
            }
        }
        None => match rank {
            12.. => 0.85,
            10.. => 0.6,
            8.. => 0.3,
            _ => 0.0,
        },
    }
}

/// Summed strength, rounded and capped at the hand size.
pub fn heuristic_bid(hand: &[Card], trump: Option<Suit>, seats: usize) -> u8 {
    let total: f64 = hand.iter().map(|c| card_strength(c, trump, seats)).sum();
    // Halves round to even.
    let rounded = total.round_ties_even().max(0.0) as usize;
    rounded.min(hand.len()) as u8
}

/// Exhaustive bid for the open-hand single-card deal.
///
/// Every card the seat cannot see is tried as its own hidden card against
/// the face-up opponents. Bids 1 when the seat wins more than half of them.
/// `None` when the view is not that variant.
pub fn single_card_bid(view: &PlayerView) -> Option<u8> {
    let round = &view.round;
    let applies = round.open_hand
        && round.cards_per_player == 1
        && matches!(
            round.state,
            RoundState::Bidding | RoundState::AwaitingTrumpChoice
        )
        && view.hand().is_empty();
    if !applies {
        return None;
    }

    let seats = round.seat_count();
    let order: Vec<Seat> = (0..seats)
        .map(|i| seat_offset(round.first_to_act, i as i16, seats))
        .collect();
    let visible = view.visible_cards();

    let mut wins = 0usize;
    let mut total = 0usize;
    for &candidate in deck().iter().filter(|c| !visible.contains(c)) {
        let trick: Option<Vec<Card>> = order
            .iter()
            .map(|&seat| {
                if seat == view.seat {
                    Some(candidate)
                } else {
                    view.face_up
                        .iter()
                        .find(|(s, _)| *s == seat)
                        .map(|(_, c)| *c)
                }
            })
            .collect();
        let Some(trick) = trick else {
            continue;
        };
        total += 1;
        if order[winning_index(&trick, round.trump)] == view.seat {
            wins += 1;
        }
    }

    tracing::debug!(seat = view.seat, wins, total, "single-card bid enumeration");
    Some(u8::from(total > 0 && wins * 2 > total))
}

/// Legal bid nearest to `estimate`; ties go to the higher bid.
pub fn closest_legal_bid(estimate: u8, legal: &[u8]) -> Option<u8> {
    legal
        .iter()
        .copied()
        .min_by_key(|&b| (b.abs_diff(estimate), std::cmp::Reverse(b)))
}

/// Suit with the most numbered cards in hand, ties by suit order.
/// Hearts when the hand has no numbered cards.
pub fn preferred_trump(hand: &[Card]) -> Suit {
    let mut best = Suit::Hearts;
    let mut best_count = 0usize;
    for suit in Suit::ALL {
        let count = hand.iter().filter(|c| c.is_numbered_of(suit)).count();
        if count > best_count {
            best = suit;
            best_count = count;
        }
    }
    best
}
