use super::cards_types::{Card, Suit};

/// Suit the trick must follow.
///
/// Leading Nulls are skipped; the first numbered card sets the suit. If a
/// Wild comes before any numbered card the trick has no led suit.
pub fn led_suit<'a, I>(cards: I) -> Option<Suit>
where
    I: IntoIterator<Item = &'a Card>,
{
    for card in cards {
        match card {
            Card::Wild(_) => return None,
            Card::Null(_) => continue,
            Card::Numbered { suit, .. } => return Some(*suit),
        }
    }
    None
}

/// Does the hand contain a numbered card of `suit`?
pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_numbered_of(suit))
}

/// Does `challenger`, played after `best`, take the trick from it?
///
/// Only a strictly stronger card overturns the running best, so the earlier
/// card keeps every tie.
pub fn card_beats(challenger: Card, best: Card, led: Option<Suit>, trump: Option<Suit>) -> bool {
    match (challenger, best) {
        (_, Card::Wild(_)) => false,
        (Card::Wild(_), _) => true,
        (Card::Null(_), _) => false,
        (_, Card::Null(_)) => true,
        (
            Card::Numbered {
                suit: c_suit,
                rank: c_rank,
            },
            Card::Numbered {
                suit: b_suit,
                rank: b_rank,
            },
        ) => {
            let c_trump = Some(c_suit) == trump;
            let b_trump = Some(b_suit) == trump;
            match (c_trump, b_trump) {
                (true, false) => return true,
                (false, true) => return false,
                (true, true) => return c_rank > b_rank,
                (false, false) => {}
            }
            let c_led = Some(c_suit) == led;
            let b_led = Some(b_suit) == led;
            match (c_led, b_led) {
                (true, false) => true,
                (true, true) => c_rank > b_rank,
                _ => false,
            }
        }
    }
}
