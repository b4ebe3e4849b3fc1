//! Public round state rendered for one viewer.

use serde::Serialize;

use crate::domain::player_view::PlayerView;
use crate::domain::state::{RoundState, Seat};
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    pub card: Card,
    pub played_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: i32,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub hand_size: usize,
    /// Present for the viewer's own hand and for face-up opponent cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<Card>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub viewer: String,
    pub state: RoundState,
    pub cards_per_player: u8,
    pub dealer: String,
    pub turn: String,
    pub trump: Option<Suit>,
    pub trump_card: Option<Card>,
    pub table: Vec<TableEntry>,
    pub players: Vec<PlayerSnapshot>,
    pub last_trick: Vec<TableEntry>,
    pub last_trick_winner: Option<String>,
}

impl RoundSnapshot {
    pub fn from_view(view: &PlayerView) -> Self {
        let r = &view.round;
        let name = |seat: Seat| r.players[seat as usize].name.clone();
        let entries = |plays: &[(Seat, Card)]| {
            plays
                .iter()
                .map(|&(seat, card)| TableEntry {
                    card,
                    played_by: name(seat),
                })
                .collect::<Vec<_>>()
        };

        let players = r
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let seat = i as Seat;
                let hand = if seat == view.seat {
                    let held_out = p.hand.is_empty() && view.hand_sizes[i] > 0;
                    (!held_out).then(|| p.hand.clone())
                } else {
                    let shown: Vec<Card> = view
                        .face_up
                        .iter()
                        .filter(|(s, _)| *s == seat)
                        .map(|(_, c)| *c)
                        .collect();
                    (!shown.is_empty()).then_some(shown)
                };
                PlayerSnapshot {
                    name: p.name.clone(),
                    score: p.score,
                    bid: p.bid,
                    tricks_won: p.tricks_won,
                    hand_size: view.hand_sizes[i],
                    hand,
                }
            })
            .collect();

        Self {
            viewer: name(view.seat),
            state: r.state,
            cards_per_player: r.cards_per_player,
            dealer: name(r.dealer),
            turn: name(r.turn),
            trump: r.trump,
            trump_card: r.trump_card,
            table: entries(&r.table),
            players,
            last_trick: entries(&r.last_trick),
            last_trick_winner: r.last_trick_winner.map(name),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
