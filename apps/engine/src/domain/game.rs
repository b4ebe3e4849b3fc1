//! A full game: a sequence of rounds with a rotating dealer.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::config::GameConfig;
use crate::domain::state::{next_seat, Player, Round, RoundState, Seat};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// One player's line in a round summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRoundSummary {
    pub name: String,
    pub bid: u8,
    pub tricks_won: u8,
    pub points_earned: i32,
    /// Cumulative score after this round.
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// Cards dealt per player in this round.
    pub round_num: u8,
    pub dealer: Seat,
    pub players: Vec<PlayerRoundSummary>,
}

#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    config: GameConfig,
    dealer: Seat,
    round_index: usize,
    round: Option<Round>,
    history: Vec<RoundSummary>,
}

impl Game {
    pub fn new<S: AsRef<str>>(names: &[S], config: GameConfig) -> Result<Self, DomainError> {
        config.validate_for(names.len())?;
        let players: Vec<Player> = names.iter().map(|n| Player::new(n.as_ref())).collect();
        for (i, p) in players.iter().enumerate() {
            if players[..i].iter().any(|q| q.name == p.name) {
                return Err(DomainError::validation_other(format!(
                    "Duplicate player name: {}",
                    p.name
                )));
            }
        }
        Ok(Self {
            players,
            config,
            dealer: 0,
            round_index: 0,
            round: None,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Cards dealt in the current round, `None` once every round is played.
    pub fn round_number(&self) -> Option<u8> {
        self.config.selected_rounds.get(self.round_index).copied()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    pub fn require_round_mut(&mut self) -> Result<&mut Round, DomainError> {
        self.round
            .as_mut()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, "No round in progress"))
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    pub fn seat_of(&self, name: &str) -> Result<Seat, DomainError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .map(|i| i as Seat)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, name.to_string()))
    }

    /// True once the last selected round has been played and scored.
    pub fn is_finished(&self) -> bool {
        let rounds = self.config.selected_rounds.len();
        match &self.round {
            Some(r) => r.is_scored() && self.round_index + 1 >= rounds,
            None => self.round_index >= rounds,
        }
    }

    /// Players by descending cumulative score; ties keep seat order.
    pub fn standings(&self) -> Vec<(&str, i32)> {
        let mut table: Vec<(&str, i32)> = self
            .players
            .iter()
            .map(|p| (p.name.as_str(), p.score))
            .collect();
        table.sort_by(|a, b| b.1.cmp(&a.1));
        table
    }

    /// Deal the next round.
    ///
    /// Returns `Ok(false)` when the game is over. The previous round must be
    /// finished and scored first; the dealer then moves one seat left.
    pub fn start_next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, DomainError> {
        if let Some(last) = &self.round {
            if last.state != RoundState::Finished || !last.is_scored() {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    format!(
                        "Round still in progress ({:?}, scored: {})",
                        last.state,
                        last.is_scored()
                    ),
                ));
            }
            self.round_index += 1;
            self.dealer = next_seat(self.dealer, self.players.len());
            self.round = None;
        }

        let Some(cards) = self.round_number() else {
            info!(standings = ?self.standings(), "game finished");
            return Ok(false);
        };

        let mut round = Round::new(self.players.clone(), cards, self.dealer)?;
        round.open_hand = self.config.first_round_open_cards && self.round_index == 0;
        round.setup(rng)?;
        info!(
            round = self.round_index + 1,
            of = self.config.selected_rounds.len(),
            cards,
            dealer = self.dealer,
            state = ?round.state,
            "round started"
        );
        self.round = Some(round);
        Ok(true)
    }

    /// Score the finished round, carry scores back to the game and record
    /// its summary. Idempotent like [`Round::calculate_scores`].
    pub fn score_round(&mut self) -> Result<Vec<i32>, DomainError> {
        let round = self
            .round
            .as_mut()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, "No round to score"))?;
        let already = round.is_scored();
        let points = round.calculate_scores()?;
        if already {
            return Ok(points);
        }

        for (player, played) in self.players.iter_mut().zip(&round.players) {
            player.score = played.score;
        }
        let summary = RoundSummary {
            round_num: round.cards_per_player,
            dealer: round.dealer,
            players: round
                .players
                .iter()
                .zip(&points)
                .map(|(p, &pts)| PlayerRoundSummary {
                    name: p.name.clone(),
                    bid: p.bid.unwrap_or(0),
                    tricks_won: p.tricks_won,
                    points_earned: pts,
                    score: p.score,
                })
                .collect(),
        };
        info!(round = summary.round_num, points = ?points, "round scored");
        self.history.push(summary);
        Ok(points)
    }

    /// Back to the first round with zero scores.
    pub fn reset(&mut self) {
        for p in self.players.iter_mut() {
            p.score = 0;
            p.reset_round();
        }
        self.dealer = 0;
        self.round_index = 0;
        self.round = None;
        self.history.clear();
        info!("game reset");
    }
}
