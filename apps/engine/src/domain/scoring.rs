use crate::domain::rules::round_points;
use crate::domain::state::{Round, RoundState};
use crate::errors::domain::DomainError;

impl Round {
    /// Apply this round's points to every player's cumulative score.
    ///
    /// Safe to call repeatedly: after the first call it returns the recorded
    /// points without touching scores again.
    pub fn calculate_scores(&mut self) -> Result<Vec<i32>, DomainError> {
        self.require_state(RoundState::Finished, "calculate_scores")?;

        if !self.scored {
            for (seat, player) in self.players.iter_mut().enumerate() {
                let points = round_points(player.bid.unwrap_or(0), player.tricks_won);
                player.score += points;
                self.points_earned[seat] = Some(points);
            }
            self.scored = true;
            tracing::debug!(points = ?self.points_earned, "round scored");
        }
        Ok(self.points_earned.iter().map(|p| p.unwrap_or(0)).collect())
    }
}
