//! Monte Carlo player: heuristic bidding, sampled card choice.
//!
//! Each legal card is scored over a batch of simulations. A simulation
//! samples the hidden hands, forces the candidate, plays the rest of the
//! round at random and scores the bot's tricks against its bid. Simulations
//! are independent and seeded by (decision, candidate, run), so the pool
//! size never changes a decision.

use std::collections::HashMap;

use parking_lot::Mutex;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use super::config::AiConfig;
use super::determinizer::{Determinizer, DeterminizerCounts, DeterminizerStats};
use super::heuristic::{closest_legal_bid, heuristic_bid, preferred_trump, single_card_bid};
use super::playout::playout;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{derive_simulation_seed, Card, Suit};

/// Points for landing exactly on the bid in one simulation.
const EXACT_HIT: i32 = 10;
/// Points lost per trick of distance from the bid.
const MISS_PER_TRICK: i32 = 5;

/// Aggregated simulation results for one legal card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    pub card: Card,
    pub total: i64,
    pub samples: u32,
    pub discarded: u32,
}

pub struct MonteCarloPlayer {
    rng: Mutex<StdRng>,
    simulations: u32,
    retries: u32,
    pool: Option<rayon::ThreadPool>,
    stats: DeterminizerStats,
}

impl MonteCarloPlayer {
    pub const NAME: &'static str = "MonteCarlo";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(config: &AiConfig) -> Self {
        let rng = match config.seed() {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        let workers = config.workers();
        let pool = if workers > 0 {
            match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!(workers, error = %e, "falling back to the global rayon pool");
                    None
                }
            }
        } else {
            None
        };

        Self {
            rng: Mutex::new(rng),
            simulations: config.simulations(),
            retries: config.determinization_retries(),
            pool,
            stats: DeterminizerStats::default(),
        }
    }

    /// Determinization counters accumulated over this player's decisions.
    pub fn stats(&self) -> DeterminizerCounts {
        self.stats.snapshot()
    }

    /// Tricks this seat expects to take.
    pub fn estimate_bid(&self, view: &PlayerView) -> u8 {
        let estimate = single_card_bid(view).unwrap_or_else(|| {
            heuristic_bid(view.hand(), view.round.trump, view.round.seat_count())
        });
        debug!(seat = view.seat, estimate, "bid estimate");
        estimate
    }

    /// Score every legal card by simulation.
    pub fn evaluate_candidates(&self, view: &PlayerView) -> Vec<CandidateScore> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Vec::new();
        }

        let decision_seed: u64 = self.rng.lock().random();
        let determinizer = Determinizer::new(view, self.retries, &self.stats);
        let seat = view.seat;
        let bid = view.my_bid();

        let work: Vec<(usize, u32)> = (0..legal.len())
            .flat_map(|c| (0..self.simulations).map(move |s| (c, s)))
            .collect();

        let simulate = |(candidate, sim): (usize, u32)| -> (usize, Option<i32>) {
            let mut rng =
                ChaCha8Rng::seed_from_u64(derive_simulation_seed(decision_seed, candidate, sim));
            let mut sample = determinizer.sample(&mut rng);
            if sample.round.play_card(seat, legal[candidate]).is_err() {
                return (candidate, None);
            }
            let outcome = playout(&mut sample.round, &mut rng)
                .ok()
                .map(|tricks| simulation_score(tricks[seat as usize], bid));
            (candidate, outcome)
        };

        let results: Vec<(usize, Option<i32>)> = match &self.pool {
            Some(pool) => pool.install(|| work.into_par_iter().map(simulate).collect()),
            None => work.into_par_iter().map(simulate).collect(),
        };

        let mut scores: Vec<CandidateScore> = legal
            .iter()
            .map(|&card| CandidateScore {
                card,
                total: 0,
                samples: 0,
                discarded: 0,
            })
            .collect();
        for (candidate, outcome) in results {
            let entry = &mut scores[candidate];
            match outcome {
                Some(points) => {
                    entry.total += i64::from(points);
                    entry.samples += 1;
                }
                None => entry.discarded += 1,
            }
        }

        let discarded: u32 = scores.iter().map(|s| s.discarded).sum();
        if discarded > 0 {
            debug!(seat, discarded, "simulations discarded");
        }
        scores
    }

    /// Pick the card with the best simulated total.
    pub fn choose_card(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = view.legal_plays();
        match legal.as_slice() {
            [] => return Err(AiError::InvalidMove("No legal plays available".into())),
            [only] => return Ok(*only),
            _ => {}
        }

        let scores = self.evaluate_candidates(view);
        let mut best: Option<&CandidateScore> = None;
        for score in scores.iter().filter(|s| s.samples > 0) {
            let better = match best {
                Some(b) => score.total > b.total,
                None => true,
            };
            if better {
                best = Some(score);
            }
        }

        match best {
            Some(choice) => {
                debug!(
                    seat = view.seat,
                    card = %choice.card,
                    total = choice.total,
                    candidates = scores.len(),
                    "card chosen"
                );
                Ok(choice.card)
            }
            None => {
                warn!(seat = view.seat, "every simulation failed, playing first legal card");
                Ok(legal[0])
            }
        }
    }
}

fn simulation_score(tricks: u8, bid: u8) -> i32 {
    if tricks == bid {
        EXACT_HIT
    } else {
        -MISS_PER_TRICK * i32::from(tricks.abs_diff(bid))
    }
}

impl AiPlayer for MonteCarloPlayer {
    fn choose_bid(&self, view: &PlayerView) -> Result<u8, AiError> {
        let legal = view.legal_bids();
        let estimate = self.estimate_bid(view);
        closest_legal_bid(estimate, &legal)
            .ok_or_else(|| AiError::InvalidMove("No legal bids available".into()))
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        self.choose_card(view)
    }

    fn choose_trump(&self, view: &PlayerView) -> Result<Suit, AiError> {
        if view.legal_trumps().is_empty() {
            return Err(AiError::InvalidMove("Not asked to name trump".into()));
        }
        Ok(preferred_trump(view.hand()))
    }

    fn custom_metrics(&self) -> HashMap<String, JsonValue> {
        let counts = self.stats();
        HashMap::from([
            ("determinizations".to_string(), counts.samples.into()),
            ("failed_attempts".to_string(), counts.failed_attempts.into()),
            ("fallbacks".to_string(), counts.fallbacks.into()),
        ])
    }
}
