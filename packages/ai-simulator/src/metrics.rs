//! Metrics collection and output for AI simulation results.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::simulator::{GameResult, RoundRecord};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub ai_types: Vec<String>,
    pub total_games: u32,
    pub selected_rounds: Vec<u8>,
    pub open_first_round: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i32>,
    pub winner: u8,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub hand_size: u8,
    pub dealer: u8,
    pub bids: Vec<u8>,
    pub trump_selector: Option<u8>,
    pub trump: Option<String>,
    pub trump_card: Option<String>,
    pub tricks_won: Vec<u8>,
    pub points: Vec<i32>,
    pub bid_accuracy: Vec<BidAccuracy>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BidAccuracy {
    pub seat: u8,
    pub bid: u8,
    pub tricks: u8,
    pub exact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underbid: Option<u8>, // tricks > bid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overbid: Option<u8>, // tricks < bid
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub total_score: i32,
    pub rounds_won: u32,
    pub bid_accuracy: BidAccuracyStats,
    pub avg_tricks_per_round: f64,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_metrics: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BidAccuracyStats {
    pub exact: u32,
    pub underbid: u32,
    pub overbid: u32,
    pub exact_pct: f64,
}

/// Run-wide settings echoed into every game's metrics.
pub struct RunInfo<'a> {
    pub ai_types: &'a [String],
    pub total_games: u32,
    pub selected_rounds: &'a [u8],
    pub open_first_round: bool,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    run: &RunInfo<'_>,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result
        .rounds
        .iter()
        .enumerate()
        .map(|(i, record)| build_round_metrics(i as u8 + 1, record))
        .collect();

    let player_metrics: Vec<PlayerMetrics> = run
        .ai_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| {
            let custom = result.custom_metrics.get(seat).cloned().unwrap_or_default();
            build_player_metrics(seat as u8, ai_type, result, &rounds, custom)
        })
        .collect();

    GameMetrics {
        game_id,
        seed: result.game_seed,
        timestamp,
        config: RunConfig {
            ai_types: run.ai_types.to_vec(),
            total_games: run.total_games,
            selected_rounds: run.selected_rounds.to_vec(),
            open_first_round: run.open_first_round,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winner: winner(&result.final_scores),
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

/// Highest score; the lowest seat wins ties.
pub fn winner(scores: &[i32]) -> u8 {
    scores
        .iter()
        .enumerate()
        .max_by_key(|&(seat, &score)| (score, std::cmp::Reverse(seat)))
        .map(|(seat, _)| seat as u8)
        .unwrap_or(0)
}

fn build_round_metrics(round_no: u8, record: &RoundRecord) -> RoundMetrics {
    let summary = &record.summary;
    let bid_accuracy = summary
        .players
        .iter()
        .enumerate()
        .map(|(seat, line)| {
            let (bid, tricks) = (line.bid, line.tricks_won);
            BidAccuracy {
                seat: seat as u8,
                bid,
                tricks,
                exact: tricks == bid,
                underbid: (tricks > bid).then(|| tricks - bid),
                overbid: (tricks < bid).then(|| bid - tricks),
            }
        })
        .collect();

    RoundMetrics {
        round_no,
        hand_size: summary.round_num,
        dealer: summary.dealer,
        bids: summary.players.iter().map(|p| p.bid).collect(),
        trump_selector: record.trump_selector,
        trump: record.trump.map(|t| t.to_string()),
        trump_card: record.trump_card.map(|c| c.to_string()),
        tricks_won: summary.players.iter().map(|p| p.tricks_won).collect(),
        points: summary.players.iter().map(|p| p.points_earned).collect(),
        bid_accuracy,
        duration_ms: record.duration_ms,
    }
}

fn build_player_metrics(
    seat: u8,
    ai_type: &str,
    result: &GameResult,
    rounds: &[RoundMetrics],
    custom_metrics: HashMap<String, Value>,
) -> PlayerMetrics {
    let idx = seat as usize;
    let total_score = result.final_scores.get(idx).copied().unwrap_or(0);

    // A round is won by every seat sharing its best points.
    let rounds_won = rounds
        .iter()
        .filter(|r| {
            let best = r.points.iter().max().copied().unwrap_or(0);
            r.points.get(idx) == Some(&best)
        })
        .count() as u32;

    let (mut exact, mut underbid, mut overbid) = (0, 0, 0);
    for round in rounds {
        if let Some(ba) = round.bid_accuracy.iter().find(|ba| ba.seat == seat) {
            if ba.exact {
                exact += 1;
            } else if ba.underbid.is_some() {
                underbid += 1;
            } else {
                overbid += 1;
            }
        }
    }
    let total_bids = exact + underbid + overbid;
    let exact_pct = if total_bids > 0 {
        (exact as f64 / total_bids as f64) * 100.0
    } else {
        0.0
    };

    let total_tricks: u32 = rounds
        .iter()
        .filter_map(|r| r.tricks_won.get(idx))
        .map(|&t| t as u32)
        .sum();
    let avg_tricks_per_round = if rounds.is_empty() {
        0.0
    } else {
        total_tricks as f64 / rounds.len() as f64
    };

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        total_score,
        rounds_won,
        bid_accuracy: BidAccuracyStats {
            exact,
            underbid,
            overbid,
            exact_pct,
        },
        avg_tricks_per_round,
        custom_metrics,
    }
}

/// CSV summary header for `seats` players.
pub fn csv_header(seats: usize) -> Vec<String> {
    let mut header = vec!["game_id".to_string(), "seed".to_string(), "winner".to_string()];
    header.extend((0..seats).map(|s| format!("seat{s}_score")));
    header.extend((0..seats).map(|s| format!("seat{s}_ai")));
    header
}

/// CSV summary row matching [`csv_header`].
pub fn csv_record(metrics: &GameMetrics) -> Vec<String> {
    let mut row = vec![
        metrics.game_id.to_string(),
        metrics.seed.to_string(),
        metrics.result.winner.to_string(),
    ];
    row.extend(metrics.result.final_scores.iter().map(i32::to_string));
    row.extend(metrics.config.ai_types.iter().cloned());
    row
}
