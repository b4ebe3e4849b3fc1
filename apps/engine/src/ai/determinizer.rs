//! Sampling hidden hands consistent with what one seat has observed.
//!
//! The unknown pool is the full deck minus every card the seat can see.
//! Opponents are served most-constrained-first from a shuffled pool, each
//! taking the first card its known voids admit. A dead end discards the
//! attempt. After the retry budget the deal ignores voids, which is logged
//! and counted but never fails the caller.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::domain::dealing::deck;
use crate::domain::player_view::PlayerView;
use crate::domain::round_memory::SuitSet;
use crate::domain::state::{Round, Seat};
use crate::domain::Card;

/// One sampled world.
#[derive(Debug, Clone)]
pub struct Determinization {
    /// Independent round with every hidden hand filled in.
    pub round: Round,
    /// True when void constraints had to be ignored.
    pub degraded: bool,
}

/// Running counters, shared across threads.
#[derive(Debug, Default)]
pub struct DeterminizerStats {
    samples: AtomicU64,
    failed_attempts: AtomicU64,
    fallbacks: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DeterminizerCounts {
    pub samples: u64,
    pub failed_attempts: u64,
    pub fallbacks: u64,
}

impl DeterminizerStats {
    pub fn snapshot(&self) -> DeterminizerCounts {
        DeterminizerCounts {
            samples: self.samples.load(Ordering::Relaxed),
            failed_attempts: self.failed_attempts.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }
}

pub struct Determinizer<'a> {
    view: &'a PlayerView,
    unknown: Vec<Card>,
    /// Opponents, most known voids first.
    order: Vec<Seat>,
    retries: u32,
    stats: &'a DeterminizerStats,
}

impl<'a> Determinizer<'a> {
    pub fn new(view: &'a PlayerView, retries: u32, stats: &'a DeterminizerStats) -> Self {
        let visible = view.visible_cards();
        let unknown: Vec<Card> = deck()
            .iter()
            .copied()
            .filter(|c| !visible.contains(c))
            .collect();

        // An own hand held face-out is as hidden as any opponent's.
        let own_hidden = view.hand().is_empty() && view.hand_sizes[view.seat as usize] > 0;
        let mut order: Vec<Seat> = (0..view.round.seat_count() as Seat)
            .filter(|&s| s != view.seat || own_hidden)
            .collect();
        // Stable sort keeps seat order among equally constrained opponents.
        order.sort_by_key(|&s| std::cmp::Reverse(view.round.memory.voids(s).len()));

        Self {
            view,
            unknown,
            order,
            retries,
            stats,
        }
    }

    /// Cards the observing seat cannot locate.
    pub fn unknown_pool(&self) -> &[Card] {
        &self.unknown
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Determinization {
        self.stats.samples.fetch_add(1, Ordering::Relaxed);

        for _ in 0..self.retries {
            if let Some(hands) = self.constrained_deal(rng) {
                return self.build(hands, false);
            }
            self.stats.failed_attempts.fetch_add(1, Ordering::Relaxed);
        }

        self.stats.fallbacks.fetch_add(1, Ordering::Relaxed);
        warn!(
            seat = self.view.seat,
            retries = self.retries,
            "determinization fell back to an unconstrained deal"
        );
        let hands = self.unconstrained_deal(rng);
        self.build(hands, true)
    }

    fn constrained_deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<(Seat, Vec<Card>)>> {
        let mut pool = self.unknown.clone();
        pool.shuffle(rng);

        let mut hands = Vec::with_capacity(self.order.len());
        for &seat in &self.order {
            let voids: SuitSet = self.view.round.memory.voids(seat);
            let needed = self.view.hand_sizes[seat as usize];
            let mut hand = Vec::with_capacity(needed);
            while hand.len() < needed {
                let pos = pool.iter().position(|c| voids.admits(c))?;
                hand.push(pool.remove(pos));
            }
            hands.push((seat, hand));
        }
        Some(hands)
    }

    fn unconstrained_deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<(Seat, Vec<Card>)> {
        let mut pool = self.unknown.clone();
        pool.shuffle(rng);

        let mut seats: Vec<Seat> = self.order.clone();
        seats.sort_unstable();
        seats
            .into_iter()
            .map(|seat| {
                let take = self.view.hand_sizes[seat as usize].min(pool.len());
                (seat, pool.drain(..take).collect())
            })
            .collect()
    }

    fn build(&self, hands: Vec<(Seat, Vec<Card>)>, degraded: bool) -> Determinization {
        let mut round = self.view.round.clone();
        for (seat, hand) in hands {
            round.players[seat as usize].hand = hand;
        }
        Determinization { round, degraded }
    }
}
