//! Draw-quality features of a partial hand, as consumed by the rule tables.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::evaluator::{JokerMode, evaluate};
use crate::payout::Outcome;

const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];
const MAX_STRAIGHT_GAPS: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandFeatures {
    /// A rank held exactly twice. Trips do not count; see `is_made_hand`.
    pub pair_rank: Option<Rank>,
    /// The known cards already beat a losing hand at showdown.
    pub is_made_hand: bool,
    pub is_flush_draw: bool,
    pub is_straight_draw: bool,
    /// Missing ranks inside the run, when the straight draw is live.
    pub straight_gaps: Option<u8>,
    pub num_high_cards: u8,
    pub num_mid_cards: u8,
    pub num_low_cards: u8,
    pub total_points: u8,
    pub min_straight_rank: u8,
    pub contains_8_or_higher: bool,
}

/// Heuristic card value: J-A are worth 2, 6-10 are worth 1.
pub fn card_points(card: &Card) -> u8 {
    match card.rank().map(Rank::value) {
        Some(11..=14) => 2,
        Some(6..=10) => 1,
        _ => 0,
    }
}

/// Total interior gaps of the distinct ranks, or `None` when the draw is dead.
///
/// Fewer than three ranked cards never make a draw.
pub fn straight_gaps(rank_values: &[u8]) -> Option<u8> {
    if rank_values.len() < 3 {
        return None;
    }
    let unique: Vec<u8> = rank_values.iter().copied().sorted_unstable().dedup().collect();
    if unique == WHEEL {
        return Some(0);
    }
    let total: u8 = unique
        .iter()
        .tuple_windows()
        .map(|(low, high)| high - low)
        .filter(|diff| *diff > 1)
        .map(|diff| diff - 1)
        .sum();
    (total <= MAX_STRAIGHT_GAPS).then_some(total)
}

pub fn evaluate_partial_hand(cards: &[Card]) -> HandFeatures {
    let ranks: Vec<Rank> = cards.iter().filter_map(Card::rank).collect();
    let rank_values: Vec<u8> = ranks.iter().map(|rank| rank.value()).collect();

    let mut rank_counts: BTreeMap<Rank, usize> = BTreeMap::new();
    for rank in &ranks {
        *rank_counts.entry(*rank).or_default() += 1;
    }
    let pair_rank = rank_counts
        .iter()
        .rev()
        .find(|(_, count)| **count == 2)
        .map(|(rank, _)| *rank);

    let is_made_hand = match evaluate(cards, JokerMode::Dead) {
        Ok(strength) => Outcome::classify(&strength) != Outcome::Loss,
        Err(err) => {
            tracing::warn!(%err, cards = cards.len(), "partial hand could not be evaluated");
            false
        }
    };

    let suits = cards.iter().filter_map(Card::suit).counts();
    let is_flush_draw = suits.values().any(|count| *count >= cards.len());

    let gaps = straight_gaps(&rank_values);

    HandFeatures {
        pair_rank,
        is_made_hand,
        is_flush_draw,
        is_straight_draw: gaps.is_some(),
        straight_gaps: gaps,
        num_high_cards: rank_values.iter().filter(|v| **v >= 11).count() as u8,
        num_mid_cards: rank_values.iter().filter(|v| (6..=10).contains(*v)).count() as u8,
        num_low_cards: rank_values.iter().filter(|v| **v <= 5).count() as u8,
        total_points: cards.iter().map(card_points).sum(),
        min_straight_rank: rank_values.iter().copied().min().unwrap_or(0),
        contains_8_or_higher: rank_values.iter().any(|v| *v >= 8),
    }
}
