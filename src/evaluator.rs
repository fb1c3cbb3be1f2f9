use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::error::{Result, SimError};

/// Wildcard search is 52^k; beyond two jokers it is refused outright.
pub const MAX_WILD_JOKERS: usize = 2;

/// A concrete (non-joker) card as seen by the 5-card classifier.
pub type Face = (Rank, Suit);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum HandCategory {
    /// Five cards of one rank. Only reachable through joker substitution.
    Invalid = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::Invalid => "Invalid Hand",
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How jokers are treated when a hand is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JokerMode {
    /// Each joker becomes whichever card makes the best hand.
    #[default]
    Wild,
    /// Jokers are dropped and the hand is padded with neutral filler.
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: HandCategory,
    /// Ranks that decide ties within the category, most significant first.
    /// For one pair, `ranks[0]` is the pair.
    pub ranks: [u8; 5],
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

fn fill(mut values: Vec<u8>) -> [u8; 5] {
    values.resize(5, 0);
    [values[0], values[1], values[2], values[3], values[4]]
}

fn rank_mask(ranks: impl IntoIterator<Item = u8>) -> u32 {
    let mut mask = 0u32;
    for rank_value in ranks {
        mask |= 1 << rank_value as u32;
        if rank_value == Rank::Ace.value() {
            mask |= 1 << 1; // Ace-low straight support
        }
    }
    mask
}

fn straight_high(mask: u32) -> Option<u8> {
    (5u8..=14).rev().find(|&high| {
        let needed = (0..5u8).fold(0u32, |acc, i| acc | 1 << (high - i) as u32);
        mask & needed == needed
    })
}

/// Classifies exactly five concrete cards.
pub fn evaluate_five(cards: &[Face; 5]) -> HandStrength {
    let mut counts = [0u8; 15];
    let mut suits = [0u8; 4];
    let mut sorted_cards: Vec<u8> = cards.iter().map(|(rank, _)| rank.value()).collect();
    sorted_cards.sort_unstable_by(|a, b| b.cmp(a));

    for (rank, suit) in cards {
        counts[rank.value() as usize] += 1;
        suits[suit.index()] += 1;
    }

    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&rank| counts[rank as usize] > 0)
        .map(|rank| (counts[rank as usize], rank))
        .collect();
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    if groups.len() == 1 {
        return HandStrength {
            category: HandCategory::Invalid,
            ranks: fill(vec![groups[0].1]),
        };
    }

    let is_flush = suits.contains(&5);
    let straight = if groups.len() == 5 {
        straight_high(rank_mask(groups.iter().map(|(_, rank)| *rank)))
    } else {
        None
    };
    let run = |high: u8| fill(vec![high, high - 1, high - 2, high - 3, high - 4]);

    if is_flush && let Some(high) = straight {
        let category = if high == Rank::Ace.value() {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return HandStrength {
            category,
            ranks: run(high),
        };
    }

    let kickers = |skip: &[u8]| -> Vec<u8> {
        sorted_cards
            .iter()
            .copied()
            .filter(|rank| !skip.contains(rank))
            .collect()
    };

    let (top_count, top_rank) = groups[0];
    let second_count = groups[1].0;
    let second_rank = groups[1].1;

    if top_count == 4 {
        return HandStrength {
            category: HandCategory::FourOfAKind,
            ranks: fill(vec![top_rank, second_rank]),
        };
    }

    if top_count == 3 && second_count == 2 {
        return HandStrength {
            category: HandCategory::FullHouse,
            ranks: fill(vec![top_rank, second_rank]),
        };
    }

    if is_flush {
        return HandStrength {
            category: HandCategory::Flush,
            ranks: fill(sorted_cards.clone()),
        };
    }

    if let Some(high) = straight {
        return HandStrength {
            category: HandCategory::Straight,
            ranks: run(high),
        };
    }

    match (top_count, second_count) {
        (3, _) => {
            let mut values = vec![top_rank];
            values.extend(kickers(&[top_rank]));
            HandStrength {
                category: HandCategory::ThreeOfAKind,
                ranks: fill(values),
            }
        }
        (2, 2) => {
            let mut values = vec![top_rank, second_rank];
            values.extend(kickers(&[top_rank, second_rank]));
            HandStrength {
                category: HandCategory::TwoPair,
                ranks: fill(values),
            }
        }
        (2, _) => {
            let mut values = vec![top_rank];
            values.extend(kickers(&[top_rank]));
            HandStrength {
                category: HandCategory::OnePair,
                ranks: fill(values),
            }
        }
        _ => HandStrength {
            category: HandCategory::HighCard,
            ranks: fill(sorted_cards.clone()),
        },
    }
}

/// Evaluates a hand that may contain jokers.
///
/// Wild mode requires exactly five cards. Dead mode accepts up to five
/// cards once jokers are removed and pads the rest with [`neutral_filler`].
pub fn evaluate(cards: &[Card], mode: JokerMode) -> Result<HandStrength> {
    let faces: Vec<Face> = cards
        .iter()
        .filter_map(|card| Some((card.rank()?, card.suit()?)))
        .collect();
    let jokers = cards.iter().filter(|card| card.is_joker()).count();

    match mode {
        JokerMode::Wild => {
            if cards.len() != 5 {
                return Err(SimError::HandSize(cards.len()));
            }
            if jokers > MAX_WILD_JOKERS {
                return Err(SimError::TooManyJokers {
                    count: jokers,
                    max: MAX_WILD_JOKERS,
                });
            }
            Ok(best_substitution(&faces, jokers))
        }
        JokerMode::Dead => {
            if faces.len() > 5 {
                return Err(SimError::HandSize(faces.len()));
            }
            let mut padded = faces.clone();
            padded.extend(neutral_filler(&faces));
            Ok(evaluate_five(&to_array(&padded)))
        }
    }
}

fn to_array(faces: &[Face]) -> [Face; 5] {
    [faces[0], faces[1], faces[2], faces[3], faces[4]]
}

/// Tries every (rank, suit) for every joker and keeps the best hand.
fn best_substitution(fixed: &[Face], jokers: usize) -> HandStrength {
    if jokers == 0 {
        return evaluate_five(&to_array(fixed));
    }

    let all_faces: Vec<Face> = Rank::ALL
        .iter()
        .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| (rank, suit)))
        .collect();

    let mut hand = fixed.to_vec();
    let mut best: Option<HandStrength> = None;
    for replacement in (0..jokers)
        .map(|_| all_faces.iter().copied())
        .multi_cartesian_product()
    {
        hand.truncate(fixed.len());
        hand.extend(replacement);
        let strength = evaluate_five(&to_array(&hand));
        if best.is_none_or(|current| strength > current) {
            best = Some(strength);
        }
        if strength.category == HandCategory::RoyalFlush {
            break;
        }
    }
    best.unwrap_or_else(|| evaluate_five(&to_array(&hand)))
}

/// Filler cards that bring `real` up to five without adding a pair,
/// a straight or a flush.
///
/// Filler ranks are absent from `real` and chosen so the combined ranks never
/// form a run. When more than one filler is needed their suits all differ;
/// a single filler takes a suit other than the first real card's.
pub fn neutral_filler(real: &[Face]) -> Vec<Face> {
    let needed = 5usize.saturating_sub(real.len());
    if needed == 0 {
        return Vec::new();
    }

    let absent: Vec<u8> = Rank::ALL
        .iter()
        .map(|rank| rank.value())
        .filter(|value| real.iter().all(|(rank, _)| rank.value() != *value))
        .collect();
    let real_mask = rank_mask(real.iter().map(|(rank, _)| rank.value()));

    let ranks = absent
        .into_iter()
        .combinations(needed)
        .find(|candidate| straight_high(real_mask | rank_mask(candidate.iter().copied())).is_none())
        .unwrap_or_default();

    let first_suit = real.first().map(|(_, suit)| *suit);
    let base = Suit::ALL
        .iter()
        .position(|suit| Some(*suit) != first_suit)
        .unwrap_or(0);

    ranks
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| Some((Rank::from_value(value)?, Suit::ALL[(base + i) % 4])))
        .collect()
}
