use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::evaluator::{HandCategory, HandStrength};

/// Final-hand result in Mississippi Stud terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    JacksOrBetter,
    SixesThroughTens,
    Loss,
}

/// What the player gets back for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payout {
    /// Wins `multiplier` times every wager on the layout.
    Win(u32),
    /// Stakes returned.
    Push,
    /// Stakes forfeited.
    Lose,
}

/// Multiplier per winning outcome. The push and loss rows pay nothing.
pub const PAYTABLE: [(Outcome, u32); 11] = [
    (Outcome::RoyalFlush, 500),
    (Outcome::StraightFlush, 100),
    (Outcome::FourOfAKind, 40),
    (Outcome::FullHouse, 10),
    (Outcome::Flush, 6),
    (Outcome::Straight, 4),
    (Outcome::ThreeOfAKind, 3),
    (Outcome::TwoPair, 2),
    (Outcome::JacksOrBetter, 1),
    (Outcome::SixesThroughTens, 0),
    (Outcome::Loss, 0),
];

const LOWEST_PAYING_PAIR: u8 = 6;
const LOWEST_WINNING_PAIR: u8 = 11;

impl Outcome {
    /// Maps a poker hand onto the game's vocabulary.
    pub fn classify(strength: &HandStrength) -> Outcome {
        match strength.category {
            HandCategory::RoyalFlush => Outcome::RoyalFlush,
            HandCategory::StraightFlush => Outcome::StraightFlush,
            HandCategory::FourOfAKind => Outcome::FourOfAKind,
            HandCategory::FullHouse => Outcome::FullHouse,
            HandCategory::Flush => Outcome::Flush,
            HandCategory::Straight => Outcome::Straight,
            HandCategory::ThreeOfAKind => Outcome::ThreeOfAKind,
            HandCategory::TwoPair => Outcome::TwoPair,
            HandCategory::OnePair => match strength.ranks[0] {
                pair if pair >= LOWEST_WINNING_PAIR => Outcome::JacksOrBetter,
                pair if pair >= LOWEST_PAYING_PAIR => Outcome::SixesThroughTens,
                _ => Outcome::Loss,
            },
            HandCategory::HighCard | HandCategory::Invalid => Outcome::Loss,
        }
    }

    pub fn multiplier(self) -> u32 {
        PAYTABLE
            .iter()
            .find(|(outcome, _)| *outcome == self)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(0)
    }

    pub fn payout(self) -> Payout {
        match self {
            Outcome::SixesThroughTens => Payout::Push,
            Outcome::Loss => Payout::Lose,
            other => Payout::Win(other.multiplier()),
        }
    }

    /// Net profit for a round that reached showdown with `total_bet` wagered.
    pub fn profit(self, total_bet: f64) -> f64 {
        match self.payout() {
            Payout::Win(multiplier) => multiplier as f64 * total_bet,
            Payout::Push => 0.0,
            Payout::Lose => -total_bet,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::RoyalFlush => "Royal Flush",
            Outcome::StraightFlush => "Straight Flush",
            Outcome::FourOfAKind => "Four of a Kind",
            Outcome::FullHouse => "Full House",
            Outcome::Flush => "Flush",
            Outcome::Straight => "Straight",
            Outcome::ThreeOfAKind => "Three of a Kind",
            Outcome::TwoPair => "Two Pair",
            Outcome::JacksOrBetter => "Jacks or Better",
            Outcome::SixesThroughTens => "6s through 10s",
            Outcome::Loss => "Loss",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_of(rank: u8) -> HandStrength {
        HandStrength {
            category: HandCategory::OnePair,
            ranks: [rank, 14, 9, 3, 0],
        }
    }

    #[test]
    fn pair_threshold_splits_into_three_tiers() {
        assert_eq!(Outcome::classify(&pair_of(11)), Outcome::JacksOrBetter);
        assert_eq!(Outcome::classify(&pair_of(14)), Outcome::JacksOrBetter);
        assert_eq!(Outcome::classify(&pair_of(10)), Outcome::SixesThroughTens);
        assert_eq!(Outcome::classify(&pair_of(6)), Outcome::SixesThroughTens);
        assert_eq!(Outcome::classify(&pair_of(5)), Outcome::Loss);
    }

    #[test]
    fn profit_follows_the_table() {
        assert_eq!(Outcome::RoyalFlush.profit(10.0), 5000.0);
        assert_eq!(Outcome::JacksOrBetter.profit(10.0), 10.0);
        assert_eq!(Outcome::SixesThroughTens.profit(10.0), 0.0);
        assert_eq!(Outcome::Loss.profit(10.0), -10.0);
    }
}
