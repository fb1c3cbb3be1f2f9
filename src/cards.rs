use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value with the ace high (2..=14).
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|rank| rank.value() == value)
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_label())
    }
}

impl FromStr for Rank {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(SimError::ParseCard(format!("invalid rank '{s}'"))),
        }
    }
}

impl FromStr for Suit {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Clubs),
            "d" | "♦" => Ok(Suit::Diamonds),
            "h" | "♥" => Ok(Suit::Hearts),
            "s" | "♠" => Ok(Suit::Spades),
            _ => Err(SimError::ParseCard(format!("invalid suit '{s}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JokerColor {
    Red,
    Black,
}

/// A playing card. Jokers carry a colour instead of a rank and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker(JokerColor),
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Joker(_) => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Rank-only ordering, ignoring suit. Jokers sort above every rank.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        let key = |card: &Card| card.rank().map(Rank::value).unwrap_or(u8::MAX);
        key(self).cmp(&key(other))
    }

    pub fn notation(&self) -> String {
        match self {
            Card::Standard { rank, suit } => format!("{}{}", rank.short_label(), suit.symbol()),
            Card::Joker(JokerColor::Red) => "JKr".to_string(),
            Card::Joker(JokerColor::Black) => "JKb".to_string(),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation())
    }
}

impl FromStr for Card {
    type Err = SimError;

    /// Accepts `7h`, `Th`, `10♠` and the joker forms `JKr` / `JKb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "jkr" => return Ok(Card::Joker(JokerColor::Red)),
            "jkb" => return Ok(Card::Joker(JokerColor::Black)),
            _ => {}
        }
        let split = trimmed
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .filter(|idx| *idx > 0)
            .ok_or_else(|| SimError::ParseCard(format!("invalid card '{s}'")))?;
        let (rank, suit) = trimmed.split_at(split);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Card::new(rank, suit)
    }
}

/// The 52 standard cards in suit-major order.
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Parses a whitespace-separated list such as `"7h 7s Kd"`.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, SimError> {
    input.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ten_in_both_notations() {
        assert_eq!("Th".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("10♠".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Spades));
        assert_eq!("jkr".parse::<Card>().unwrap(), Card::Joker(JokerColor::Red));
        assert!("1x".parse::<Card>().is_err());
        assert!("h".parse::<Card>().is_err());
    }

    #[test]
    fn rank_ordering_ignores_suit() {
        let low = Card::new(Rank::Nine, Suit::Spades);
        let high = Card::new(Rank::Nine, Suit::Clubs);
        assert_eq!(low.cmp_rank(&high), Ordering::Equal);
        assert_ne!(low, high);
    }
}
