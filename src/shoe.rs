use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::{Card, JokerColor, standard_deck};
use crate::error::{Result, SimError};

/// A single deck consumed by shuffling and dealing from the end.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    pub fn new() -> Self {
        Self {
            cards: standard_deck(),
        }
    }

    /// 52 cards plus a red and a black joker.
    pub fn with_jokers() -> Self {
        let mut cards = standard_deck();
        cards.push(Card::Joker(JokerColor::Red));
        cards.push(Card::Joker(JokerColor::Black));
        Self { cards }
    }

    /// A shoe that deals `deal_order` front to back.
    pub fn stacked(deal_order: &[Card]) -> Self {
        Self {
            cards: deal_order.iter().rev().copied().collect(),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(jokers: bool, rng: &mut R) -> Self {
        let mut shoe = if jokers { Self::with_jokers() } else { Self::new() };
        shoe.shuffle(rng);
        shoe
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn deal(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(SimError::ShoeExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Deals `N` cards, or none at all if fewer remain.
    pub fn deal_many<const N: usize>(&mut self) -> Result<[Card; N]> {
        let remaining = self.cards.len();
        if remaining < N {
            return Err(SimError::ShoeExhausted {
                requested: N,
                remaining,
            });
        }
        let mut dealt = [Card::Joker(JokerColor::Red); N];
        for slot in dealt.iter_mut() {
            *slot = self.deal()?;
        }
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
