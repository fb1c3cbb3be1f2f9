use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{Decision, PeekPolicy, Street};
use crate::playbook::{AdvantagePlayFifth, BasicStrategy};

/// Everything a strategy may look at when deciding a street.
#[derive(Debug, Clone, Copy)]
pub struct StreetView<'a> {
    pub hole: &'a [Card; 2],
    pub revealed: &'a [Card],
    pub street: Street,
    pub ante: f64,
    pub current_total: f64,
    /// Community cards not yet turned that the player has been allowed to
    /// see, indexed by [`Street::community_index`].
    pub peeked: &'a [Option<Card>; 3],
    /// Decisions already taken this round, oldest first.
    pub history: &'a [Decision],
}

impl StreetView<'_> {
    /// Hole cards followed by the revealed community cards.
    pub fn known_cards(&self) -> Vec<Card> {
        self.hole.iter().chain(self.revealed).copied().collect()
    }

    /// The peeked card that turns after `street`, if any.
    pub fn peeked_card(&self, street: Street) -> Option<Card> {
        self.peeked[street.community_index()]
    }

    pub fn bet(&self, multiple: f64) -> Decision {
        Decision::times_ante(multiple, self.ante)
    }

    /// Whether any earlier street this round was bet at `multiple` × ante.
    pub fn previously_bet(&self, multiple: f64) -> bool {
        let target = multiple * self.ante;
        self.history
            .iter()
            .any(|decision| decision.amount().is_some_and(|amount| amount == target))
    }
}

/// A betting policy. Round memory arrives through [`StreetView::history`],
/// so one instance can serve any number of rounds concurrently.
pub trait Strategy: Send + Sync {
    fn decide(&self, view: &StreetView<'_>) -> Decision;

    /// Community cards this strategy gets to peek at.
    fn peek_policy(&self) -> PeekPolicy {
        PeekPolicy::NONE
    }
}

impl<F> Strategy for F
where
    F: Fn(&StreetView<'_>) -> Decision + Send + Sync,
{
    fn decide(&self, view: &StreetView<'_>) -> Decision {
        self(view)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Basic,
    Ap5,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Basic => Box::new(BasicStrategy),
            StrategyKind::Ap5 => Box::new(AdvantagePlayFifth),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Basic => "basic",
            StrategyKind::Ap5 => "ap5",
        }
    }
}
