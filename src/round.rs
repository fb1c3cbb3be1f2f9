use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::error::{Result, SimError};
use crate::evaluator::{HandStrength, JokerMode, evaluate};
use crate::game::{Decision, PeekPolicy, Street};
use crate::payout::Outcome;
use crate::shoe::Shoe;
use crate::strategy::{Strategy, StreetView};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub ante: f64,
    pub joker_mode: JokerMode,
    pub peek: PeekPolicy,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            ante: 1.0,
            joker_mode: JokerMode::Wild,
            peek: PeekPolicy::NONE,
        }
    }
}

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Dealt,
    Betting(Street),
    Folded(Street),
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub profit: f64,
    pub total_bet: f64,
    pub phase: RoundPhase,
    pub decisions: Vec<Decision>,
    /// Present only when the round reached showdown.
    pub outcome: Option<Outcome>,
    pub strength: Option<HandStrength>,
}

impl RoundResult {
    pub fn folded(&self) -> bool {
        matches!(self.phase, RoundPhase::Folded(_))
    }
}

/// Mutable state of one hand between streets.
#[derive(Debug)]
struct RoundState {
    hole: [Card; 2],
    community: [Card; 3],
    revealed: usize,
    total_bet: f64,
    phase: RoundPhase,
    decisions: Vec<Decision>,
}

impl RoundState {
    fn deal(shoe: &mut Shoe, ante: f64) -> Result<Self> {
        let [a, b, c, d, e] = shoe.deal_many::<5>()?;
        Ok(Self {
            hole: [a, b],
            community: [c, d, e],
            revealed: 0,
            total_bet: ante,
            phase: RoundPhase::Dealt,
            decisions: Vec::with_capacity(3),
        })
    }

    fn peeked(&self, policy: PeekPolicy) -> [Option<Card>; 3] {
        std::array::from_fn(|idx| {
            (idx >= self.revealed && policy.allows(idx)).then_some(self.community[idx])
        })
    }

    fn final_hand(&self) -> [Card; 5] {
        let [a, b] = self.hole;
        let [c, d, e] = self.community;
        [a, b, c, d, e]
    }
}

/// Plays one hand from a shuffled shoe: three streets of decisions, then
/// showdown against the paytable.
pub fn simulate_round<S>(shoe: &mut Shoe, strategy: &S, config: &RoundConfig) -> Result<RoundResult>
where
    S: Strategy + ?Sized,
{
    let mut state = RoundState::deal(shoe, config.ante)?;

    for street in Street::ALL {
        state.phase = RoundPhase::Betting(street);
        let peeked = state.peeked(config.peek);
        let view = StreetView {
            hole: &state.hole,
            revealed: &state.community[..state.revealed],
            street,
            ante: config.ante,
            current_total: state.total_bet,
            peeked: &peeked,
            history: &state.decisions,
        };
        let decision = strategy.decide(&view);
        debug!(%street, %decision, total = state.total_bet, "street decision");

        match decision {
            Decision::Fold => {
                state.decisions.push(decision);
                state.phase = RoundPhase::Folded(street);
                return Ok(RoundResult {
                    profit: -state.total_bet,
                    total_bet: state.total_bet,
                    phase: state.phase,
                    decisions: state.decisions,
                    outcome: None,
                    strength: None,
                });
            }
            Decision::Bet(amount) if amount.is_finite() && amount > 0.0 => {
                state.total_bet += amount;
                state.decisions.push(decision);
                state.revealed = street.community_index() + 1;
            }
            Decision::Bet(amount) => return Err(SimError::InvalidBet { street, amount }),
        }
    }

    let strength = evaluate(&state.final_hand(), config.joker_mode)?;
    let outcome = Outcome::classify(&strength);
    let profit = outcome.profit(state.total_bet);
    debug!(%outcome, profit, total = state.total_bet, "round resolved");

    Ok(RoundResult {
        profit,
        total_bet: state.total_bet,
        phase: RoundPhase::Resolved,
        decisions: state.decisions,
        outcome: Some(outcome),
        strength: Some(strength),
    })
}
