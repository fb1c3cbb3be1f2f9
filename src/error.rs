use crate::game::Street;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("cannot deal {requested} card(s): only {remaining} left in the shoe")]
    ShoeExhausted { requested: usize, remaining: usize },

    #[error("strategy returned an invalid bet of {amount} on {street} street")]
    InvalidBet { street: Street, amount: f64 },

    #[error("wildcard search supports at most {max} jokers, hand has {count}")]
    TooManyJokers { count: usize, max: usize },

    #[error("hand evaluation needs exactly 5 cards, got {0}")]
    HandSize(usize),

    #[error("{0}")]
    ParseCard(String),

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
