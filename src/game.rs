use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A betting street, named by how many cards the player has seen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Street {
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
}

impl Street {
    pub const ALL: [Street; 3] = [Street::Third, Street::Fourth, Street::Fifth];

    /// Index of the community card revealed once this street's bet is placed.
    pub fn community_index(self) -> usize {
        match self {
            Street::Third => 0,
            Street::Fourth => 1,
            Street::Fifth => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Third => "3rd",
            Street::Fourth => "4th",
            Street::Fifth => "5th",
        }
    }
}

impl Display for Street {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Fold,
    Bet(f64),
}

impl Decision {
    pub fn times_ante(multiple: f64, ante: f64) -> Self {
        Decision::Bet(multiple * ante)
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Decision::Fold => None,
            Decision::Bet(amount) => Some(*amount),
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Fold => f.write_str("fold"),
            Decision::Bet(amount) => write!(f, "bet {amount}"),
        }
    }
}

/// Which community cards the player gets to see before they are turned.
///
/// `third` is the card turned after the 3rd-street bet, and so on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeekPolicy {
    #[serde(default)]
    pub third: bool,
    #[serde(default)]
    pub fourth: bool,
    #[serde(default)]
    pub fifth: bool,
}

impl PeekPolicy {
    pub const NONE: PeekPolicy = PeekPolicy {
        third: false,
        fourth: false,
        fifth: false,
    };

    pub fn allows(&self, community_index: usize) -> bool {
        match community_index {
            0 => self.third,
            1 => self.fourth,
            2 => self.fifth,
            _ => false,
        }
    }
}
