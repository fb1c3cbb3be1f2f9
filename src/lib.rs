pub mod cards;
pub mod error;
pub mod evaluator;
pub mod features;
pub mod game;
pub mod payout;
pub mod playbook;
pub mod report;
pub mod risk;
pub mod round;
pub mod shoe;
pub mod simulation;
pub mod strategy;

pub use error::{Result, SimError};
pub use risk::risk_of_ruin;
pub use round::{RoundConfig, RoundResult, simulate_round};
pub use simulation::{SimulationConfig, SimulationReport, SimulationSummary, run_simulation};
pub use strategy::{Strategy, StrategyKind, StreetView};
