//! Bankroll risk under the drifted-Brownian-motion approximation.
//!
//! Everything here is scale-invariant: mean, standard deviation and bankroll
//! only need to share a unit. The simulator reports them in risk units,
//! i.e. divided by the average total amount wagered per hand.

use serde::{Deserialize, Serialize};

use crate::simulation::SimulationSummary;

/// Below this the exponential underflows to zero in `f64`.
const EXPONENT_FLOOR: f64 = -700.0;

/// Infinite-horizon probability of losing `bankroll` when each hand has mean
/// `mu` and standard deviation `sigma`.
///
/// A non-positive edge, bankroll or spread means ruin is certain, and so
/// does any NaN input.
pub fn risk_of_ruin(mu: f64, sigma: f64, bankroll: f64) -> f64 {
    if [mu, sigma, bankroll].iter().any(|v| v.is_nan()) {
        return 1.0;
    }
    if bankroll <= 0.0 || sigma <= 0.0 || mu <= 0.0 {
        return 1.0;
    }
    let exponent = -2.0 * mu * bankroll / (sigma * sigma);
    if exponent < EXPONENT_FLOOR {
        return 0.0;
    }
    exponent.exp().clamp(0.0, 1.0)
}

/// Hands needed for expected profit to equal one standard deviation,
/// `(sigma / mu)^2`. `None` for a non-positive edge.
pub fn rounds_to_breakeven(mu: f64, sigma: f64) -> Option<f64> {
    (mu > 0.0).then(|| (sigma / mu).powi(2))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    pub mu: f64,
    pub sigma: f64,
    pub bankroll: f64,
}

impl RiskParameters {
    /// Risk-unit parameters for a currency `bankroll`.
    pub fn from_summary(summary: &SimulationSummary, bankroll: f64) -> Self {
        let bankroll = if summary.average_total_bet > 0.0 {
            bankroll / summary.average_total_bet
        } else {
            0.0
        };
        Self {
            mu: summary.mu_risk,
            sigma: summary.sigma_risk,
            bankroll,
        }
    }

    pub fn risk_of_ruin(&self) -> f64 {
        risk_of_ruin(self.mu, self.sigma, self.bankroll)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub bankroll: f64,
    pub bankroll_units: f64,
    pub risk_of_ruin: f64,
    pub ev_per_hour: f64,
    pub n0_rounds: Option<f64>,
    pub n0_hours: Option<f64>,
}

impl RiskReport {
    pub fn new(summary: &SimulationSummary, bankroll: f64, rounds_per_hour: f64) -> Self {
        let params = RiskParameters::from_summary(summary, bankroll);
        let n0_rounds = rounds_to_breakeven(summary.mean_profit, summary.std_dev);
        Self {
            bankroll,
            bankroll_units: params.bankroll,
            risk_of_ruin: params.risk_of_ruin(),
            ev_per_hour: summary.mean_profit * rounds_per_hour,
            n0_rounds,
            n0_hours: n0_rounds
                .filter(|_| rounds_per_hour > 0.0)
                .map(|rounds| rounds / rounds_per_hour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_short_circuits_to_zero() {
        assert_eq!(risk_of_ruin(1.0, 0.1, 1000.0), 0.0);
    }

    #[test]
    fn nan_inputs_mean_certain_ruin() {
        assert_eq!(risk_of_ruin(f64::NAN, 1.0, 10.0), 1.0);
        assert_eq!(risk_of_ruin(0.1, f64::NAN, 10.0), 1.0);
        assert_eq!(risk_of_ruin(0.1, 1.0, f64::NAN), 1.0);
        let params = RiskParameters {
            mu: f64::NAN,
            sigma: 1.0,
            bankroll: 5.0,
        };
        assert_eq!(params.risk_of_ruin(), 1.0);
    }

    #[test]
    fn breakeven_needs_positive_edge() {
        assert_eq!(rounds_to_breakeven(0.0, 5.0), None);
        assert_eq!(rounds_to_breakeven(0.5, 5.0), Some(100.0));
    }
}
