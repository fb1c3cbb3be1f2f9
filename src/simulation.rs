use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SimError};
use crate::evaluator::JokerMode;
use crate::risk::RiskReport;
use crate::round::{RoundConfig, RoundResult, simulate_round};
use crate::shoe::Shoe;
use crate::strategy::{Strategy, StrategyKind};

const PROGRESS_EVERY: u64 = 1000;

/// Configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub strategy: StrategyKind,
    pub rounds: u64,
    pub ante: f64,
    pub bankroll: f64,
    pub rounds_per_hour: f64,
    pub seed: Option<u64>,
    pub joker_mode: JokerMode,
    /// Add a red and a black joker to every shoe.
    pub jokers: bool,
    pub verbose: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Basic,
            rounds: 10_000,
            ante: 5.0,
            bankroll: 500.0,
            rounds_per_hour: 30.0,
            seed: None,
            joker_mode: JokerMode::Wild,
            jokers: false,
            verbose: false,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(SimError::InvalidConfig("rounds must be at least 1".into()));
        }
        if !(self.ante.is_finite() && self.ante > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "ante must be positive, got {}",
                self.ante
            )));
        }
        if !self.bankroll.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "bankroll must be finite, got {}",
                self.bankroll
            )));
        }
        if !(self.rounds_per_hour.is_finite() && self.rounds_per_hour >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "rounds per hour must be non-negative, got {}",
                self.rounds_per_hour
            )));
        }
        Ok(())
    }
}

/// Running profit statistics. `merge` is associative and commutative, so
/// rounds may be folded in any order and on any thread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfitStats {
    pub count: u64,
    pub mean: f64,
    /// Sum of squared deviations from the mean.
    pub m2: f64,
    pub total_bet_sum: f64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
}

impl ProfitStats {
    pub fn record(&mut self, profit: f64, total_bet: f64) {
        self.count += 1;
        let delta = profit - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (profit - self.mean);
        self.total_bet_sum += total_bet;
        if profit > 0.0 {
            self.wins += 1;
        } else if profit < 0.0 {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }

    pub fn record_round(&mut self, round: &RoundResult) {
        self.record(round.profit, round.total_bet);
    }

    pub fn merge(self, other: ProfitStats) -> ProfitStats {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }
        let count = self.count + other.count;
        let (n_a, n_b, n) = (self.count as f64, other.count as f64, count as f64);
        let delta = other.mean - self.mean;
        ProfitStats {
            count,
            mean: self.mean + delta * n_b / n,
            m2: self.m2 + other.m2 + delta * delta * n_a * n_b / n,
            total_bet_sum: self.total_bet_sum + other.total_bet_sum,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            pushes: self.pushes + other.pushes,
        }
    }

    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn summary(&self) -> SimulationSummary {
        let rounds = self.count;
        let per_round = |value: f64| if rounds == 0 { 0.0 } else { value / rounds as f64 };
        let rate = |n: u64| per_round(n as f64);
        let average_total_bet = per_round(self.total_bet_sum);
        let (mu_risk, sigma_risk) = if average_total_bet > 0.0 {
            (
                self.mean / average_total_bet,
                self.population_variance().sqrt() / average_total_bet,
            )
        } else {
            (0.0, 0.0)
        };
        SimulationSummary {
            rounds,
            mean_profit: self.mean,
            std_dev: self.sample_variance().sqrt(),
            win_rate: rate(self.wins),
            loss_rate: rate(self.losses),
            push_rate: rate(self.pushes),
            average_total_bet,
            mu_risk,
            sigma_risk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub rounds: u64,
    pub mean_profit: f64,
    /// Sample standard deviation of profit per hand, in currency.
    pub std_dev: f64,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub push_rate: f64,
    pub average_total_bet: f64,
    /// Mean profit divided by the average total bet.
    pub mu_risk: f64,
    /// Population standard deviation of profit / average total bet.
    pub sigma_risk: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub strategy: StrategyKind,
    pub ante: f64,
    pub seed: u64,
    pub summary: SimulationSummary,
    pub risk: RiskReport,
}

/// Plays `rounds` independent hands in parallel and folds their profits.
///
/// Round `i` draws from stream `i` of a ChaCha generator keyed by `seed`,
/// so the dealt hands depend only on `seed` and neighbouring seeds share no
/// hands. Thread scheduling can only change the floating-point rounding of
/// the reduction.
pub fn aggregate<S>(
    strategy: &S,
    round_config: &RoundConfig,
    rounds: u64,
    seed: u64,
    jokers: bool,
    verbose: bool,
) -> Result<ProfitStats>
where
    S: Strategy + ?Sized,
{
    let completed = AtomicU64::new(0);
    (0..rounds)
        .into_par_iter()
        .try_fold(ProfitStats::default, |mut stats, index| {
            let mut rng = round_rng(seed, index);
            let mut shoe = Shoe::shuffled(jokers, &mut rng);
            let round = simulate_round(&mut shoe, strategy, round_config)?;
            stats.record_round(&round);

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if verbose && done % PROGRESS_EVERY == 0 {
                info!("simulated {done} / {rounds} hands");
            }
            Ok::<_, SimError>(stats)
        })
        .try_reduce(ProfitStats::default, |a, b| Ok(a.merge(b)))
}

fn round_rng(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}

pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let strategy = config.strategy.build();
    let round_config = RoundConfig {
        ante: config.ante,
        joker_mode: config.joker_mode,
        peek: strategy.peek_policy(),
    };

    info!(
        strategy = config.strategy.name(),
        rounds = config.rounds,
        ante = config.ante,
        seed,
        "starting simulation"
    );
    let stats = aggregate(
        strategy.as_ref(),
        &round_config,
        config.rounds,
        seed,
        config.jokers,
        config.verbose,
    )?;
    let summary = stats.summary();
    info!(
        mean_profit = summary.mean_profit,
        std_dev = summary.std_dev,
        "simulation finished"
    );

    let risk = RiskReport::new(&summary, config.bankroll, config.rounds_per_hour);
    Ok(SimulationReport {
        strategy: config.strategy,
        ante: config.ante,
        seed,
        summary,
        risk,
    })
}
