use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use msstud_sim::evaluator::JokerMode;
use msstud_sim::report::ReportPrinter;
use msstud_sim::{SimulationConfig, StrategyKind, run_simulation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "msstud-sim",
    version,
    about = "Mississippi Stud strategy simulation",
    author
)]
struct Cli {
    /// JSON file with a full simulation config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Strategy to simulate (default: basic)
    #[arg(long)]
    strategy: Option<StrategyArg>,

    /// Number of rounds to simulate (default: 10000)
    #[arg(long)]
    rounds: Option<u64>,

    /// Ante bet per hand (default: 5)
    #[arg(long)]
    ante: Option<f64>,

    /// Bankroll for the risk-of-ruin calculation (default: 500)
    #[arg(long)]
    bankroll: Option<f64>,

    /// Rounds played per hour, for EV/hr and N₀ (default: 30)
    #[arg(long = "rounds-per-hour")]
    rounds_per_hour: Option<f64>,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Add two jokers to every shoe
    #[arg(long, default_value_t = false)]
    jokers: bool,

    /// How jokers score in the final hand
    #[arg(long = "joker-mode")]
    joker_mode: Option<JokerModeArg>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Disable ANSI colors in the report
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,

    /// Show simulation progress
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum StrategyArg {
    Basic,
    Ap5,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Basic => StrategyKind::Basic,
            StrategyArg::Ap5 => StrategyKind::Ap5,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum JokerModeArg {
    Wild,
    Dead,
}

impl From<JokerModeArg> for JokerMode {
    fn from(arg: JokerModeArg) -> Self {
        match arg {
            JokerModeArg::Wild => JokerMode::Wild,
            JokerModeArg::Dead => JokerMode::Dead,
        }
    }
}

fn main() -> Result<()> {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_tracing(config.verbose);

    let report = run_simulation(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ReportPrinter::new(cli.no_color).print(&report)?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config: SimulationConfig = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(strategy) = cli.strategy.clone() {
        config.strategy = strategy.into();
    }
    if let Some(rounds) = cli.rounds {
        config.rounds = rounds;
    }
    if let Some(ante) = cli.ante {
        config.ante = ante;
    }
    if let Some(bankroll) = cli.bankroll {
        config.bankroll = bankroll;
    }
    if let Some(rounds_per_hour) = cli.rounds_per_hour {
        config.rounds_per_hour = rounds_per_hour;
    }
    if let Some(joker_mode) = cli.joker_mode.clone() {
        config.joker_mode = joker_mode.into();
    }
    config.seed = cli.seed.or(config.seed);
    config.jokers |= cli.jokers;
    config.verbose |= cli.verbose;

    config.validate()?;
    Ok(config)
}
