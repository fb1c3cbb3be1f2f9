use std::io::{self, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::simulation::SimulationReport;

pub struct ReportPrinter {
    no_color: bool,
}

impl ReportPrinter {
    pub fn new(no_color: bool) -> Self {
        Self { no_color }
    }

    pub fn print(&self, report: &SimulationReport) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write(&mut out, report)?;
        out.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, out: &mut W, report: &SimulationReport) -> Result<()> {
        let summary = &report.summary;
        let risk = &report.risk;
        let rows = [
            ("Strategy", report.strategy.name().to_string()),
            ("Rounds", summary.rounds.to_string()),
            ("Ante", format!("${:.2}", report.ante)),
            ("Seed", report.seed.to_string()),
            ("EV per hand", format!("${:.2}", summary.mean_profit)),
            ("Standard Deviation", format!("${:.2}", summary.std_dev)),
            ("Win Rate", percent(summary.win_rate, 1)),
            ("Loss Rate", percent(summary.loss_rate, 1)),
            ("Push Rate", percent(summary.push_rate, 1)),
            ("Avg total bet", format!("${:.2}", summary.average_total_bet)),
            (
                "Risk units",
                format!("μ {:.4}  σ {:.4}", summary.mu_risk, summary.sigma_risk),
            ),
            (
                "Risk of Ruin",
                format!(
                    "{} (bankroll ${:.2}, ~{:.1} risk units)",
                    percent(risk.risk_of_ruin, 2),
                    risk.bankroll,
                    risk.bankroll_units
                ),
            ),
            ("EV/hr", format!("${:.2}", risk.ev_per_hour)),
            (
                "N₀",
                match (risk.n0_rounds, risk.n0_hours) {
                    (Some(rounds), Some(hours)) => format!("{rounds:.0} rounds ({hours:.2} hours)"),
                    (Some(rounds), None) => format!("{rounds:.0} rounds"),
                    _ => "∞ (non-positive EV)".to_string(),
                },
            ),
        ];

        for (label, value) in rows {
            if self.no_color {
                writeln!(out, "{label}: {value}")?;
            } else {
                writeln!(out, "{}: {}", label.bold().cyan(), value.bold().white())?;
            }
        }
        Ok(())
    }
}

fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}
