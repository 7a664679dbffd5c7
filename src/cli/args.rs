use crate::*;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Equilibrium analysis of a festival discount war", long_about = None)]
pub struct Args {
    /// Observations as a JSON array, in crate or dataset column names
    #[arg(long, short)]
    pub data: PathBuf,
    /// Policy overrides as JSON; omitted fields keep the built-in scenario
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Use raw profits with every policy rule switched off
    #[arg(long, conflicts_with = "policy")]
    pub neutral: bool,
    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub query: Query,
}

#[derive(Subcommand)]
pub enum Query {
    #[command(about = "List the periods present in the data", alias = "ls")]
    Periods,
    #[command(about = "Solve one period end to end", alias = "rep")]
    Report {
        #[arg(long, short, value_parser = period)]
        period: Period,
        #[arg(long, short, default_value_t = SCAN_FLOOR)]
        multiplier: Multiplier,
    },
    #[command(about = "Find where rising costs move player one's equilibrium", alias = "tip")]
    Tipping {
        /// Every period when omitted
        #[arg(long, short, value_parser = period)]
        period: Option<Period>,
    },
    #[command(about = "Expected value per strategy across periods")]
    Trend {
        #[arg(long, short, default_value_t = SCAN_FLOOR)]
        multiplier: Multiplier,
    },
    #[command(about = "Expected value per strategy across the multiplier grid")]
    Sweep {
        #[arg(long, short, value_parser = period)]
        period: Period,
    },
    #[command(about = "Demand branches beneath one strategy pair")]
    Tree {
        #[arg(long, short, value_parser = period)]
        period: Period,
        /// Player one's strategy first, e.g. HD-MD
        #[arg(long, value_parser = pair)]
        pair: Pair,
        #[arg(long, short, default_value_t = SCAN_FLOOR)]
        multiplier: Multiplier,
        #[arg(long, value_enum, default_value_t = Player::One)]
        perspective: Player,
    },
}

fn period(s: &str) -> anyhow::Result<Period> {
    Period::try_from(s)
}
fn pair(s: &str) -> anyhow::Result<Pair> {
    Pair::try_from(s)
}
