//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "baccarat",
    version,
    about = "Single-player baccarat dealt from an 8-deck shoe"
)]
pub struct BaccaratCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (reads commands from stdin)
    Play {
        /// Seed the shoe for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance (default 5000)
        #[arg(long)]
        balance: Option<f64>,
        /// Deal cards without taking bets
        #[arg(long)]
        deal_only: bool,
    },
    /// Deal rounds and print the cards and outcome
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// One JSON object per round instead of text
        #[arg(long)]
        json: bool,
    },
    /// Deal rounds and report how often each rank was drawn
    Counts {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 100)]
        rounds: u32,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
