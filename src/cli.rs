//! Command-line interface for the self-play driver.

use clap::{Parser, Subcommand};

use tictactoe_core::StrategyKind;

/// Tic-tac-toe engine - self-play and evaluation driver
#[derive(Parser, Debug)]
#[command(name = "tictactoe_core")]
#[command(about = "Drive full games through the engine and tally outcomes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play full games with a scripted human side and report the tallies
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Strategy for the scripted human side
        #[arg(long, value_enum, default_value = "minimax")]
        human: StrategyKind,

        /// Strategy for the automated opponent
        #[arg(long, value_enum, default_value = "minimax")]
        automated: StrategyKind,

        /// Seed for random strategies (games use seed, seed+1, ...)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit each finished game as a JSON record on stdout
        #[arg(long)]
        json: bool,
    },
}
