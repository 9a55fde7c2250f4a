//! Command-line interface for starfield_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe over a drifting starfield
#[derive(Parser, Debug)]
#[command(name = "starfield_tictactoe")]
#[command(about = "Tic-tac-toe in the terminal, over an animated starfield", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "starfield_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Fix the starfield RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply a move list without a UI and print the result as JSON
    Script {
        /// Moves as "ROW,COL ROW,COL ...", e.g. "0,0 1,1 0,1"
        #[arg(short, long)]
        moves: String,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}
