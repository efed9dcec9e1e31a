//! Tic-Tac-Toe CLI - query the minimax solver, watch it play itself, or play against it

use anyhow::Result;
use clap::Parser;
use minimax_pagerank::cli::commands::tictactoe::{TicTacToeArgs, execute};

fn main() -> Result<()> {
    env_logger::init();
    execute(TicTacToeArgs::parse())
}
