//! Game search and graph ranking
//!
//! This crate provides:
//! - A complete Tic-Tac-Toe engine with an exhaustive, memoized minimax solver
//! - PageRank estimation by random-walk sampling and by iteration
//! - Corpus crawling, rank reports and CSV export
//! - Command-line front ends for both components

pub mod cli;
pub mod error;
pub mod export;
pub mod pagerank;
pub mod tictactoe;
pub mod utils;

pub use error::{Error, Result};
pub use pagerank::{Corpus, Distribution, PageRankConfig, RankReport};
pub use tictactoe::{Board, Move, Player, Solver};
