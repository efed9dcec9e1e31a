//! CLI infrastructure for the `pagerank` and `tictactoe` binaries

pub mod commands;
pub mod output;
