//! Command implementations behind the binaries

pub mod pagerank;
pub mod tictactoe;
