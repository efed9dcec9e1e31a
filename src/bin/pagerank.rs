//! PageRank CLI - rank a directory of HTML pages by sampling and by iteration

use anyhow::Result;
use clap::Parser;
use minimax_pagerank::cli::commands::pagerank::{PageRankArgs, execute};

fn main() -> Result<()> {
    env_logger::init();
    execute(PageRankArgs::parse())
}
