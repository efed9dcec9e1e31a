//! PageRank command - Rank the pages of an HTML corpus

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::{
    cli::output::{create_spinner, format_rank_table},
    export::RankCsvExporter,
    pagerank::{Corpus, PageRankConfig, RankReport},
};

#[derive(Parser, Debug)]
#[command(name = "pagerank")]
#[command(version, about = "Estimate PageRank for a directory of HTML pages")]
pub struct PageRankArgs {
    /// Directory containing the corpus `.html` pages
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(long)]
    pub damping: Option<f64>,

    /// Number of random-walk steps taken by the sampler
    #[arg(long)]
    pub samples: Option<usize>,

    /// Convergence threshold for the iterative solver
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Give up on the iterative solver after this many sweeps
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Random seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with estimator settings (flags take precedence)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write the ranks to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the report as JSON instead of text tables
    #[arg(long)]
    pub json: bool,
}

impl PageRankArgs {
    /// Defaults, then the config file, then explicit flags.
    pub fn resolve_config(&self) -> Result<PageRankConfig> {
        let mut config = match &self.config {
            Some(path) => PageRankConfig::from_json_file(path)?,
            None => PageRankConfig::default(),
        };

        if let Some(damping) = self.damping {
            config = config.with_damping_factor(damping);
        }
        if let Some(samples) = self.samples {
            config = config.with_samples(samples);
        }
        if let Some(epsilon) = self.epsilon {
            config = config.with_epsilon(epsilon);
        }
        if let Some(max_iterations) = self.max_iterations {
            config = config.with_max_iterations(max_iterations);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Text report: sampled table, then iterated table
pub fn render_report(report: &RankReport) -> String {
    let sampled = format_rank_table(
        &format!("PageRank Results from Sampling (n = {})", report.samples),
        &report.sampled,
    );
    let iterated = format_rank_table("PageRank Results from Iteration", &report.iterated);
    format!("{sampled}{iterated}")
}

pub fn execute(args: PageRankArgs) -> Result<()> {
    let config = args.resolve_config()?;
    info!("estimator settings: {config:?}");

    let corpus = Corpus::crawl(&args.corpus)
        .with_context(|| format!("failed to crawl corpus {}", args.corpus.display()))?;

    let spinner = create_spinner(&format!("Ranking {} pages...", corpus.len()));
    let report = RankReport::compute(&corpus, &config);
    spinner.finish_and_clear();
    let report = report?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    if let Some(path) = &args.export {
        let rows = RankCsvExporter::export(&report, path)?;
        info!("wrote {rows} rows to {}", path.display());
    }

    Ok(())
}
