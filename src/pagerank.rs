//! PageRank over a corpus of linked pages
//!
//! Two estimators are provided: [`sample_pagerank`] follows a random surfer
//! and counts visits, [`iterate_pagerank`] solves the rank equations by
//! repeated sweeps.

pub mod config;
pub mod corpus;
pub mod distribution;
pub mod iteration;
pub mod report;
pub mod sampling;
pub mod transition;

pub use config::{DEFAULT_DAMPING_FACTOR, DEFAULT_EPSILON, DEFAULT_SAMPLES, PageRankConfig};
pub use corpus::{Corpus, extract_links};
pub use distribution::{Distribution, TransitionWeights};
pub use iteration::{iterate_pagerank, iterate_pagerank_with_limit};
pub use report::RankReport;
pub use sampling::sample_pagerank;
pub use transition::transition_model;
