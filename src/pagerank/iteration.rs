//! Iterative PageRank: repeat the rank update until it stops moving

use log::{debug, trace};

use super::{
    Corpus, Distribution,
    config::{validate_damping_factor, validate_epsilon},
};
use crate::{Error, Result};

/// Solve PageRank by repeated full sweeps until no page changes by more
/// than `epsilon`.
///
/// Every page starts at `1 / N`. A sweep computes each page's new rank from
/// the previous sweep's ranks only:
///
/// ```text
/// PR(p) = (1 - d) / N + Σ d · PR(i) / out_degree(i)    for every i linking to p
/// ```
///
/// A page nobody links to instead receives `Σ d · PR(i) / N` over every page
/// `i` of the corpus, as if the whole corpus linked to it uniformly. That
/// rule does not conserve rank, and on some corpora (two pages with no
/// inbound links both pointing at a third) the ranks grow without bound;
/// such runs end in [`Error::Diverged`] once a rank stops being finite.
/// There is no sweep limit; see [`iterate_pagerank_with_limit`] for a
/// bounded variant.
///
/// # Examples
///
/// ```
/// use minimax_pagerank::pagerank::{Corpus, iterate_pagerank};
///
/// let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
/// let ranks = iterate_pagerank(&corpus, 0.85, 0.001).unwrap();
/// assert!((ranks.get("a").unwrap() - 0.5).abs() < 1e-9);
/// ```
pub fn iterate_pagerank(corpus: &Corpus, damping_factor: f64, epsilon: f64) -> Result<Distribution> {
    iterate_pagerank_with_limit(corpus, damping_factor, epsilon, None)
}

/// [`iterate_pagerank`] with an optional cap on the number of sweeps.
///
/// # Errors
///
/// Returns [`Error::DidNotConverge`] when `max_iterations` sweeps pass
/// without reaching `epsilon`, [`Error::Diverged`] when a rank overflows,
/// [`Error::EmptyCorpus`] for an empty corpus,
/// and a validation error for an out-of-range damping factor or epsilon.
pub fn iterate_pagerank_with_limit(
    corpus: &Corpus,
    damping_factor: f64,
    epsilon: f64,
    max_iterations: Option<usize>,
) -> Result<Distribution> {
    validate_damping_factor(damping_factor)?;
    validate_epsilon(epsilon)?;
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let count = pages.len() as f64;
    let out_degree: Vec<usize> = pages
        .iter()
        .map(|page| corpus.out_degree(page).unwrap_or(0))
        .collect();
    let inbound: Vec<Vec<usize>> = pages
        .iter()
        .map(|target| {
            pages
                .iter()
                .enumerate()
                .filter(|(_, source)| {
                    corpus
                        .links(source)
                        .is_some_and(|links| links.contains(*target))
                })
                .map(|(index, _)| index)
                .collect()
        })
        .collect();

    let base = (1.0 - damping_factor) / count;
    let mut ranks = vec![1.0 / count; pages.len()];
    let mut sweeps = 0usize;

    loop {
        let total: f64 = ranks.iter().sum();
        let next: Vec<f64> = inbound
            .iter()
            .map(|sources| {
                if sources.is_empty() {
                    base + damping_factor * total / count
                } else {
                    base + sources
                        .iter()
                        .map(|&source| damping_factor * ranks[source] / out_degree[source] as f64)
                        .sum::<f64>()
                }
            })
            .collect();

        let max_change = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        sweeps += 1;
        if !max_change.is_finite() || next.iter().any(|rank| !rank.is_finite()) {
            return Err(Error::Diverged { iterations: sweeps });
        }
        ranks = next;
        trace!("sweep {sweeps}: max change {max_change:.6}");

        if max_change <= epsilon {
            debug!("converged after {sweeps} sweeps (max change {max_change:.6})");
            break;
        }
        if max_iterations.is_some_and(|limit| sweeps >= limit) {
            return Err(Error::DidNotConverge {
                iterations: sweeps,
                max_change,
            });
        }
    }

    Ok(pages
        .iter()
        .zip(ranks)
        .map(|(page, rank)| (page.to_string(), rank))
        .collect())
}
