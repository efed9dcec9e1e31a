//! Monte-Carlo PageRank: follow the random surfer and count visits

use log::debug;
use rand::Rng;

use super::{Corpus, Distribution, transition_model};
use crate::{Error, Result, utils::weighted_sample};

/// Estimate PageRank by walking `samples` steps of the random surfer.
///
/// The walk starts on a uniformly chosen page. Each step draws the next page
/// from [`transition_model`] and counts a visit to it; ranks are visit counts
/// divided by `samples`, so they always sum to 1.
///
/// # Errors
///
/// Returns [`Error::EmptyCorpus`], [`Error::InvalidSampleCount`] when
/// `samples` is 0, or [`Error::InvalidDampingFactor`].
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use minimax_pagerank::pagerank::{Corpus, sample_pagerank};
///
/// let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let ranks = sample_pagerank(&corpus, 0.85, 1_000, &mut rng).unwrap();
/// assert!((ranks.total() - 1.0).abs() < 1e-9);
/// ```
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping_factor: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    if samples == 0 {
        return Err(Error::InvalidSampleCount);
    }

    let pages: Vec<&str> = corpus.pages().collect();

    // The weights only depend on the current page, so build each row once
    // with pages replaced by their index.
    let mut table: Vec<Vec<(usize, f64)>> = Vec::with_capacity(pages.len());
    for page in &pages {
        let weights = transition_model(corpus, page, damping_factor)?;
        table.push(
            weights
                .as_slice()
                .iter()
                .enumerate()
                .map(|(index, (_, weight))| (index, *weight))
                .collect(),
        );
    }

    let mut current = rng.random_range(0..pages.len());
    debug!(
        "sampling {samples} steps starting at {} (damping {damping_factor})",
        pages[current]
    );

    let mut visits = vec![0usize; pages.len()];
    for _ in 0..samples {
        current = weighted_sample(rng, &table[current]).ok_or(Error::EmptyCorpus)?;
        visits[current] += 1;
    }

    Ok(pages
        .iter()
        .zip(visits)
        .map(|(page, count)| (page.to_string(), count as f64 / samples as f64))
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn test_sums_to_one() {
        let mut rng = StdRng::seed_from_u64(42);
        for samples in [1, 2, 7, 100, 2_500] {
            let ranks = sample_pagerank(&corpus(), 0.85, samples, &mut rng).unwrap();
            assert_eq!(ranks.len(), 4);
            assert!(
                (ranks.total() - 1.0).abs() < 1e-9,
                "n = {samples}: total {}",
                ranks.total()
            );
        }
    }

    #[test]
    fn test_single_sample_is_one_visit() {
        let mut rng = StdRng::seed_from_u64(3);
        let ranks = sample_pagerank(&corpus(), 0.85, 1, &mut rng).unwrap();
        let visited: Vec<f64> = ranks.iter().map(|(_, r)| r).filter(|&r| r > 0.0).collect();
        assert_eq!(visited, vec![1.0]);
    }

    #[test]
    fn test_seeded_runs_match() {
        let a = sample_pagerank(&corpus(), 0.85, 500, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = sample_pagerank(&corpus(), 0.85, 500, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hub_page_ranks_highest() {
        let mut rng = StdRng::seed_from_u64(42);
        let ranks = sample_pagerank(&corpus(), 0.85, 10_000, &mut rng).unwrap();
        let hub = ranks.get("2.html").unwrap();
        for (page, rank) in ranks.iter() {
            if page != "2.html" {
                assert!(hub > rank, "{page} ({rank}) should rank below 2.html ({hub})");
            }
        }
    }

    #[test]
    fn test_rejects_empty_corpus_and_zero_samples() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_pagerank(&Corpus::default(), 0.85, 10, &mut rng),
            Err(Error::EmptyCorpus)
        ));
        assert!(matches!(
            sample_pagerank(&corpus(), 0.85, 0, &mut rng),
            Err(Error::InvalidSampleCount)
        ));
    }
}
