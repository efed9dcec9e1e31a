//! Both estimators run side by side on one corpus

use log::info;
use serde::{Deserialize, Serialize};

use super::{
    Corpus, Distribution, PageRankConfig, iteration::iterate_pagerank_with_limit,
    sampling::sample_pagerank,
};
use crate::Result;

/// Sampled and iterated ranks for the same corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankReport {
    /// Random-walk length used for `sampled`
    pub samples: usize,
    pub damping_factor: f64,
    pub sampled: Distribution,
    pub iterated: Distribution,
}

impl RankReport {
    /// Run both estimators with the settings in `config`.
    pub fn compute(corpus: &Corpus, config: &PageRankConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = config.rng();
        let sampled = sample_pagerank(corpus, config.damping_factor, config.samples, &mut rng)?;
        let iterated = iterate_pagerank_with_limit(
            corpus,
            config.damping_factor,
            config.epsilon,
            config.max_iterations,
        )?;

        info!(
            "ranked {} pages; largest gap between estimators {:.4}",
            corpus.len(),
            sampled.max_abs_difference(&iterated)
        );

        Ok(RankReport {
            samples: config.samples,
            damping_factor: config.damping_factor,
            sampled,
            iterated,
        })
    }

    /// (page, sampled, iterated) rows in lexicographic page order
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.iterated.iter().map(|(page, iterated)| {
            (page, self.sampled.get(page).unwrap_or(0.0), iterated)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimators_rank_the_hub_first() {
        let corpus = Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ]);
        let config = PageRankConfig::new().with_seed(11).with_samples(20_000);
        let report = RankReport::compute(&corpus, &config).unwrap();

        assert_eq!(report.rows().count(), 4);
        assert_eq!(report.samples, 20_000);
        for distribution in [&report.sampled, &report.iterated] {
            assert!((distribution.total() - 1.0).abs() < 1e-3);
            let (top, _) = distribution
                .iter()
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .unwrap();
            assert_eq!(top, "2.html");
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]);
        let config = PageRankConfig::new().with_samples(0);
        assert!(RankReport::compute(&corpus, &config).is_err());
    }
}
