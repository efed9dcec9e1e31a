//! Rank distributions and unnormalized transition weights

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::utils::normalize_weighted_pairs;

/// Mapping from page name to a non-negative rank.
///
/// Estimator output sums to 1 over every page of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(BTreeMap<String, f64>);

impl Distribution {
    pub fn new(ranks: BTreeMap<String, f64>) -> Self {
        Distribution(ranks)
    }

    /// Rank of `page`, `None` for pages outside the distribution
    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    /// Iterate (page, rank) in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(page, &rank)| (page.as_str(), rank))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all ranks
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Largest absolute per-page difference to `other`.
    ///
    /// Pages missing from one side count as rank 0 there.
    pub fn max_abs_difference(&self, other: &Distribution) -> f64 {
        self.0
            .keys()
            .chain(other.0.keys())
            .map(|page| {
                let a = self.get(page).unwrap_or(0.0);
                let b = other.get(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

impl FromIterator<(String, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Distribution(iter.into_iter().collect())
    }
}

impl fmt::Display for Distribution {
    /// One `  page: 0.1234` line per page.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (page, rank) in self.iter() {
            writeln!(f, "  {page}: {rank:.4}")?;
        }
        Ok(())
    }
}

/// Relative likelihood of moving to each page from one page.
///
/// These weights do not sum to 1 in general; they are only meaningful
/// relative to each other. Use [`TransitionWeights::normalized`] to obtain a
/// probability distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionWeights(Vec<(String, f64)>);

impl TransitionWeights {
    pub(crate) fn new(weights: Vec<(String, f64)>) -> Self {
        TransitionWeights(weights)
    }

    /// Weight of moving to `page`
    pub fn get(&self, page: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == page)
            .map(|(_, weight)| *weight)
    }

    /// (page, weight) pairs in lexicographic page order
    pub fn as_slice(&self) -> &[(String, f64)] {
        &self.0
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, weight)| weight).sum()
    }

    /// Scale the weights into probabilities summing to 1.
    ///
    /// Returns `None` when every weight is zero.
    pub fn normalized(&self) -> Option<Distribution> {
        normalize_weighted_pairs(self.0.clone()).map(|pairs| pairs.into_iter().collect())
    }
}
