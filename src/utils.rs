//! Utility functions shared by the estimators

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

/// Normalize weights to probabilities that sum to 1.0.
///
/// # Returns
///
/// - `Some(Vec<f64>)` containing normalized probabilities if total weight is positive
/// - `None` if total weight is zero, negative or not finite
///
/// # Examples
///
/// ```
/// use minimax_pagerank::utils::normalize_weights;
///
/// let normalized = normalize_weights(vec![1.0, 2.0, 1.0]).unwrap();
/// assert_eq!(normalized, vec![0.25, 0.5, 0.25]);
///
/// assert_eq!(normalize_weights(vec![0.0, 0.0]), None);
/// ```
pub fn normalize_weights<I>(weights: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let weights: Vec<f64> = weights.into_iter().collect();
    let sum: f64 = weights.iter().sum();

    if weights.is_empty() || !sum.is_finite() || sum <= 0.0 {
        return None;
    }

    Some(weights.iter().map(|&w| w / sum).collect())
}

/// Normalize weighted key-value pairs while preserving keys.
///
/// ```
/// use minimax_pagerank::utils::normalize_weighted_pairs;
///
/// let pages = vec![("a", 1.0), ("b", 3.0)];
/// assert_eq!(normalize_weighted_pairs(pages), Some(vec![("a", 0.25), ("b", 0.75)]));
/// ```
pub fn normalize_weighted_pairs<K>(weighted_items: Vec<(K, f64)>) -> Option<Vec<(K, f64)>> {
    let (keys, weights): (Vec<_>, Vec<_>) = weighted_items.into_iter().unzip();
    let normalized = normalize_weights(weights)?;
    Some(keys.into_iter().zip(normalized).collect())
}

/// Draw one item with probability proportional to its weight.
///
/// Weights are relative and need not sum to 1. If every weight is zero or
/// negative the draw falls back to a uniform choice. Returns `None` only for
/// an empty slice.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use minimax_pagerank::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];
/// let sampled = weighted_sample(&mut rng, &items);
/// assert!(sampled.is_some());
/// ```
pub fn weighted_sample<R, T, W>(rng: &mut R, items: &[(T, W)]) -> Option<T>
where
    R: Rng,
    T: Clone,
    W: Into<f64> + Copy,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| (*w).into()).sum();

    if total <= 0.0 {
        return items.choose(rng).map(|(item, _)| item.clone());
    }

    let mut threshold = rng.sample::<f64, _>(StandardUniform) * total;

    for (item, weight) in items {
        let w = (*weight).into();
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    // Rounding can leave a sliver of threshold past the last item.
    items.last().map(|(item, _)| item.clone())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_weighted_sample_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<(i32, f64)> = vec![];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn test_weighted_sample_single_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1.0)];
        assert_eq!(weighted_sample(&mut rng, &items), Some("a"));
    }

    #[test]
    fn test_weighted_sample_zero_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 0.0), ("b", 0.0), ("c", 0.0)];
        assert!(weighted_sample(&mut rng, &items).is_some());
    }

    #[test]
    fn test_weighted_sample_never_picks_zero_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec![("a", 0.0), ("b", 1.0)];
        for _ in 0..500 {
            assert_eq!(weighted_sample(&mut rng, &items), Some("b"));
        }
    }

    #[test]
    fn test_weighted_sample_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];

        let mut counts = HashMap::new();
        for _ in 0..1000 {
            let sample = weighted_sample(&mut rng, &items).unwrap();
            *counts.entry(sample).or_insert(0) += 1;
        }

        let count_a = counts.get(&"a").copied().unwrap_or(0);
        let count_b = counts.get(&"b").copied().unwrap_or(0);
        let count_c = counts.get(&"c").copied().unwrap_or(0);

        assert!(count_b > count_a, "b should appear more than a");
        assert!(count_b > count_c, "b should appear more than c");
        assert!(count_a > 0 && count_c > 0, "all items should appear");
    }

    #[test]
    fn test_weighted_sample_deterministic() {
        let items = vec![("a", 1.0), ("b", 2.0), ("c", 1.0)];

        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);

        assert_eq!(
            weighted_sample(&mut rng1, &items),
            weighted_sample(&mut rng2, &items)
        );
    }

    #[test]
    fn normalize_weights_returns_none_for_zero_total() {
        assert!(normalize_weights(vec![0.0, 0.0]).is_none());
        assert!(normalize_weights(Vec::new()).is_none());
    }

    #[test]
    fn normalize_weighted_pairs_keeps_keys() {
        let normalized = normalize_weighted_pairs(vec![(0, 1.0), (1, 3.0)]).unwrap();
        assert_eq!(normalized, vec![(0, 0.25), (1, 0.75)]);
    }
}
