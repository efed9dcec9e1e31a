//! Transition model of the random surfer

use super::{Corpus, TransitionWeights, config::validate_damping_factor};
use crate::{Error, Result};

/// Weights for the surfer's next page, given it is on `page`.
///
/// A linked page gets `damping / out_degree + (1 - damping)`; every other
/// page gets `1 - damping`. The weights are relative and do not sum to 1
/// when `page` has links. A page without links gives every page the same
/// weight, so the next page is uniform over the corpus.
///
/// # Errors
///
/// Returns [`Error::UnknownPage`] if `page` is not in the corpus and
/// [`Error::InvalidDampingFactor`] for a damping factor outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use minimax_pagerank::pagerank::{Corpus, transition_model};
///
/// let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec![]), ("c", vec![])]);
/// let weights = transition_model(&corpus, "a", 0.85).unwrap();
/// assert!((weights.get("b").unwrap() - 1.0).abs() < 1e-12);
/// assert!((weights.get("c").unwrap() - 0.15).abs() < 1e-12);
/// ```
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping_factor: f64,
) -> Result<TransitionWeights> {
    validate_damping_factor(damping_factor)?;
    let links = corpus.links(page).ok_or_else(|| Error::UnknownPage {
        page: page.to_string(),
    })?;

    let jump = 1.0 - damping_factor;
    let weights = corpus
        .pages()
        .map(|candidate| {
            let weight = if links.contains(candidate) {
                damping_factor / links.len() as f64 + jump
            } else {
                jump
            };
            (candidate.to_string(), weight)
        })
        .collect();

    Ok(TransitionWeights::new(weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html", "3.html"]),
            ("2.html", vec!["3.html"]),
            ("3.html", vec!["2.html"]),
            ("4.html", vec![]),
        ])
    }

    #[test]
    fn test_linked_pages_weighted_up() {
        let weights = transition_model(&corpus(), "1.html", 0.85).unwrap();

        assert!((weights.get("1.html").unwrap() - 0.15).abs() < 1e-12);
        assert!((weights.get("2.html").unwrap() - (0.425 + 0.15)).abs() < 1e-12);
        assert!((weights.get("3.html").unwrap() - (0.425 + 0.15)).abs() < 1e-12);
        assert!((weights.get("4.html").unwrap() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_weights_are_not_normalized() {
        let weights = transition_model(&corpus(), "1.html", 0.85).unwrap();
        assert!((weights.total() - (4.0 * 0.15 + 0.85)).abs() < 1e-12);

        let probabilities = weights.normalized().unwrap();
        assert!((probabilities.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_page_is_uniform() {
        let weights = transition_model(&corpus(), "4.html", 0.85).unwrap();
        for (_, weight) in weights.as_slice() {
            assert!((weight - 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unknown_page() {
        assert!(matches!(
            transition_model(&corpus(), "5.html", 0.85),
            Err(Error::UnknownPage { .. })
        ));
    }

    #[test]
    fn test_invalid_damping() {
        assert!(matches!(
            transition_model(&corpus(), "1.html", -0.1),
            Err(Error::InvalidDampingFactor { .. })
        ));
    }
}
