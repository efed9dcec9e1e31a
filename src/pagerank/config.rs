//! Estimator configuration.

use std::{fs, path::Path};

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Probability of following a link rather than jumping to a random page.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;

/// Number of random-walk steps taken by the sampler.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Largest per-page change at which the iterative solver stops.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Configuration shared by the sampling and iterative estimators.
///
/// Missing fields in a JSON file fall back to the defaults.
///
/// # Examples
///
/// ```
/// use minimax_pagerank::pagerank::PageRankConfig;
///
/// let config = PageRankConfig::new()
///     .with_damping_factor(0.9)
///     .with_samples(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Probability of following an outbound link
    pub damping_factor: f64,
    /// Random-walk length for the sampler
    pub samples: usize,
    /// Convergence threshold for the iterative solver
    pub epsilon: f64,
    /// Optional cap on solver sweeps; `None` iterates until convergence
    pub max_iterations: Option<usize>,
    /// Random seed for reproducible sampling
    pub seed: Option<u64>,
}

impl PageRankConfig {
    pub fn new() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            samples: DEFAULT_SAMPLES,
            epsilon: DEFAULT_EPSILON,
            max_iterations: None,
            seed: None,
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Serialization`] if it is not valid JSON for this type.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read config {}", path.display()), e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the random seed for deterministic sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        validate_damping_factor(self.damping_factor)?;
        if self.samples == 0 {
            return Err(Error::InvalidSampleCount);
        }
        validate_epsilon(self.epsilon)
    }

    /// RNG for the sampler: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(random))
    }
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_damping_factor(value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidDampingFactor { value })
    }
}

pub(crate) fn validate_epsilon(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidEpsilon { value })
    }
}
