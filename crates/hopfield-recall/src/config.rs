//! Recall run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};

/// Default per-unit flip probability for the noisy observation.
pub const DEFAULT_FLIP_PROBABILITY: f64 = 0.08;

/// Default recall iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Tuning knobs for a [`RecallPipeline`](crate::pipeline::RecallPipeline) run.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON document such as `{"seed": 7}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Probability of flipping each unit when building the noisy observation.
    pub flip_probability: f64,
    /// Maximum synchronous rounds during recall.
    pub max_iterations: usize,
    /// Seed for the noise generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            flip_probability: DEFAULT_FLIP_PROBABILITY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RecallConfig {
    /// Set the flip probability.
    pub fn with_flip_probability(mut self, p: f64) -> Self {
        self.flip_probability = p;
        self
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Pin the noise generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// [`RecallError::InvalidProbability`] if the flip probability is NaN or
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(RecallError::InvalidProbability(self.flip_probability));
        }
        Ok(())
    }
}
