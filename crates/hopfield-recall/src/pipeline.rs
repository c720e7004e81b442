//! End-to-end recall run
//!
//! Encodes a grid, trains a memory on it, corrupts it with sign-flip noise,
//! recalls from the corrupted copy and scores the result against the
//! stored pattern. Presentation of the report is left to the caller.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::codec::{decode, encode, Grid};
use crate::config::RecallConfig;
use crate::error::Result;
use crate::memory::AssociativeMemory;
use crate::noise::NoiseInjector;
use crate::scorer::agreement;

/// Everything a display layer needs about one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecallReport {
    /// The stored pattern.
    #[serde(serialize_with = "serialize_grid")]
    pub ideal: Grid,
    /// The corrupted observation recall started from.
    #[serde(serialize_with = "serialize_grid")]
    pub noisy: Grid,
    /// The state recall ended in.
    #[serde(serialize_with = "serialize_grid")]
    pub recovered: Grid,
    /// Update rounds applied during recall.
    pub iterations: usize,
    /// Whether recall reached a fixed point within budget.
    pub converged: bool,
    /// Agreement of the noisy observation with the ideal pattern.
    pub noisy_agreement: f64,
    /// Agreement of the recovered state with the ideal pattern.
    pub recovered_agreement: f64,
}

fn serialize_grid<S: serde::Serializer>(
    grid: &Grid,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(grid.to_string().lines())
}

/// Runs the encode → train → noise → recall → score sequence.
///
/// # Examples
///
/// ```rust
/// use hopfield_recall::{codec::Grid, RecallConfig, RecallPipeline};
///
/// let grid = Grid::from_lines(&["##", "##"]).unwrap();
/// let config = RecallConfig::default().with_flip_probability(0.0);
/// let report = RecallPipeline::new(config).unwrap().run(&grid).unwrap();
///
/// assert_eq!(report.recovered, grid);
/// assert_eq!(report.recovered_agreement, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct RecallPipeline {
    config: RecallConfig,
}

impl RecallPipeline {
    /// Validate `config` and build a pipeline.
    pub fn new(config: RecallConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &RecallConfig {
        &self.config
    }

    /// Run with a noise generator built from the configured seed, or from
    /// OS entropy when no seed is set.
    pub fn run(&self, grid: &Grid) -> Result<RecallReport> {
        let mut injector = match self.config.seed {
            Some(seed) => NoiseInjector::seeded(seed),
            None => NoiseInjector::from_entropy(),
        };
        self.run_with(grid, &mut injector)
    }

    /// Run with a caller-supplied noise generator.
    pub fn run_with<R: Rng>(
        &self,
        grid: &Grid,
        injector: &mut NoiseInjector<R>,
    ) -> Result<RecallReport> {
        let ideal = encode(grid)?;
        let (height, width) = (grid.height(), grid.width());

        let mut memory = AssociativeMemory::new(ideal.len())?;
        memory.train(&ideal)?;

        let noisy = injector.apply(&ideal, self.config.flip_probability)?;
        let outcome = memory.recall_detailed(&noisy, self.config.max_iterations)?;

        let noisy_agreement = agreement(&ideal, &noisy)?;
        let recovered_agreement = agreement(&ideal, &outcome.state)?;

        info!(
            height,
            width,
            iterations = outcome.iterations,
            converged = outcome.converged,
            noisy_agreement,
            recovered_agreement,
            "recall run complete"
        );

        Ok(RecallReport {
            ideal: grid.clone(),
            noisy: decode(&noisy, height, width)?,
            recovered: decode(&outcome.state, height, width)?,
            iterations: outcome.iterations,
            converged: outcome.converged,
            noisy_agreement,
            recovered_agreement,
        })
    }
}
