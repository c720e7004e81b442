//! Single-pattern Hopfield associative memory
//!
//! Training stores one bipolar pattern `p` as the outer product
//! `W[i][j] = p[i] * p[j]` with a zero diagonal. Recall runs synchronous
//! dynamics:
//!
//! ```text
//! h   = W s
//! s'_i = +1 if h_i > 0
//!        -1 if h_i < 0
//!        s_i if h_i == 0
//! ```
//!
//! until `s' == s` or the iteration budget runs out. Every unit of a round is
//! computed from the pre-update state; no unit observes another unit's new
//! value within the same round.
//!
//! All weights are exact integers (`0` or `±1`) stored as `f64`, so every
//! local field is an exact integer and the zero-field tie is detected exactly.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::error::{RecallError, Result};
use crate::vector::BipolarVector;

/// Number of weights an `n × n` matrix stores, if `n` is usable.
fn matrix_len(dimension: usize) -> Result<usize> {
    if dimension == 0 {
        return Err(RecallError::InvalidDimension(dimension));
    }
    dimension
        .checked_mul(dimension)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or(RecallError::InvalidDimension(dimension))
}

/// Dense `n × n` weight matrix, row-major.
///
/// Deserialization checks that `values` holds exactly `n²` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeightMatrix")]
pub struct WeightMatrix {
    dimension: usize,
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawWeightMatrix {
    dimension: usize,
    values: Vec<f64>,
}

impl TryFrom<RawWeightMatrix> for WeightMatrix {
    type Error = RecallError;

    fn try_from(raw: RawWeightMatrix) -> Result<Self> {
        let expected = matrix_len(raw.dimension)?;
        if raw.values.len() != expected {
            return Err(RecallError::DimensionMismatch {
                expected,
                actual: raw.values.len(),
            });
        }
        Ok(Self {
            dimension: raw.dimension,
            values: raw.values,
        })
    }
}

impl WeightMatrix {
    /// All-zero matrix.
    ///
    /// # Errors
    ///
    /// [`RecallError::InvalidDimension`] when `dimension` is zero or `n²`
    /// weights cannot be addressed.
    pub fn zeros(dimension: usize) -> Result<Self> {
        let len = matrix_len(dimension)?;
        Ok(Self {
            dimension,
            values: vec![0.0; len],
        })
    }

    /// Side length `n`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Weight from unit `j` to unit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`dimension`](Self::dimension).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.dimension && j < self.dimension,
            "weight index ({}, {}) out of range for dimension {}",
            i,
            j,
            self.dimension
        );
        self.values[i * self.dimension + j]
    }

    /// Incoming weights of unit `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.dimension;
        &self.values[start..start + self.dimension]
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `W[i][j] == W[j][i]` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        let n = self.dimension;
        (0..n).all(|i| (i + 1..n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Every diagonal entry is exactly zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.dimension).all(|i| self.get(i, i) == 0.0)
    }

    /// Overwrite with the outer product of `pattern`, diagonal zeroed.
    fn store_outer_product(&mut self, pattern: &[i8]) {
        let n = self.dimension;
        self.values.fill(0.0);
        for (i, &pi) in pattern.iter().enumerate() {
            let row = &mut self.values[i * n..(i + 1) * n];
            for (j, (w, &pj)) in row.iter_mut().zip(pattern).enumerate() {
                if i != j {
                    *w = f64::from(pi * pj);
                }
            }
        }
    }

    /// `h_i = Σ_j W[i][j] * s[j]`.
    #[inline]
    fn field(&self, i: usize, state: &[i8]) -> f64 {
        self.row(i)
            .iter()
            .zip(state)
            .map(|(&w, &s)| w * f64::from(s))
            .sum()
    }
}

/// Result of a recall run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallOutcome {
    /// Final state.
    pub state: BipolarVector,
    /// Number of update rounds applied to the state.
    pub iterations: usize,
    /// Whether a fixed point was detected before the budget ran out.
    pub converged: bool,
}

/// Associative memory holding one Hebbian-trained pattern.
///
/// # Examples
///
/// ```rust
/// use hopfield_recall::{AssociativeMemory, BipolarVector};
///
/// let pattern = BipolarVector::new(vec![1, -1, 1, 1, -1]).unwrap();
/// let mut memory = AssociativeMemory::new(5).unwrap();
/// memory.train(&pattern).unwrap();
///
/// // Corrupt one unit; one synchronous round repairs it.
/// let noisy = BipolarVector::new(vec![1, 1, 1, 1, -1]).unwrap();
/// let outcome = memory.recall_detailed(&noisy, 50).unwrap();
/// assert_eq!(outcome.state, pattern);
/// assert!(outcome.converged);
/// assert_eq!(outcome.iterations, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociativeMemory {
    weights: WeightMatrix,
    trained: bool,
}

impl AssociativeMemory {
    /// Create an untrained memory of `dimension` units with all-zero weights.
    ///
    /// # Errors
    ///
    /// [`RecallError::InvalidDimension`] when `dimension` is zero or too
    /// large for an `n × n` matrix.
    pub fn new(dimension: usize) -> Result<Self> {
        Ok(Self {
            weights: WeightMatrix::zeros(dimension)?,
            trained: false,
        })
    }

    /// Number of units `n`.
    pub fn dimension(&self) -> usize {
        self.weights.dimension()
    }

    /// Current weights.
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Whether [`train`](Self::train) has been called.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.dimension() {
            return Err(RecallError::DimensionMismatch {
                expected: self.dimension(),
                actual: len,
            });
        }
        Ok(())
    }

    /// Store `pattern`, replacing whatever was stored before.
    ///
    /// The matrix is reset and rebuilt in full; nothing accumulates across
    /// calls.
    ///
    /// # Errors
    ///
    /// [`RecallError::DimensionMismatch`] if `pattern.len() != n`.
    pub fn train(&mut self, pattern: &BipolarVector) -> Result<()> {
        self.check_len(pattern.len())?;
        self.weights.store_outer_product(pattern.as_slice());
        self.trained = true;
        debug!(dimension = self.dimension(), "trained single-pattern memory");
        Ok(())
    }

    /// Local fields `h = W s` for a state.
    ///
    /// # Errors
    ///
    /// [`RecallError::DimensionMismatch`] if `state.len() != n`.
    pub fn local_fields(&self, state: &BipolarVector) -> Result<Vec<f64>> {
        self.check_len(state.len())?;
        let s = state.as_slice();
        Ok((0..self.dimension())
            .map(|i| self.weights.field(i, s))
            .collect())
    }

    /// Run synchronous recall from `initial` and return the final state.
    ///
    /// Equivalent to `recall_detailed(initial, max_iterations)?.state`.
    pub fn recall(&self, initial: &BipolarVector, max_iterations: usize) -> Result<BipolarVector> {
        self.recall_detailed(initial, max_iterations)
            .map(|outcome| outcome.state)
    }

    /// Run synchronous recall, reporting rounds applied and convergence.
    ///
    /// Each round computes the next state from the current one; when the
    /// next state equals the current one the run stops without applying it.
    /// Exhausting `max_iterations` returns the last state with
    /// `converged == false`. A budget of zero returns `initial` unchanged.
    ///
    /// # Errors
    ///
    /// [`RecallError::DimensionMismatch`] if `initial.len() != n`.
    #[instrument(skip(self, initial), fields(n = self.dimension()))]
    pub fn recall_detailed(
        &self,
        initial: &BipolarVector,
        max_iterations: usize,
    ) -> Result<RecallOutcome> {
        self.check_len(initial.len())?;

        let mut state = initial.as_slice().to_vec();
        let mut next = vec![0i8; state.len()];

        for round in 0..max_iterations {
            self.synchronous_update(&state, &mut next);

            let changed = state.iter().zip(&next).filter(|(a, b)| a != b).count();
            trace!(round, changed, "synchronous round");

            if changed == 0 {
                debug!(iterations = round, "reached fixed point");
                return Ok(RecallOutcome {
                    state: BipolarVector::from_spins_unchecked(state),
                    iterations: round,
                    converged: true,
                });
            }
            std::mem::swap(&mut state, &mut next);
        }

        if max_iterations > 0 {
            warn!(max_iterations, "iteration budget exhausted without a fixed point");
        }
        Ok(RecallOutcome {
            state: BipolarVector::from_spins_unchecked(state),
            iterations: max_iterations,
            converged: false,
        })
    }

    /// Write the next state into `next`, reading only `state`.
    fn synchronous_update(&self, state: &[i8], next: &mut [i8]) {
        #[cfg(feature = "parallel")]
        {
            next.par_iter_mut()
                .enumerate()
                .for_each(|(i, out)| *out = self.next_spin(i, state));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, out) in next.iter_mut().enumerate() {
                *out = self.next_spin(i, state);
            }
        }
    }

    /// Sign of the local field; a zero field keeps the current spin.
    #[inline]
    fn next_spin(&self, i: usize, state: &[i8]) -> i8 {
        let h = self.weights.field(i, state);
        if h > 0.0 {
            1
        } else if h < 0.0 {
            -1
        } else {
            state[i]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(spins: &[i8]) -> BipolarVector {
        BipolarVector::new(spins.to_vec()).unwrap()
    }

    #[test]
    fn test_new() {
        let memory = AssociativeMemory::new(16).unwrap();
        assert_eq!(memory.dimension(), 16);
        assert!(!memory.is_trained());
        assert!(memory.weights().as_slice().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_new_zero_dimension() {
        assert_eq!(
            AssociativeMemory::new(0),
            Err(RecallError::InvalidDimension(0))
        );
    }

    #[test]
    fn test_train_outer_product() {
        let mut memory = AssociativeMemory::new(3).unwrap();
        memory.train(&bv(&[1, -1, 1])).unwrap();

        let w = memory.weights();
        assert_eq!(w.get(0, 0), 0.0);
        assert_eq!(w.get(0, 1), -1.0);
        assert_eq!(w.get(0, 2), 1.0);
        assert_eq!(w.get(1, 2), -1.0);
        assert!(w.is_symmetric());
        assert!(w.has_zero_diagonal());
        assert!(memory.is_trained());
    }

    #[test]
    fn test_train_replaces_previous_pattern() {
        let mut memory = AssociativeMemory::new(4).unwrap();
        memory.train(&bv(&[1, 1, 1, 1])).unwrap();
        memory.train(&bv(&[1, -1, 1, -1])).unwrap();

        let mut fresh = AssociativeMemory::new(4).unwrap();
        fresh.train(&bv(&[1, -1, 1, -1])).unwrap();
        assert_eq!(memory.weights(), fresh.weights());
    }

    #[test]
    fn test_train_dimension_mismatch() {
        let mut memory = AssociativeMemory::new(4).unwrap();
        assert_eq!(
            memory.train(&bv(&[1, 1, 1])),
            Err(RecallError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_recall_dimension_mismatch() {
        let memory = AssociativeMemory::new(4).unwrap();
        assert!(matches!(
            memory.recall(&bv(&[1, 1, 1, 1, 1]), 10),
            Err(RecallError::DimensionMismatch {
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_local_fields() {
        let mut memory = AssociativeMemory::new(3).unwrap();
        memory.train(&bv(&[1, 1, -1])).unwrap();
        // h_i = p_i * (p·s - p_i s_i)
        let h = memory.local_fields(&bv(&[1, 1, -1])).unwrap();
        assert_eq!(h, vec![2.0, 2.0, -2.0]);
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let mut memory = AssociativeMemory::new(4).unwrap();
        memory.train(&bv(&[1, 1, 1, 1])).unwrap();
        let initial = bv(&[-1, 1, 1, 1]);

        let outcome = memory.recall_detailed(&initial, 0).unwrap();
        assert_eq!(outcome.state, initial);
        assert_eq!(outcome.iterations, 0);
        assert!(!outcome.converged);
    }

    #[test]
    fn test_trained_pattern_is_fixed_point() {
        let pattern = bv(&[1, -1, -1, 1, 1, -1]);
        let mut memory = AssociativeMemory::new(6).unwrap();
        memory.train(&pattern).unwrap();

        let outcome = memory.recall_detailed(&pattern, 50).unwrap();
        assert_eq!(outcome.state, pattern);
        assert_eq!(outcome.iterations, 0);
        assert!(outcome.converged);
    }

    #[test]
    fn test_single_unit_zero_field_keeps_state() {
        let mut memory = AssociativeMemory::new(1).unwrap();
        memory.train(&bv(&[1])).unwrap();

        assert_eq!(memory.local_fields(&bv(&[-1])).unwrap(), vec![0.0]);
        assert_eq!(memory.recall(&bv(&[1]), 5).unwrap(), bv(&[1]));
        assert_eq!(memory.recall(&bv(&[-1]), 5).unwrap(), bv(&[-1]));
    }

    #[test]
    fn test_zero_field_preserves_previous_spin() {
        let mut memory = AssociativeMemory::new(3).unwrap();
        memory.train(&bv(&[1, 1, 1])).unwrap();

        // Units 0 and 2 see h = 0 and keep -1; a +1 default would give [1, -1, 1].
        let outcome = memory.recall_detailed(&bv(&[-1, 1, -1]), 10).unwrap();
        assert_eq!(outcome.state, bv(&[-1, -1, -1]));
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.converged);
    }

    #[test]
    fn test_update_is_synchronous() {
        let mut memory = AssociativeMemory::new(4).unwrap();
        memory.train(&bv(&[1, 1, 1, 1])).unwrap();

        // Computed from the old state every unit flips, so the run oscillates
        // between the two half-split states with period 2.
        let start = bv(&[1, 1, -1, -1]);
        let odd = memory.recall_detailed(&start, 5).unwrap();
        assert_eq!(odd.state, bv(&[-1, -1, 1, 1]));
        assert_eq!(odd.iterations, 5);
        assert!(!odd.converged);

        let even = memory.recall_detailed(&start, 4).unwrap();
        assert_eq!(even.state, start);
        assert!(!even.converged);
    }

    #[test]
    fn test_untrained_memory_is_inert() {
        let memory = AssociativeMemory::new(3).unwrap();
        let initial = bv(&[1, -1, 1]);
        let outcome = memory.recall_detailed(&initial, 10).unwrap();
        assert_eq!(outcome.state, initial);
        assert!(outcome.converged);
    }

    #[test]
    fn test_anti_pattern_is_fixed_point() {
        let pattern = bv(&[1, -1, 1, 1, -1, -1, 1, 1]);
        let mut memory = AssociativeMemory::new(8).unwrap();
        memory.train(&pattern).unwrap();
        assert_eq!(memory.recall(&pattern.negated(), 50).unwrap(), pattern.negated());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_weight_index_out_of_range() {
        WeightMatrix::zeros(2).unwrap().get(2, 0);
    }

    #[test]
    fn test_new_dimension_overflow() {
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(
            AssociativeMemory::new(side),
            Err(RecallError::InvalidDimension(side))
        );
        assert_eq!(
            AssociativeMemory::new(usize::MAX),
            Err(RecallError::InvalidDimension(usize::MAX))
        );
    }

    #[test]
    fn test_deserialize_rejects_short_weights() {
        let json = r#"{"weights":{"dimension":3,"values":[]},"trained":true}"#;
        let result: std::result::Result<AssociativeMemory, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("expected 9, got 0"), "error: {}", err);
    }

    #[test]
    fn test_deserialize_rejects_zero_dimension() {
        let json = r#"{"dimension":0,"values":[]}"#;
        assert!(serde_json::from_str::<WeightMatrix>(json).is_err());
    }

    #[test]
    fn test_serde_roundtrip_keeps_recall() {
        let pattern = bv(&[1, -1, 1, 1]);
        let mut memory = AssociativeMemory::new(4).unwrap();
        memory.train(&pattern).unwrap();

        let json = serde_json::to_string(&memory).unwrap();
        let restored: AssociativeMemory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, memory);
        assert_eq!(restored.recall(&bv(&[1, 1, 1, 1]), 10).unwrap(), pattern);
    }
}
