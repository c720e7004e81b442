//! Bipolar state vectors
//!
//! A [`BipolarVector`] is the numeric form of a pattern: every component is
//! exactly `+1` or `-1`. Construction validates the invariant, so code that
//! receives a `BipolarVector` never re-checks it.

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};

/// Ordered sequence of `+1`/`-1` spins.
///
/// # Examples
///
/// ```rust
/// use hopfield_recall::BipolarVector;
///
/// let v = BipolarVector::new(vec![1, -1, 1]).unwrap();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.negated().as_slice(), &[-1, 1, -1]);
///
/// assert!(BipolarVector::new(vec![1, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i8>", into = "Vec<i8>")]
pub struct BipolarVector {
    spins: Vec<i8>,
}

impl BipolarVector {
    /// Build a vector, rejecting any element other than `+1` or `-1`.
    ///
    /// # Errors
    ///
    /// Returns [`RecallError::InvalidSpin`] naming the first bad element.
    pub fn new(spins: Vec<i8>) -> Result<Self> {
        if let Some((index, &value)) = spins
            .iter()
            .enumerate()
            .find(|&(_, &s)| s != 1 && s != -1)
        {
            return Err(RecallError::InvalidSpin { index, value });
        }
        Ok(Self { spins })
    }

    /// Vector of `len` copies of `+1` (`positive`) or `-1`.
    pub fn filled(len: usize, positive: bool) -> Self {
        let s = if positive { 1 } else { -1 };
        Self {
            spins: vec![s; len],
        }
    }

    /// Wrap spins already known to be bipolar.
    pub(crate) fn from_spins_unchecked(spins: Vec<i8>) -> Self {
        debug_assert!(spins.iter().all(|&s| s == 1 || s == -1));
        Self { spins }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    /// True when the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// Borrow the spins.
    pub fn as_slice(&self) -> &[i8] {
        &self.spins
    }

    /// Consume the vector, returning its spins.
    pub fn into_inner(self) -> Vec<i8> {
        self.spins
    }

    /// Element-wise sign flip.
    pub fn negated(&self) -> Self {
        Self {
            spins: self.spins.iter().map(|&s| -s).collect(),
        }
    }

    /// Iterate over the spins.
    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.spins.iter().copied()
    }
}

impl TryFrom<Vec<i8>> for BipolarVector {
    type Error = RecallError;

    fn try_from(spins: Vec<i8>) -> Result<Self> {
        Self::new(spins)
    }
}

impl From<BipolarVector> for Vec<i8> {
    fn from(v: BipolarVector) -> Self {
        v.spins
    }
}
