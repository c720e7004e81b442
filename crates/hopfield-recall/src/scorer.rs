//! Agreement between bipolar vectors

use crate::error::{RecallError, Result};
use crate::vector::BipolarVector;

fn check_same_len(a: &BipolarVector, b: &BipolarVector) -> Result<()> {
    if a.len() != b.len() {
        return Err(RecallError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Number of positions where `a` and `b` differ.
///
/// # Errors
///
/// [`RecallError::DimensionMismatch`] if the lengths differ.
pub fn hamming_distance(a: &BipolarVector, b: &BipolarVector) -> Result<usize> {
    check_same_len(a, b)?;
    Ok(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Fraction of positions where `a` and `b` agree, in `[0, 1]`.
///
/// Two empty vectors agree vacuously (`1.0`).
///
/// # Errors
///
/// [`RecallError::DimensionMismatch`] if the lengths differ.
///
/// # Examples
///
/// ```rust
/// use hopfield_recall::{scorer::agreement, BipolarVector};
///
/// let a = BipolarVector::new(vec![1, 1, -1, -1]).unwrap();
/// let b = BipolarVector::new(vec![1, -1, -1, -1]).unwrap();
/// assert_eq!(agreement(&a, &b).unwrap(), 0.75);
/// ```
pub fn agreement(a: &BipolarVector, b: &BipolarVector) -> Result<f64> {
    let distance = hamming_distance(a, b)?;
    if a.is_empty() {
        return Ok(1.0);
    }
    Ok((a.len() - distance) as f64 / a.len() as f64)
}
