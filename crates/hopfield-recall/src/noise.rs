//! Sign-flip noise
//!
//! Corrupts a bipolar vector by negating each component independently with a
//! fixed probability. The random source is injected so tests can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{RecallError, Result};
use crate::vector::BipolarVector;

/// Return a copy of `vector` with each spin flipped with probability `p`.
///
/// One uniform draw in `[0, 1)` is taken per element; the element flips when
/// the draw is below `p`. So `p == 0` never flips and `p == 1` always does.
///
/// # Errors
///
/// [`RecallError::InvalidProbability`] if `p` is NaN or outside `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use hopfield_recall::{noise::apply_noise, BipolarVector};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let v = BipolarVector::new(vec![1, -1, 1, 1]).unwrap();
///
/// let flipped = apply_noise(&v, 1.0, &mut rng).unwrap();
/// assert_eq!(flipped, v.negated());
/// ```
pub fn apply_noise<R: Rng + ?Sized>(
    vector: &BipolarVector,
    p: f64,
    rng: &mut R,
) -> Result<BipolarVector> {
    if !(0.0..=1.0).contains(&p) {
        return Err(RecallError::InvalidProbability(p));
    }

    let spins = vector
        .iter()
        .map(|s| if rng.gen::<f64>() < p { -s } else { s })
        .collect();
    Ok(BipolarVector::from_spins_unchecked(spins))
}

/// Noise source that owns its random generator.
#[derive(Debug, Clone)]
pub struct NoiseInjector<R = StdRng> {
    rng: R,
}

impl<R: Rng> NoiseInjector<R> {
    /// Use the given generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Corrupt `vector` with flip probability `p`. See [`apply_noise`].
    pub fn apply(&mut self, vector: &BipolarVector, p: f64) -> Result<BipolarVector> {
        apply_noise(vector, p, &mut self.rng)
    }
}

impl NoiseInjector<StdRng> {
    /// Deterministic injector: the same seed yields the same flips.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Injector seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
