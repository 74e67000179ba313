/*!
# Utilities

Small helpers shared by the generators:
- [`GeometricJumper`](self::geometric::GeometricJumper): skips over failed Bernoulli trials, used
  by the `G(n,p)` seed generator,
- [`Probability`]: validity check for probabilities.
*/

use num::{One, Zero};

pub mod geometric;

pub use geometric::GeometricJumper;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`).
    /// `NaN` is never a valid probability.
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.0f64.is_valid_probability());
        assert!(1.0f64.is_valid_probability());
        assert!(0.6f32.is_valid_probability());
        assert!(!(-0.1f64).is_valid_probability());
        assert!(!1.5f64.is_valid_probability());
        assert!(!f64::NAN.is_valid_probability());
    }
}
