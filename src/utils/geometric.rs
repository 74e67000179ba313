use rand::Rng;
use rand_distr::{Geometric, StandardGeometric};

use crate::utils::Probability;

/// How a [`GeometricJumper`] advances.
/// The case `p = 1/2` can be sped up by using `StandardGeometric` instead of `Geometric`, and the
/// degenerate probabilities `0` and `1` need no distribution at all.
#[derive(Debug, Copy, Clone)]
enum JumpDistribution {
    /// `p = 0`: no index is ever hit
    Never,
    /// `p = 1`: every index is hit
    Always,
    /// Geometric distribution for `p = 1/2`
    OneHalf(StandardGeometric),
    /// General geometric distribution
    General(Geometric),
}

impl JumpDistribution {
    fn from_prob(prob: f64) -> Self {
        if prob <= 0.0 {
            Self::Never
        } else if prob >= 1.0 {
            Self::Always
        } else if prob == 0.5 {
            Self::OneHalf(StandardGeometric)
        } else {
            match Geometric::new(prob) {
                Ok(distr) => Self::General(distr),
                Err(_) => Self::Never,
            }
        }
    }
}

/// A geometric jumper enumerates the indices in `0..stop` that succeed in independent
/// Bernoulli trials with success probability `prob`. Instead of tossing a coin per index, it
/// jumps over the failures using a geometric distribution.
///
/// This is the workhorse of the `G(n,p)` seed generator.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    /// Success probability of each index
    prob: f64,
    /// Exclusive upper bound of the enumerated indices
    stop: u64,
}

impl GeometricJumper {
    /// Creates a new geometric jumper over `0..stop`.
    /// ** Panics if `prob` is not a valid probability **
    pub fn new(prob: f64, stop: u64) -> Self {
        assert!(prob.is_valid_probability(), "Invalid probability {prob}");

        Self { prob, stop }
    }

    /// Creates an iterator of successful indices in increasing order
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        GeometricJumperIter {
            distr: JumpDistribution::from_prob(self.prob),
            rng,
            stop: self.stop,
            cur: 0,
        }
    }
}

/// An iterator over geometric jumps starting at `0`
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    distr: JumpDistribution,
    rng: &'a mut R,
    stop: u64,
    /// Next index that has not been decided yet
    cur: u64,
}

impl<R> Iterator for GeometricJumperIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur >= self.stop {
            return None;
        }

        let skip = match self.distr {
            JumpDistribution::Never => {
                self.cur = self.stop;
                return None;
            }
            JumpDistribution::Always => 0,
            JumpDistribution::OneHalf(distr) => self.rng.sample(distr),
            JumpDistribution::General(distr) => self.rng.sample(distr),
        };

        match self.cur.checked_add(skip) {
            Some(hit) if hit < self.stop => {
                self.cur = hit + 1;
                Some(hit)
            }
            _ => {
                self.cur = self.stop;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn wrong_prob() {
        for prob in [-10.0, -0.001, 1.0001, 3.4] {
            assert!(std::panic::catch_unwind(|| GeometricJumper::new(prob, 10)).is_err());
        }
    }

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for stop in [0, 3, 10] {
            assert_eq!(
                GeometricJumper::new(1.0, stop).iter(rng).collect::<Vec<_>>(),
                (0..stop).collect::<Vec<_>>()
            );
            assert_eq!(GeometricJumper::new(0.0, stop).iter(rng).count(), 0);
        }
    }

    #[test]
    fn strictly_increasing_and_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for prob in [0.1, 0.5, 0.9] {
            let hits: Vec<u64> = GeometricJumper::new(prob, 1000).iter(rng).collect();
            assert!(hits.windows(2).all(|w| w[0] < w[1]));
            assert!(hits.iter().all(|&x| x < 1000));
        }
    }

    #[test]
    fn occurences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let stop = 100u64;
        let mut occurences = vec![0; stop as usize];
        for _ in 0..1000 {
            for x in GeometricJumper::new(0.25, stop).iter(rng) {
                occurences[x as usize] += 1;
            }
        }

        assert!(occurences.into_iter().all(|x| (150..350).contains(&x)));
    }
}
