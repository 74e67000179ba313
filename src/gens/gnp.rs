use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible undirected edge between `n` nodes with probability
/// `p`, independently from each other. Self-loops are never generated.
///
/// This is the Erdős–Rényi model used for random seed networks.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        self.p = GnpType::Prob(prob);
        self
    }

    /// Returns the edge probability, or `None` if it is unset or not a valid probability.
    /// An average degree `d` is converted to `p = d / (n - 1)`.
    pub fn edge_probability(&self) -> Option<f64> {
        let p = match self.p {
            GnpType::NotSet => return None,
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(_) if self.n < 2 => 0.0,
            GnpType::AvgDeg(d) => d / (self.n - 1) as f64,
        };

        p.is_valid_probability().then_some(p)
    }

    /// Creates a streaming generator over random normalized `G(n,p)` edges.
    /// ** Panics if no valid probability has been set **
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> impl Iterator<Item = Edge> + use<'a, R> {
        let p = self
            .edge_probability()
            .unwrap_or_else(|| panic!("Invalid or missing probability for Gnp: {:?}", self.p));

        let n = self.n;
        let num_pairs = n * n.saturating_sub(1) / 2;

        GeometricJumper::new(p, num_pairs)
            .iter(rng)
            .map(move |x| Edge::from_u64_undir(x, n))
    }

    /// Collects the output of [`Gnp::stream`]
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        self.stream(rng).collect()
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n as u64;
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn set_avg_deg(&mut self, deg: f64) {
        self.p = GnpType::AvgDeg(deg);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [0, 1, 2, 7] {
            assert!(Gnp::new().nodes(n).prob(0.0).generate(rng).is_empty());

            let full = Gnp::new().nodes(n).prob(1.0).generate(rng);
            let n = n as usize;
            assert_eq!(full.len(), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn edges_are_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let edges = Gnp::new().nodes(40).avg_deg(6.0).generate(rng);

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert_eq!(edges.iter().unique().count(), edges.len());
    }

    #[test]
    fn average_degree_is_respected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 2000;

        let edges = Gnp::new().nodes(n).avg_deg(8.0).generate(rng);
        let avg = 2.0 * edges.len() as f64 / n as f64;
        assert!((7.5..8.5).contains(&avg), "average degree {avg}");
    }

    #[test]
    fn invalid_average_degree() {
        assert_eq!(Gnp::new().nodes(4).avg_deg(4.0).edge_probability(), None);
        assert_eq!(Gnp::new().nodes(4).avg_deg(3.0).edge_probability(), Some(1.0));
        assert_eq!(Gnp::new().nodes(4).edge_probability(), None);
    }
}
