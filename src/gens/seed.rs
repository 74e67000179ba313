/*!
# Seed Networks

Growth models need a small, connected, edge-bearing network to start from. This module builds
such seeds in one of four topologies:

- **random**: an Erdős–Rényi `G(n,p)` graph with `p = k / (n - 1)` for a requested average
  degree `k`, regenerated until it is connected,
- **clique**: all pairs of nodes connected,
- **ring**: a cycle `0 - 1 - ... - (n-1) - 0`,
- **chain**: a path `0 - 1 - ... - (n-1)`.

# Example

```rust
use hkgraphs::{prelude::*, gens::*, algo::*};
use rand::SeedableRng;

let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(7);

let ring: AdjArrayUndir = SeedNetwork::new().seed_type(SeedType::Ring).nodes(5).build(rng).unwrap();
assert_eq!(ring.number_of_edges(), 5);

let random: AdjArrayUndir = SeedNetwork::new().nodes(20).avg_deg(4.0).build(rng).unwrap();
assert!(random.is_connected());
```
*/

use std::{fmt, str::FromStr};

use tracing::{debug, warn};

use super::*;
use crate::{algo::Connectivity, utils::Probability};

/// Default average degree of random seeds
pub const DEFAULT_SEED_AVG_DEG: f64 = 2.0;

/// Default number of random seeds generated before giving up on finding a connected one
pub const DEFAULT_MAX_SEED_ATTEMPTS: usize = 10_000;

/// Topology of a seed network
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum SeedType {
    /// Connected Erdős–Rényi graph
    #[default]
    Random,
    /// Complete graph
    Clique,
    /// Cycle
    Ring,
    /// Path
    Chain,
}

impl SeedType {
    /// All seed types in their canonical order
    pub const ALL: [SeedType; 4] = [Self::Random, Self::Clique, Self::Ring, Self::Chain];

    /// Returns the lowercase name used on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Clique => "clique",
            Self::Ring => "ring",
            Self::Chain => "chain",
        }
    }

    /// Parses a seed type and falls back to [`SeedType::Random`] with a warning if the name is
    /// not recognised.
    pub fn parse_or_random(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            warn!(%err, "unknown seed type, using an Erdős–Rényi network as seed");
            Self::Random
        })
    }

    /// Returns the number of edges of a seed of this type with `n` nodes, if it is deterministic
    pub fn number_of_edges(&self, n: NumNodes) -> Option<NumEdges> {
        let n = n as NumEdges;
        match self {
            Self::Random => None,
            Self::Clique => Some(n * n.saturating_sub(1) / 2),
            Self::Ring if n >= 3 => Some(n),
            Self::Ring | Self::Chain => Some(n.saturating_sub(1)),
        }
    }
}

impl fmt::Display for SeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|seed| seed.name() == lower)
            .ok_or_else(|| GenerationError::UnknownSeedType(s.to_owned()))
    }
}

/// Generator for seed networks.
///
/// The generator is configured with the builder pattern:
/// - `.seed_type(t)`: topology (default: random)
/// - `.nodes(n)`: number of seed nodes
/// - `.avg_deg(k)`: average degree of random seeds (default: `2.0`)
/// - `.max_attempts(a)`: how many random seeds may be rejected for being disconnected
#[derive(Debug, Copy, Clone)]
pub struct SeedNetwork {
    seed_type: SeedType,
    nodes: NumNodes,
    avg_deg: f64,
    max_attempts: usize,
}

impl Default for SeedNetwork {
    fn default() -> Self {
        Self {
            seed_type: SeedType::default(),
            nodes: 0,
            avg_deg: DEFAULT_SEED_AVG_DEG,
            max_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
        }
    }
}

impl SeedNetwork {
    /// Creates a new seed generator with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topology of the seed
    pub fn seed_type(mut self, seed_type: SeedType) -> Self {
        self.seed_type = seed_type;
        self
    }

    /// Sets the maximum number of random seeds to generate before giving up
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Checks the parameters without generating anything
    pub fn validate(&self) -> Result<(), GenerationError> {
        // nodes without edges would make degree-proportional sampling undefined
        if self.nodes < 2 {
            return Err(GenerationError::EdgelessSeed {
                seed_size: self.nodes,
            });
        }

        if self.seed_type == SeedType::Random {
            let p = Gnp::new().nodes(self.nodes).avg_deg(self.avg_deg).edge_probability();
            if !p.is_some_and(|p| p > 0.0 && p.is_valid_probability()) {
                return Err(GenerationError::InvalidAverageDegree {
                    avg_deg: self.avg_deg,
                    seed_size: self.nodes,
                });
            }
        }

        Ok(())
    }

    /// Builds a seed network with nodes `0..n`.
    ///
    /// The result is connected and has no isolated nodes. Random seeds are regenerated until
    /// they are connected, at most `max_attempts` times.
    pub fn build<G, R>(&self, rng: &mut R) -> Result<G, GenerationError>
    where
        G: GraphNew + GraphEdgeEditing + AdjacencyList,
        R: Rng,
    {
        self.validate()?;

        let n = self.nodes;
        let mut graph = G::new(n);
        match self.seed_type {
            SeedType::Clique => graph.connect_clique(0..n),
            SeedType::Ring => graph.connect_cycle(0..n),
            SeedType::Chain => graph.connect_path(0..n),
            SeedType::Random => return self.build_random(rng),
        }

        Ok(graph)
    }

    fn build_random<G, R>(&self, rng: &mut R) -> Result<G, GenerationError>
    where
        G: GraphNew + GraphEdgeEditing + AdjacencyList,
        R: Rng,
    {
        let gnp = Gnp::new().nodes(self.nodes).avg_deg(self.avg_deg);

        for attempt in 1..=self.max_attempts {
            let graph = G::from_edges(self.nodes, gnp.stream(rng));
            if graph.is_connected() {
                debug!(attempt, "found connected random seed");
                return Ok(graph);
            }

            debug!(attempt, "discarding disconnected random seed");
        }

        Err(GenerationError::DisconnectedSeed {
            attempts: self.max_attempts,
        })
    }
}

impl NumNodesGen for SeedNetwork {
    fn set_nodes(&mut self, n: NumNodes) {
        self.nodes = n;
    }
}

impl AverageDegreeGen for SeedNetwork {
    /// Only used by random seeds
    fn set_avg_deg(&mut self, deg: f64) {
        self.avg_deg = deg;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("random", SeedType::Random)]
    #[case("clique", SeedType::Clique)]
    #[case(" Ring ", SeedType::Ring)]
    #[case("CHAIN", SeedType::Chain)]
    fn parse_known_seed_types(#[case] name: &str, #[case] expected: SeedType) {
        assert_eq!(name.parse::<SeedType>(), Ok(expected));
        assert_eq!(SeedType::parse_or_random(name), expected);
    }

    #[test]
    fn unknown_seed_type_falls_back_to_random() {
        assert_eq!(
            "star".parse::<SeedType>(),
            Err(GenerationError::UnknownSeedType("star".into()))
        );
        assert_eq!(SeedType::parse_or_random("star"), SeedType::Random);
    }

    #[rstest]
    #[case(SeedType::Clique)]
    #[case(SeedType::Ring)]
    #[case(SeedType::Chain)]
    fn deterministic_seeds(#[case] seed_type: SeedType) {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in 2..12 {
            let graph: AdjArrayUndir = SeedNetwork::new()
                .seed_type(seed_type)
                .nodes(n)
                .build(rng)
                .unwrap();

            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(Some(graph.number_of_edges()), seed_type.number_of_edges(n));
            assert!(graph.is_connected());
            assert_eq!(graph.number_of_isolated_nodes(), 0);
        }
    }

    #[test]
    fn random_seeds_are_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for n in [2, 5, 30] {
            for _ in 0..20 {
                let graph: AdjArrayUndir = SeedNetwork::new()
                    .nodes(n)
                    .avg_deg(3.0_f64.min((n - 1) as f64))
                    .build(rng)
                    .unwrap();

                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_connected());
                assert_eq!(graph.number_of_isolated_nodes(), 0);
            }
        }
    }

    #[test]
    fn tiny_seeds_are_rejected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [0, 1] {
            assert_eq!(
                SeedNetwork::new()
                    .seed_type(SeedType::Clique)
                    .nodes(n)
                    .build::<AdjArrayUndir, _>(rng)
                    .unwrap_err(),
                GenerationError::EdgelessSeed { seed_size: n }
            );
        }
    }

    #[test]
    fn invalid_average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for avg_deg in [0.0, -1.0, 10.0, f64::NAN] {
            let res = SeedNetwork::new()
                .nodes(5)
                .avg_deg(avg_deg)
                .build::<AdjArrayUndir, _>(rng);
            assert!(matches!(
                res,
                Err(GenerationError::InvalidAverageDegree { seed_size: 5, .. })
            ));
        }
    }

    #[test]
    fn sparse_random_seed_gives_up() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        // with average degree 0.1 on 50 nodes, a connected graph is practically impossible
        let res = SeedNetwork::new()
            .nodes(50)
            .avg_deg(0.1)
            .max_attempts(3)
            .build::<AdjArrayUndir, _>(rng);

        assert_eq!(res.unwrap_err(), GenerationError::DisconnectedSeed { attempts: 3 });
    }
}
