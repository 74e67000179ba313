//! Errors raised while configuring or running a generator.

use thiserror::Error;

use crate::{Node, NumNodes, gens::holme_kim::InvariantViolation};

/// Errors surfaced by the seed and Holme-Kim generators.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerationError {
    /// The seed network would be larger than the final network.
    #[error("seed size {seed_size} exceeds network size {net_size}")]
    SeedLargerThanNetwork {
        /// Requested number of seed nodes.
        seed_size: NumNodes,
        /// Requested final number of nodes.
        net_size: NumNodes,
    },
    /// Every new node must bring at least one edge.
    #[error("the number of links per new node must be at least 1")]
    ZeroLinks,
    /// Not enough distinct targets exist for the first growth step.
    #[error("cannot attach {links} links per new node to a seed of only {seed_size} nodes")]
    TooManyLinks {
        /// Requested links per new node.
        links: usize,
        /// Number of seed nodes.
        seed_size: NumNodes,
    },
    /// The triangle-formation probability must lie in `[0, 1]`.
    #[error("triangle-formation probability {0} is not in [0, 1]")]
    InvalidTriangleProbability(f64),
    /// The average degree of a random seed cannot be realised.
    #[error("average degree {avg_deg} is invalid for a random seed of {seed_size} nodes")]
    InvalidAverageDegree {
        /// Requested average degree.
        avg_deg: f64,
        /// Number of seed nodes.
        seed_size: NumNodes,
    },
    /// The seed network has no edges, so degree-proportional sampling is undefined.
    #[error("seed network of {seed_size} node(s) has no edges")]
    EdgelessSeed {
        /// Number of seed nodes.
        seed_size: NumNodes,
    },
    /// No connected random seed was found within the attempt budget.
    #[error("no connected random seed found after {attempts} attempt(s)")]
    DisconnectedSeed {
        /// Number of generated and rejected seeds.
        attempts: usize,
    },
    /// A seed type string was not recognised.
    #[error("unknown seed type `{0}`; expected one of random, clique, ring, chain")]
    UnknownSeedType(String),
    /// Degree-proportional sampling was requested before any edge exists.
    #[error("degree sampler is empty")]
    EmptySampler,
    /// Rejection sampling did not find an unused target within the draw budget.
    #[error("no unused target found for node {node} after {draws} draw(s)")]
    SamplingStalled {
        /// Node whose targets were being selected.
        node: Node,
        /// Number of rejected draws.
        draws: usize,
    },
    /// The invariant pass detected an inconsistent state.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
