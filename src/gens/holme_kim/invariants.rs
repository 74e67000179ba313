//! Structural invariant checks for a growing Holme-Kim network.
//!
//! The checker is run by [`Growth`](super::Growth) when invariant validation is enabled, and by
//! property tests that want to assert the health of the graph and the degree sampler after every
//! step without reimplementing the bookkeeping.

use fxhash::FxHashSet;
use thiserror::Error;

use super::{DegreeSampler, PickKind, TargetSet};
use crate::prelude::*;

/// Enumerates the invariants of the graph and degree sampler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrowthInvariant {
    /// Twice the edge count equals the sampler length; constant time.
    EdgeCount,
    /// The degree sum equals twice the edge count and the sampler length.
    DegreeSum,
    /// Every node occurs in the sampler exactly `degree` times.
    SamplerMultiplicity,
    /// The graph has the expected number of nodes.
    NodeCount,
    /// No node has degree zero.
    NoIsolatedNodes,
    /// The graph is undirected and has neither self-loops nor parallel edges.
    SimpleGraph,
}

impl GrowthInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::EdgeCount,
            Self::DegreeSum,
            Self::NodeCount,
            Self::SamplerMultiplicity,
            Self::NoIsolatedNodes,
            Self::SimpleGraph,
        ]
    }

    /// Invariants that run in constant time and are checked after every growth step.
    #[must_use]
    pub const fn per_step() -> [Self; 2] {
        [Self::EdgeCount, Self::NodeCount]
    }
}

/// Reports an invariant violation surfaced by [`InvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InvariantViolation {
    /// The sampler does not hold two entries per edge.
    #[error("{edges} edge(s) require {} sampler entries, found {sampler_len}", 2 * u64::from(*edges))]
    SamplerEdgeMismatch {
        /// Number of edges reported by the graph.
        edges: NumEdges,
        /// Number of sampler entries.
        sampler_len: usize,
    },
    /// The degree sum disagrees with the edge count.
    #[error("degree sum {degree_sum} is not twice the edge count {edges}")]
    EdgeCountMismatch {
        /// Sum over all degrees.
        degree_sum: u64,
        /// Number of edges reported by the graph.
        edges: NumEdges,
    },
    /// The degree sum disagrees with the number of sampler entries.
    #[error("degree sum {degree_sum} does not match {sampler_len} sampler entries")]
    SamplerLengthMismatch {
        /// Sum over all degrees.
        degree_sum: u64,
        /// Number of sampler entries.
        sampler_len: usize,
    },
    /// A node occurs in the sampler more or less often than its degree.
    #[error("node {node} has degree {degree} but occurs {multiplicity} time(s) in the sampler")]
    MultiplicityMismatch {
        /// Offending node.
        node: Node,
        /// Degree of the node.
        degree: NumNodes,
        /// Number of sampler entries of the node.
        multiplicity: usize,
    },
    /// The sampler references a node that does not exist.
    #[error("sampler references node {node}, but the graph has only {nodes} node(s)")]
    UnknownSamplerNode {
        /// Referenced node.
        node: Node,
        /// Number of nodes in the graph.
        nodes: NumNodes,
    },
    /// The graph does not have the expected number of nodes.
    #[error("graph has {actual} node(s), expected {expected}")]
    NodeCountMismatch {
        /// Expected number of nodes.
        expected: NumNodes,
        /// Actual number of nodes.
        actual: NumNodes,
    },
    /// A node has no incident edge.
    #[error("node {node} is isolated")]
    IsolatedNode {
        /// Isolated node.
        node: Node,
    },
    /// A node is its own neighbor.
    #[error("node {node} has a self-loop")]
    SelfLoop {
        /// Offending node.
        node: Node,
    },
    /// An edge is stored more than once.
    #[error("edge {edge} is stored more than once")]
    ParallelEdge {
        /// Duplicated edge.
        edge: Edge,
    },
    /// An edge is only stored at one of its endpoints.
    #[error("edge {edge} is missing its reverse")]
    AsymmetricEdge {
        /// One-way edge.
        edge: Edge,
    },
    /// A target set has the wrong size.
    #[error("node {node} received {actual} target(s), expected {expected}")]
    TargetCount {
        /// New node.
        node: Node,
        /// Expected number of targets.
        expected: usize,
        /// Actual number of targets.
        actual: usize,
    },
    /// A target was picked twice.
    #[error("node {node} picked target {target} more than once")]
    DuplicateTarget {
        /// New node.
        node: Node,
        /// Duplicated target.
        target: Node,
    },
    /// A node picked itself as target.
    #[error("node {node} picked itself as target")]
    SelfTarget {
        /// New node.
        node: Node,
    },
    /// A triangle-formation pick is not adjacent to the preferential target before it.
    #[error("node {node} closed a triangle via {target}, which is not adjacent to anchor {anchor:?}")]
    DetachedTriangle {
        /// New node.
        node: Node,
        /// Triangle target.
        target: Node,
        /// Last preferential target before the triangle pick, if any.
        anchor: Option<Node>,
    },
}

/// Runs structural checks against a graph and its degree sampler.
#[derive(Debug)]
pub struct InvariantChecker<'a, G> {
    graph: &'a G,
    sampler: &'a DegreeSampler,
    expected_nodes: Option<NumNodes>,
}

impl<'a, G> InvariantChecker<'a, G>
where
    G: AdjacencyList + GraphEdgeOrder,
{
    /// Creates a checker for `graph` and `sampler`
    pub fn new(graph: &'a G, sampler: &'a DegreeSampler) -> Self {
        Self {
            graph,
            sampler,
            expected_nodes: None,
        }
    }

    /// Sets the number of nodes the graph is expected to have.
    /// Without it, [`GrowthInvariant::NodeCount`] always holds.
    pub fn expect_nodes(mut self, n: NumNodes) -> Self {
        self.expected_nodes = Some(n);
        self
    }

    /// Runs all invariants, returning the first violation encountered.
    pub fn check_all(&self) -> Result<(), InvariantViolation> {
        self.check_many(GrowthInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = GrowthInvariant>,
    ) -> Result<(), InvariantViolation> {
        self.run_with_mode(invariants, EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    pub fn check(&self, invariant: GrowthInvariant) -> Result<(), InvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        let _ = self.run_with_mode(
            GrowthInvariant::all(),
            EvaluationMode::Collect(&mut violations),
        );
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = GrowthInvariant>,
        mut mode: EvaluationMode<'_>,
    ) -> Result<(), InvariantViolation> {
        for invariant in invariants {
            match invariant {
                GrowthInvariant::EdgeCount => self.check_edge_count(&mut mode)?,
                GrowthInvariant::DegreeSum => self.check_degree_sum(&mut mode)?,
                GrowthInvariant::SamplerMultiplicity => self.check_multiplicity(&mut mode)?,
                GrowthInvariant::NodeCount => self.check_node_count(&mut mode)?,
                GrowthInvariant::NoIsolatedNodes => self.check_isolated(&mut mode)?,
                GrowthInvariant::SimpleGraph => self.check_simple(&mut mode)?,
            }
        }
        Ok(())
    }

    fn check_edge_count(&self, mode: &mut EvaluationMode<'_>) -> Result<(), InvariantViolation> {
        let edges = self.graph.number_of_edges();
        let sampler_len = self.sampler.len();

        if 2 * edges as usize != sampler_len {
            mode.record(InvariantViolation::SamplerEdgeMismatch { edges, sampler_len })?;
        }

        Ok(())
    }

    fn check_degree_sum(&self, mode: &mut EvaluationMode<'_>) -> Result<(), InvariantViolation> {
        let degree_sum = self.graph.degree_sum();
        let edges = self.graph.number_of_edges();

        if degree_sum != 2 * edges as u64 {
            mode.record(InvariantViolation::EdgeCountMismatch { degree_sum, edges })?;
        }

        if degree_sum != self.sampler.len() as u64 {
            mode.record(InvariantViolation::SamplerLengthMismatch {
                degree_sum,
                sampler_len: self.sampler.len(),
            })?;
        }

        Ok(())
    }

    fn check_multiplicity(&self, mode: &mut EvaluationMode<'_>) -> Result<(), InvariantViolation> {
        let nodes = self.graph.number_of_nodes();
        let mut counts = vec![0usize; self.graph.len()];

        for &u in self.sampler.entries() {
            match counts.get_mut(u as usize) {
                Some(c) => *c += 1,
                None => mode.record(InvariantViolation::UnknownSamplerNode { node: u, nodes })?,
            }
        }

        for (u, multiplicity) in self.graph.vertices_range().zip(counts) {
            let degree = self.graph.degree_of(u);
            if degree as usize != multiplicity {
                mode.record(InvariantViolation::MultiplicityMismatch {
                    node: u,
                    degree,
                    multiplicity,
                })?;
            }
        }

        Ok(())
    }

    fn check_node_count(&self, mode: &mut EvaluationMode<'_>) -> Result<(), InvariantViolation> {
        let actual = self.graph.number_of_nodes();
        match self.expected_nodes {
            Some(expected) if expected != actual => {
                mode.record(InvariantViolation::NodeCountMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }

    fn check_isolated(&self, mode: &mut EvaluationMode<'_>) -> Result<(), InvariantViolation> {
        for node in self.graph.vertices() {
            if self.graph.degree_of(node) == 0 {
                mode.record(InvariantViolation::IsolatedNode { node })?;
            }
        }
        Ok(())
    }

    fn check_simple(&self, mode: &mut EvaluationMode<'_>) -> Result<(), InvariantViolation> {
        let mut stored = FxHashSet::default();

        for edge in self.graph.edges(false) {
            if edge.is_loop() {
                mode.record(InvariantViolation::SelfLoop { node: edge.0 })?;
            } else if !stored.insert(edge) {
                mode.record(InvariantViolation::ParallelEdge { edge })?;
            }
        }

        for &edge in &stored {
            if !stored.contains(&edge.reverse()) {
                mode.record(InvariantViolation::AsymmetricEdge { edge })?;
            }
        }

        Ok(())
    }
}

/// Checks the target set of `node` after its edges were committed to `graph`: exactly `links`
/// distinct targets, none equal to `node`, and every triangle pick adjacent to the preferential
/// target preceding it.
pub fn check_target_set<G: AdjacencyTest>(
    graph: &G,
    node: Node,
    targets: &TargetSet,
    links: usize,
) -> Result<(), InvariantViolation> {
    if targets.len() != links {
        return Err(InvariantViolation::TargetCount {
            node,
            expected: links,
            actual: targets.len(),
        });
    }

    let mut anchor = None;
    for (i, &(target, kind)) in targets.picks().iter().enumerate() {
        if target == node {
            return Err(InvariantViolation::SelfTarget { node });
        }

        if targets.nodes().take(i).any(|u| u == target) {
            return Err(InvariantViolation::DuplicateTarget { node, target });
        }

        if kind.is_preferential() {
            anchor = Some(target);
        } else if !anchor.is_some_and(|a| graph.has_edge(a, target)) {
            return Err(InvariantViolation::DetachedTriangle {
                node,
                target,
                anchor,
            });
        }
    }

    Ok(())
}

enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<InvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(&mut self, violation: InvariantViolation) -> Result<(), InvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}
