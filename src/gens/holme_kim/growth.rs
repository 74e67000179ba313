use rand::Rng;
use tracing::{info, trace, warn};

use super::*;

/// Progress of a [`Growth`] run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GrowthPhase {
    /// Graph and sampler hold the seed network, no node was added yet
    Seeded,
    /// At least one node was added, but the target size is not reached
    Growing,
    /// The graph has reached its target size
    Complete,
    /// A step failed; the run cannot be continued
    Failed,
}

/// Counters collected while growing a network
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Coin tosses deciding between preferential attachment and triangle formation.
    /// Equals `(m - 1) * (n - seed_size)` after a complete run.
    pub tosses: u64,
    /// Tosses that asked for triangle formation
    pub triangle_attempts: u64,
    /// Triangle-formation attempts that found no candidate and fell back to preferential
    /// attachment
    pub triangle_fallbacks: u64,
    /// Preferential draws rejected because the node was already a target
    pub rejected_draws: u64,
}

impl GrowthStats {
    /// Fraction of tosses that asked for triangle formation; approaches `pt` for long runs.
    /// Returns `0.0` if no toss happened.
    pub fn triangle_fraction(&self) -> f64 {
        if self.tosses == 0 {
            0.0
        } else {
            self.triangle_attempts as f64 / self.tosses as f64
        }
    }

    /// Number of triangle-formation attempts that produced a triangle
    pub fn triangles_formed(&self) -> u64 {
        self.triangle_attempts - self.triangle_fallbacks
    }
}

/// A finished Holme-Kim network together with the data collected while growing it
#[derive(Debug, Clone)]
pub struct HolmeKimNetwork<G> {
    graph: G,
    sampler: DegreeSampler,
    stats: GrowthStats,
    seed_size: NumNodes,
    seed_edges: NumEdges,
}

impl<G> HolmeKimNetwork<G> {
    /// The generated graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Consumes the network and returns the generated graph
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// The degree sampler in its final state
    pub fn sampler(&self) -> &DegreeSampler {
        &self.sampler
    }

    /// Counters collected during growth
    pub fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    /// Number of nodes of the seed network
    pub fn seed_size(&self) -> NumNodes {
        self.seed_size
    }

    /// Number of edges of the seed network
    pub fn seed_edges(&self) -> NumEdges {
        self.seed_edges
    }
}

/// Stepwise execution of the Holme-Kim growth process.
///
/// Owns graph and degree sampler for the duration of the run. Each call to [`Growth::step`]
/// appends one node, selects its targets and commits the edges; [`Growth::finish`] runs the
/// remaining steps and hands out the [`HolmeKimNetwork`].
///
/// # Example
///
/// ```rust
/// use hkgraphs::{prelude::*, gens::{*, holme_kim::*}};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(3);
/// let config = HolmeKim::new()
///     .nodes(8)
///     .links(2)
///     .triangle_prob(0.5)
///     .seed_size(4)
///     .seed_type(SeedType::Clique);
///
/// let seed: AdjArrayUndir = config.seed_network().build(rng).unwrap();
/// let mut growth = Growth::new(&config, seed, rng).unwrap();
/// assert_eq!(growth.phase(), GrowthPhase::Seeded);
///
/// let targets = growth.step().unwrap().unwrap();
/// assert_eq!(targets.len(), 2);
/// assert_eq!(growth.graph().degree_of(4), 2);
///
/// let network = growth.finish().unwrap();
/// assert_eq!(network.graph().number_of_nodes(), 8);
/// assert_eq!(network.graph().number_of_edges(), 6 + 2 * 4);
/// ```
#[derive(Debug)]
pub struct Growth<'a, G, R> {
    config: HolmeKim,
    graph: G,
    sampler: DegreeSampler,
    selector: TargetSelector,
    rng: &'a mut R,
    stats: GrowthStats,
    phase: GrowthPhase,
    failure: Option<GenerationError>,
    seed_size: NumNodes,
    seed_edges: NumEdges,
}

impl<'a, G, R> Growth<'a, G, R>
where
    G: GrowableGraph,
    R: Rng,
{
    /// Prepares growth of `seed` with the parameters of `config`.
    ///
    /// The seed must have at least one edge, at most `config`'s number of nodes and at least
    /// `links` nodes with neighbors. The seed type and size stored in `config` are ignored.
    pub fn new(config: &HolmeKim, seed: G, rng: &'a mut R) -> Result<Self, GenerationError> {
        config.validate_growth()?;

        let seed_size = seed.number_of_nodes();
        let seed_edges = seed.number_of_edges();
        if seed_size > config.nodes {
            return Err(GenerationError::SeedLargerThanNetwork {
                seed_size,
                net_size: config.nodes,
            });
        }

        if seed_edges == 0 {
            return Err(GenerationError::EdgelessSeed { seed_size });
        }

        if config.links > seed.number_of_nodes_with_neighbors() as usize {
            return Err(GenerationError::TooManyLinks {
                links: config.links,
                seed_size,
            });
        }

        let mut sampler = DegreeSampler::from_seed(&seed, seed_size);
        sampler.reserve(2 * config.links * (config.nodes - seed_size) as usize);

        let mut growth = Self {
            config: *config,
            graph: seed,
            sampler,
            selector: TargetSelector::new(config.links, config.triangle_prob, config.max_draws),
            rng,
            stats: GrowthStats::default(),
            phase: GrowthPhase::Seeded,
            failure: None,
            seed_size,
            seed_edges,
        };

        if seed_size == config.nodes {
            growth.complete()?;
        }

        Ok(growth)
    }

    /// Current phase
    pub fn phase(&self) -> GrowthPhase {
        self.phase
    }

    /// The graph in its current state
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The sampler in its current state
    pub fn sampler(&self) -> &DegreeSampler {
        &self.sampler
    }

    /// Counters collected so far
    pub fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    /// Appends the next node and connects it to its targets.
    /// Returns the committed target set, or `None` if the network is already complete.
    ///
    /// Targets are selected before the node is added, so a failed selection leaves graph and
    /// sampler untouched. Any error ends the run: later calls return the same error again.
    pub fn step(&mut self) -> Result<Option<TargetSet>, GenerationError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if self.phase == GrowthPhase::Complete {
            return Ok(None);
        }

        self.try_step().map(Some).inspect_err(|err| {
            warn!(error = %err, nodes = self.graph.number_of_nodes(), "growth failed");
            self.phase = GrowthPhase::Failed;
            self.failure = Some(err.clone());
        })
    }

    fn try_step(&mut self) -> Result<TargetSet, GenerationError> {
        let node: Node = self.graph.number_of_nodes();
        let targets = self.selector.select(
            node,
            &self.graph,
            &self.sampler,
            &mut *self.rng,
            &mut self.stats,
        )?;

        self.phase = GrowthPhase::Growing;
        self.graph.add_node();
        for target in targets.nodes() {
            self.graph.add_edge(node, target);
            self.sampler.record_edge(node, target);
        }

        trace!(node, targets = ?targets.picks(), "added node");

        if self.config.validate_invariants {
            check_target_set(&self.graph, node, &targets, self.config.links)?;
            InvariantChecker::new(&self.graph, &self.sampler)
                .expect_nodes(node + 1)
                .check_many(GrowthInvariant::per_step())?;
        }

        if self.graph.number_of_nodes() == self.config.nodes {
            self.complete()?;
        }

        Ok(targets)
    }

    /// Runs all remaining steps and returns the finished network
    pub fn finish(mut self) -> Result<HolmeKimNetwork<G>, GenerationError> {
        while self.step()?.is_some() {}

        Ok(HolmeKimNetwork {
            graph: self.graph,
            sampler: self.sampler,
            stats: self.stats,
            seed_size: self.seed_size,
            seed_edges: self.seed_edges,
        })
    }

    fn complete(&mut self) -> Result<(), GenerationError> {
        self.phase = GrowthPhase::Complete;

        if self.config.validate_invariants {
            InvariantChecker::new(&self.graph, &self.sampler)
                .expect_nodes(self.config.nodes)
                .check_all()?;
        }

        info!(
            tosses = self.stats.tosses,
            expected_tosses = self.config.tosses_after(self.seed_size),
            triangle_attempts = self.stats.triangle_attempts,
            triangle_fallbacks = self.stats.triangle_fallbacks,
            triangle_fraction = self.stats.triangle_fraction(),
            triangle_prob = self.config.triangle_prob,
            "growth complete"
        );

        Ok(())
    }
}
