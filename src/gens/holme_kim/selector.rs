use rand::Rng;
use smallvec::SmallVec;
use tracing::trace;

use super::{DegreeSampler, GrowthStats};
use crate::{gens::GenerationError, prelude::*};

/// How a target was chosen
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PickKind {
    /// Degree-proportional draw
    Preferential,
    /// Uniform pick among the unused neighbors of the last preferential target
    Triangle,
    /// Degree-proportional draw after a triangle-formation attempt found no candidate
    TriangleFallback,
}

impl PickKind {
    /// Returns *true* if the pick was drawn from the degree sampler and therefore becomes the
    /// anchor of subsequent triangle-formation attempts
    pub fn is_preferential(&self) -> bool {
        matches!(self, Self::Preferential | Self::TriangleFallback)
    }
}

/// The distinct targets of a single new node, in pick order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetSet {
    picks: SmallVec<[(Node, PickKind); 8]>,
}

impl TargetSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            picks: SmallVec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, u: Node, kind: PickKind) {
        debug_assert!(!self.contains(u));
        self.picks.push((u, kind));
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Returns *true* if no target was picked
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Returns *true* if `u` was already picked
    pub fn contains(&self, u: Node) -> bool {
        self.picks.iter().any(|&(v, _)| v == u)
    }

    /// Iterates over the targets in pick order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.picks.iter().map(|&(u, _)| u)
    }

    /// Returns the targets and the way they were picked
    pub fn picks(&self) -> &[(Node, PickKind)] {
        &self.picks
    }

    /// Returns the number of targets picked in the given way
    pub fn count(&self, kind: PickKind) -> usize {
        self.picks.iter().filter(|&&(_, k)| k == kind).count()
    }
}

/// Selects the `m` distinct targets of a new node by mixing preferential attachment with
/// triangle formation.
///
/// The first target is always drawn preferentially. For every further target a coin is tossed:
/// with probability `pt` a random neighbor of the most recent preferential target is chosen,
/// closing a triangle. If that node has no unused neighbor, or if the coin says otherwise, the
/// target is drawn preferentially and becomes the new anchor for triangle formation.
///
/// Preferential draws use rejection sampling against the targets picked so far, which keeps the
/// distribution over unused nodes exactly degree-proportional.
#[derive(Debug, Clone)]
pub struct TargetSelector {
    links: usize,
    triangle_prob: f64,
    max_draws: usize,
    candidates: Vec<Node>,
}

impl TargetSelector {
    /// Creates a selector picking `links` targets with triangle-formation probability
    /// `triangle_prob`, rejecting at most `max_draws` draws per preferential pick.
    pub fn new(links: usize, triangle_prob: f64, max_draws: usize) -> Self {
        Self {
            links,
            triangle_prob,
            max_draws,
            candidates: Vec::new(),
        }
    }

    /// Number of targets per new node
    pub fn links(&self) -> usize {
        self.links
    }

    /// Selects the targets of `new_node`, which must not have been recorded in the sampler yet.
    pub fn select<G, R>(
        &mut self,
        new_node: Node,
        graph: &G,
        sampler: &DegreeSampler,
        rng: &mut R,
        stats: &mut GrowthStats,
    ) -> Result<TargetSet, GenerationError>
    where
        G: AdjacencyList,
        R: Rng,
    {
        let mut targets = TargetSet::with_capacity(self.links);
        if self.links == 0 {
            return Ok(targets);
        }

        let mut anchor = self.preferential(new_node, sampler, &targets, rng, stats)?;
        targets.push(anchor, PickKind::Preferential);

        for _ in 1..self.links {
            let toss: f64 = rng.random();
            stats.tosses += 1;

            if toss >= self.triangle_prob {
                anchor = self.preferential(new_node, sampler, &targets, rng, stats)?;
                targets.push(anchor, PickKind::Preferential);
                continue;
            }

            stats.triangle_attempts += 1;
            if let Some(v) = self.triangle(graph, anchor, &targets, rng) {
                targets.push(v, PickKind::Triangle);
                continue;
            }

            trace!(node = new_node, anchor, "no triangle candidate, falling back");
            stats.triangle_fallbacks += 1;
            anchor = self.preferential(new_node, sampler, &targets, rng, stats)?;
            targets.push(anchor, PickKind::TriangleFallback);
        }

        Ok(targets)
    }

    /// Draws from the sampler until a node not yet in `targets` appears
    fn preferential<R: Rng>(
        &self,
        new_node: Node,
        sampler: &DegreeSampler,
        targets: &TargetSet,
        rng: &mut R,
        stats: &mut GrowthStats,
    ) -> Result<Node, GenerationError> {
        for _ in 0..self.max_draws {
            let u = sampler.sample(rng).ok_or(GenerationError::EmptySampler)?;
            if !targets.contains(u) {
                return Ok(u);
            }
            stats.rejected_draws += 1;
        }

        Err(GenerationError::SamplingStalled {
            node: new_node,
            draws: self.max_draws,
        })
    }

    /// Picks a uniform neighbor of `anchor` that is not yet in `targets`
    fn triangle<G: AdjacencyList, R: Rng>(
        &mut self,
        graph: &G,
        anchor: Node,
        targets: &TargetSet,
        rng: &mut R,
    ) -> Option<Node> {
        self.candidates.clear();
        self.candidates
            .extend(graph.neighbors_of(anchor).filter(|&v| !targets.contains(v)));

        if self.candidates.is_empty() {
            return None;
        }

        Some(self.candidates[rng.random_range(0..self.candidates.len())])
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::GeneratorSubstructures;

    fn clique(n: NumNodes) -> (AdjArrayUndir, DegreeSampler) {
        let mut graph = AdjArrayUndir::new(n);
        graph.connect_clique(0..n);
        let sampler = DegreeSampler::from_seed(&graph, n);
        (graph, sampler)
    }

    #[test]
    fn targets_are_distinct() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let (graph, sampler) = clique(6);

        for pt in [0.0, 0.5, 1.0] {
            let mut selector = TargetSelector::new(6, pt, 1 << 20);
            for _ in 0..50 {
                let mut stats = GrowthStats::default();
                let targets = selector
                    .select(6, &graph, &sampler, rng, &mut stats)
                    .unwrap();

                assert_eq!(targets.len(), 6);
                assert_eq!(targets.nodes().unique().count(), 6);
                assert!(!targets.contains(6));
                assert_eq!(targets.picks()[0].1, PickKind::Preferential);
                assert_eq!(stats.tosses, 5);
            }
        }
    }

    #[test]
    fn never_forms_triangles_without_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let (graph, sampler) = clique(5);
        let mut selector = TargetSelector::new(3, 0.0, 1 << 20);

        let mut stats = GrowthStats::default();
        for _ in 0..100 {
            let targets = selector
                .select(5, &graph, &sampler, rng, &mut stats)
                .unwrap();
            assert_eq!(targets.count(PickKind::Preferential), 3);
        }

        assert_eq!(stats.tosses, 200);
        assert_eq!(stats.triangle_attempts, 0);
        assert_eq!(stats.triangle_fallbacks, 0);
    }

    #[test]
    fn triangles_close_on_last_preferential_target() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let (graph, sampler) = clique(5);
        let mut selector = TargetSelector::new(3, 1.0, 1 << 20);

        let mut stats = GrowthStats::default();
        for _ in 0..100 {
            let targets = selector
                .select(5, &graph, &sampler, rng, &mut stats)
                .unwrap();

            // in a clique every node has enough unused neighbors
            let kinds = targets.picks().iter().map(|&(_, k)| k).collect_vec();
            assert_eq!(
                kinds,
                vec![PickKind::Preferential, PickKind::Triangle, PickKind::Triangle]
            );
        }

        assert_eq!(stats.triangle_attempts, stats.tosses);
        assert_eq!(stats.triangle_fallbacks, 0);
    }

    #[test]
    fn exhausted_neighborhood_falls_back() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        // a perfect matching: the only neighbor of any preferential target is used up after one
        // triangle, so the third pick must fall back
        let graph = AdjArrayUndir::from_edges(4, [Edge(0, 1), Edge(2, 3)].into_iter());
        let sampler = DegreeSampler::from_seed(&graph, 4);
        let mut selector = TargetSelector::new(3, 1.0, 1 << 20);

        for _ in 0..50 {
            let mut stats = GrowthStats::default();
            let targets = selector
                .select(4, &graph, &sampler, rng, &mut stats)
                .unwrap();

            let picks = targets.picks();
            assert_eq!(picks[1].1, PickKind::Triangle);
            assert!(graph.has_edge(picks[0].0, picks[1].0));
            assert_eq!(picks[2].1, PickKind::TriangleFallback);
            assert_eq!(stats.triangle_attempts, 2);
            assert_eq!(stats.triangle_fallbacks, 1);
        }
    }

    #[test]
    fn stalled_sampling_is_reported() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph = AdjArrayUndir::from_edges(2, [Edge(0, 1)].into_iter());
        let sampler = DegreeSampler::from_seed(&graph, 2);

        // three distinct targets cannot exist among two nodes
        let mut selector = TargetSelector::new(3, 0.0, 100);
        let mut stats = GrowthStats::default();
        let res = selector.select(2, &graph, &sampler, rng, &mut stats);

        assert_eq!(
            res,
            Err(GenerationError::SamplingStalled {
                node: 2,
                draws: 100
            })
        );
        assert!(stats.rejected_draws >= 100);
    }

    #[test]
    fn empty_sampler_is_reported() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let graph = AdjArrayUndir::new(3);
        let sampler = DegreeSampler::new();

        let mut selector = TargetSelector::new(1, 0.0, 100);
        let res = selector.select(3, &graph, &sampler, rng, &mut GrowthStats::default());
        assert_eq!(res, Err(GenerationError::EmptySampler));
    }
}
