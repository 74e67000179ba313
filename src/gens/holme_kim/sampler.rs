use std::iter;

use rand::Rng;

use crate::prelude::*;

/// Degree-proportional multiset of nodes.
///
/// Every node occurs once per incident edge-endpoint, i.e. `degree(u)` times. Drawing a uniform
/// entry therefore selects `u` with probability `degree(u) / (2|E|)` in `O(1)`, and keeping the
/// distribution current only requires appending both endpoints of every new edge.
///
/// The sampler is append-only: entries are never removed or reordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeSampler {
    entries: Vec<Node>,
}

impl DegreeSampler {
    /// Creates an empty sampler
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sampler with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Creates a sampler containing `degree(u)` copies of every node `u < seed_size`,
    /// in increasing order of `u`.
    /// ** Panics if `seed_size > graph.number_of_nodes()` **
    pub fn from_seed<G: AdjacencyList>(graph: &G, seed_size: NumNodes) -> Self {
        let mut sampler = Self::with_capacity(graph.degree_sum() as usize);
        for u in 0..seed_size {
            sampler
                .entries
                .extend(iter::repeat_n(u, graph.degree_of(u) as usize));
        }
        sampler
    }

    /// Reserves room for at least `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Draws a node with probability proportional to its number of entries.
    /// Returns `None` if the sampler is empty.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<Node> {
        if self.entries.is_empty() {
            return None;
        }

        Some(self.entries[rng.random_range(0..self.entries.len())])
    }

    /// Records the edge `(u, v)` by appending `u` and then `v`.
    /// Must be called exactly once per edge committed to the graph.
    pub fn record_edge(&mut self, u: Node, v: Node) {
        self.entries.push(u);
        self.entries.push(v);
    }

    /// Returns the number of entries, i.e. twice the number of recorded edges
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if no entries exist
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries in insertion order
    pub fn entries(&self) -> &[Node] {
        &self.entries
    }

    /// Returns how often `u` occurs in the sampler
    pub fn multiplicity(&self, u: Node) -> usize {
        self.entries.iter().filter(|&&x| x == u).count()
    }
}
