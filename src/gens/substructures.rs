/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

They are the building blocks of the deterministic seed networks (chain, ring, clique).
All methods are idempotent with respect to already present edges, so overlapping structures
never create parallel edges.

# Example

```rust
use hkgraphs::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 2, 4]);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// Two nodes form a single edge and a single node forms nothing, as self-loops and
    /// parallel edges are not supported.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.try_add_edge(prev, cur);
                prev = cur;
            }

            if prev != first {
                self.try_add_edge(prev, first);
            }
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.try_add_edge(u, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([2, 1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(1, 2));
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([1, 4]);
            assert_eq!(g.number_of_edges(), 1);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_clique([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_clique([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_clique([1, 2, 4, 2]);
            assert_eq!(g.number_of_edges(), 3);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_clique(0..6);
            assert_eq!(g.number_of_edges(), 15);
        }
    }
}
