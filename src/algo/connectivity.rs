use super::*;

/// Connectivity queries on undirected graphs.
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if every node can be reached from node `0`.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }

    /// Returns the number of connected components (singletons included)
    fn number_of_connected_components(&self) -> NumNodes {
        if self.is_empty() {
            return 0;
        }

        let mut bfs = self.bfs(0);
        let mut components = 1;
        bfs.by_ref().for_each(drop);

        for u in self.vertices_range() {
            if bfs.try_restart_at(u) {
                components += 1;
                bfs.by_ref().for_each(drop);
            }
        }

        components
    }

    /// Returns the number of nodes with degree `0`
    fn number_of_isolated_nodes(&self) -> NumNodes {
        self.len() as NumNodes - self.number_of_nodes_with_neighbors()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn path(n: NumNodes) -> AdjArrayUndir {
        AdjArrayUndir::from_edges(n, (1..n).map(|u| Edge(u - 1, u)))
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(10)]
    fn paths_are_connected(#[case] n: NumNodes) {
        let graph = path(n);
        assert!(graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 1);
        assert_eq!(graph.number_of_isolated_nodes(), if n == 1 { 1 } else { 0 });
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArrayUndir::new(0);
        assert!(graph.is_connected());
        assert_eq!(graph.number_of_connected_components(), 0);
    }

    #[test]
    fn disconnected_components() {
        let mut graph = AdjArrayUndir::new(7);
        graph.add_edges([Edge(0, 1), Edge(1, 2), Edge(3, 4), Edge(6, 4)].into_iter());

        assert!(!graph.is_connected());
        // {0,1,2}, {3,4,6}, {5}
        assert_eq!(graph.number_of_connected_components(), 3);
        assert_eq!(graph.number_of_isolated_nodes(), 1);
    }
}
