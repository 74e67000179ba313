use super::*;

/// An undirected simple graph representation that supports appending nodes.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Creates an empty graph with `n` singleton nodes and room for `capacity` nodes in total
    pub fn with_capacity(n: NumNodes, capacity: NumNodes) -> Self {
        let mut nbs = Vec::with_capacity(capacity.max(n) as usize);
        nbs.resize_with(n as usize, Nbs::default);
        Self { nbs, num_edges: 0 }
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // scan the smaller neighborhood
        if self.degree_of(u) <= self.degree_of(v) {
            self.nbs[u as usize].has_neighbor(v)
        } else {
            self.nbs[v as usize].has_neighbor(u)
        }
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self::with_capacity(n, n)
    }
}

impl<Nbs: Neighborhood> GraphNodeEditing for UndirectedGraph<Nbs> {
    fn add_node(&mut self) -> Node {
        let u = self.number_of_nodes();
        assert!(u < INVALID_NODE, "Node limit reached");
        self.nbs.push(Nbs::default());
        u
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(u != v, "Self-loops are not supported: ({u},{v})");
        assert!(
            (v as usize) < self.nbs.len(),
            "Node {v} is out of bounds for a graph with {} nodes",
            self.nbs.len()
        );

        if self.nbs[u as usize].try_add_neighbor(v) {
            return true;
        }

        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
        false
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn check_random_edges<G>()
    where
        G: GraphNew + GraphEdgeEditing + AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5] {
                let mut graph = G::new(n);
                let mut adj_matrix = vec![vec![false; n as usize]; n as usize];
                let mut m = 0;

                for _ in 0..m_ub {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    if u == v {
                        continue;
                    }

                    let existed = adj_matrix[u as usize][v as usize];
                    assert_eq!(graph.try_add_edge(u, v), existed);

                    if !existed {
                        adj_matrix[u as usize][v as usize] = true;
                        adj_matrix[v as usize][u as usize] = true;
                        m += 1;
                    }
                }

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), m);
                assert_eq!(graph.degree_sum(), 2 * m as u64);
                assert_eq!(graph.edges(true).count(), m as usize);

                for u in 0..n {
                    let expected = (0..n).filter(|&v| adj_matrix[u as usize][v as usize]);
                    assert_eq!(
                        graph.neighbors_of(u).sorted().collect_vec(),
                        expected.collect_vec()
                    );

                    for v in 0..n {
                        assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize][v as usize]);
                    }
                }
            }
        }
    }

    #[test]
    fn adj_array_edges() {
        check_random_edges::<AdjArrayUndir>();
    }

    #[test]
    fn sparse_adj_array_edges() {
        check_random_edges::<SparseAdjArrayUndir>();
    }

    #[test]
    fn graph_new() {
        for n in 0..50 {
            let graph = AdjArrayUndir::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn add_nodes_appends() {
        let mut graph = AdjArrayUndir::new(2);
        graph.add_edge(0, 1);

        assert_eq!(graph.add_node(), 2);
        assert_eq!(graph.add_node(), 3);
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.degree_of(3), 0);

        graph.add_edge(3, 0);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 3]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn insertion_is_idempotent() {
        let mut graph = AdjArrayUndir::new(3);
        assert!(!graph.try_add_edge(0, 2));
        assert!(graph.try_add_edge(2, 0));
        assert!(graph.try_add_edge(0, 2));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0]);
    }

    #[test]
    #[should_panic]
    fn self_loops_are_rejected() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(1, 1);
    }
}
