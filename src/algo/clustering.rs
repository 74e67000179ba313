/*!
Clustering coefficients.

The Holme-Kim model exists to tune clustering, so these metrics are the natural way to judge a
generated network. The reference values for `m = 3` are an average clustering of roughly `0.32`
for `pt = 0.6` and `0.54` for `pt = 0.9`.
*/

use fxhash::FxHashSet;

use super::*;

/// Triangle based clustering metrics for undirected simple graphs.
pub trait Clustering: AdjacencyList {
    /// Returns the number of triangles that contain `u`
    /// ** Panics if `u >= n` **
    fn triangles_at(&self, u: Node) -> u64 {
        let nbs: FxHashSet<Node> = self.neighbors_of(u).collect();

        // every triangle (u, v, w) is seen once from v and once from w
        let closed: u64 = self
            .neighbors_of(u)
            .map(|v| self.neighbors_of(v).filter(|w| nbs.contains(w)).count() as u64)
            .sum();

        closed / 2
    }

    /// Returns the local clustering coefficient of `u`, i.e. the fraction of pairs of neighbors
    /// that are adjacent. Nodes with degree below two have coefficient `0.0`.
    /// ** Panics if `u >= n` **
    fn local_clustering(&self, u: Node) -> f64 {
        let deg = self.degree_of(u) as u64;
        if deg < 2 {
            return 0.0;
        }

        let pairs = deg * (deg - 1) / 2;
        self.triangles_at(u) as f64 / pairs as f64
    }

    /// Returns the average of all local clustering coefficients (`0.0` for an empty graph)
    fn average_clustering(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.vertices_range().map(|u| self.local_clustering(u)).sum();
        sum / self.len() as f64
    }

    /// Returns the total number of triangles in the graph
    fn number_of_triangles(&self) -> u64 {
        self.vertices_range()
            .map(|u| self.triangles_at(u))
            .sum::<u64>()
            / 3
    }

    /// Returns the global clustering coefficient (transitivity):
    /// three times the number of triangles divided by the number of connected triples.
    fn transitivity(&self) -> f64 {
        let triples: u64 = self
            .degrees()
            .map(|d| {
                let d = d as u64;
                d * d.saturating_sub(1) / 2
            })
            .sum();

        if triples == 0 {
            return 0.0;
        }

        3.0 * self.number_of_triangles() as f64 / triples as f64
    }
}

impl<G: AdjacencyList> Clustering for G {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn clique_is_fully_clustered() {
        let n = 6;
        let graph = AdjArrayUndir::from_edges(
            n,
            (0..n).flat_map(|u| ((u + 1)..n).map(move |v| Edge(u, v))),
        );

        for u in 0..n {
            assert_eq!(graph.triangles_at(u), 10);
            assert_close(graph.local_clustering(u), 1.0);
        }

        assert_eq!(graph.number_of_triangles(), 20);
        assert_close(graph.average_clustering(), 1.0);
        assert_close(graph.transitivity(), 1.0);
    }

    #[test]
    fn star_has_no_triangles() {
        let graph = AdjArrayUndir::from_edges(5, (1..5).map(|v| Edge(0, v)));

        assert_eq!(graph.number_of_triangles(), 0);
        assert_close(graph.average_clustering(), 0.0);
        assert_close(graph.transitivity(), 0.0);
    }

    #[test]
    fn triangle_with_pendant() {
        // triangle 0-1-2 plus pendant edge 2-3
        let graph = AdjArrayUndir::from_edges(
            4,
            [Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(2, 3)].into_iter(),
        );

        assert_close(graph.local_clustering(0), 1.0);
        assert_close(graph.local_clustering(1), 1.0);
        assert_close(graph.local_clustering(2), 1.0 / 3.0);
        assert_close(graph.local_clustering(3), 0.0);
        assert_close(graph.average_clustering(), (1.0 + 1.0 + 1.0 / 3.0) / 4.0);

        // 1 triangle, triples: 1 + 1 + 3 + 0
        assert_close(graph.transitivity(), 3.0 / 5.0);
    }
}
