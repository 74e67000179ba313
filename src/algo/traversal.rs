/*!
Breadth-first traversal.

[`Bfs`] lazily yields nodes in the order they are discovered from a start node. It is the basis
of the connectivity checks used to accept or reject random seed networks.
*/

use std::collections::VecDeque;

use super::*;

/// Lazy breadth-first search iterator over an [`AdjacencyList`].
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;

        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }

    /// Continues the search from `start` if it has not been visited yet.
    /// Returns *true* if the node was newly enqueued.
    pub fn try_restart_at(&mut self, start: Node) -> bool {
        if self.visited[start as usize] {
            return false;
        }

        self.visited[start as usize] = true;
        self.queue.push_back(start);
        true
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// Exposes traversal algorithms directly as methods on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a breadth-first search starting at `start`
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        let mut graph = AdjArrayUndir::new(6);
        graph.add_edges([Edge(0, 1), Edge(0, 2), Edge(1, 3), Edge(2, 3), Edge(3, 4)].into_iter());

        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.bfs(4).collect_vec(), vec![4, 3, 1, 2, 0]);
        assert_eq!(graph.bfs(5).collect_vec(), vec![5]);
    }

    #[test]
    fn restart_into_other_component() {
        let mut graph = AdjArrayUndir::new(4);
        graph.add_edges([Edge(0, 1), Edge(2, 3)].into_iter());

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(!bfs.try_restart_at(1));
        assert!(bfs.try_restart_at(3));
        assert_eq!(bfs.collect_vec(), vec![3, 2]);
    }
}
