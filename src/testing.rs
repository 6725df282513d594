//! Test-only graph generators, ported from the teacher lineage's
//! `src/testing/` helpers and narrowed to what this crate's tests need.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A random sparse graph on `n` vertices and `m` edges, seeded for
/// reproducibility. Starts with a random spanning tree (so the graph is
/// connected) then scatters the remaining edges uniformly, same shape as
/// the teacher's `random_graphs::random_graph`.
pub(crate) fn random_graph(n: usize, m: usize, seed: u64) -> UnGraph<(), ()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UnGraph::new_undirected();

    for i in 0..n {
        graph.add_node(());
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s != t {
            graph.add_edge(NodeIndex::new(s), NodeIndex::new(t), ());
        }
    }

    graph
}

/// A `rows x cols` grid graph: always planar, a useful positive witness
/// for randomized testing.
pub(crate) fn grid_graph(rows: usize, cols: usize) -> UnGraph<(), ()> {
    let mut graph = UnGraph::new_undirected();
    for _ in 0..(rows * cols) {
        graph.add_node(());
    }

    for r in 0..rows {
        for c in 0..cols {
            let here = r * cols + c;
            if r + 1 < rows {
                graph.add_edge(NodeIndex::new(here), NodeIndex::new((r + 1) * cols + c), ());
            }
            if c + 1 < cols {
                graph.add_edge(NodeIndex::new(here), NodeIndex::new(r * cols + c + 1), ());
            }
        }
    }

    graph
}

/// `K_n`: planar only for `n <= 4`.
pub(crate) fn complete_graph(n: usize) -> UnGraph<(), ()> {
    let mut graph = UnGraph::new_undirected();
    for _ in 0..n {
        graph.add_node(());
    }
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
    }
    graph
}

/// `K_{a,b}`: non-planar as soon as `a >= 3 && b >= 3`.
pub(crate) fn complete_bipartite_graph(a: usize, b: usize) -> UnGraph<(), ()> {
    let mut graph = UnGraph::new_undirected();
    for _ in 0..(a + b) {
        graph.add_node(());
    }
    for i in 0..a {
        for j in 0..b {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(a + j), ());
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_graph_has_requested_vertex_count() {
        let g = random_graph(20, 30, 7);
        assert_eq!(g.node_count(), 20);
    }

    #[test]
    fn grid_graph_has_expected_edge_count() {
        let g = grid_graph(3, 4);
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.edge_count(), 3 * 3 + 2 * 4);
    }

    #[test]
    fn complete_graph_has_expected_edge_count() {
        let g = complete_graph(6);
        assert_eq!(g.edge_count(), 15);
    }

    #[test]
    fn complete_bipartite_graph_has_expected_edge_count() {
        let g = complete_bipartite_graph(3, 4);
        assert_eq!(g.edge_count(), 12);
    }
}
