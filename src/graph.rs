use petgraph::visit::EdgeRef;

/// The boundary this crate expects from a caller's graph type.
///
/// Only four queries are required: vertex count, edge count, the
/// directedness flag, and iteration over vertex ids and edge endpoints.
/// Vertex ids need not be contiguous or start at zero; [`is_planar`] maps
/// them to a dense index internally, one component at a time.
///
/// [`is_planar`]: crate::is_planar
///
/// <div class="warning">
///
/// `vertex_ids` must yield exactly `vertex_count()` distinct ids, and every
/// id returned by `edge_endpoints` must appear among them. A graph that
/// violates this is malformed input; `is_planar` treats it as non-planar
/// rather than panicking (see crate docs, Error Handling).
///
/// </div>
pub trait PlanarGraph {
    /// Number of vertices, `n`.
    fn vertex_count(&self) -> usize;
    /// Number of edges, `m`.
    fn edge_count(&self) -> usize;
    /// Whether the graph is directed. Directed graphs are rejected.
    fn is_directed(&self) -> bool;
    /// Stable integer ids of every vertex.
    fn vertex_ids(&self) -> Vec<usize>;
    /// `(source, target)` ids of every edge. For an undirected graph the
    /// order of the pair carries no meaning.
    fn edge_endpoints(&self) -> Vec<(usize, usize)>;
}

impl<N, E, Ty, Ix> PlanarGraph for petgraph::graph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        petgraph::graph::Graph::edge_count(self)
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn vertex_ids(&self) -> Vec<usize> {
        self.node_indices().map(|n| n.index()).collect()
    }

    fn edge_endpoints(&self) -> Vec<(usize, usize)> {
        self.edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }
}
