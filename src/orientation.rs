//! Phase 1: orients an undirected component into a palm tree and
//! annotates every oriented edge with `lowpt`, `lowpt2`, and
//! `nesting_depth` (spec §4.2).

use crate::structures::NONE;

/// Per-component oriented adjacency structure. Vertex ids here are
/// already the dense `0..n` indices the driver assigned; edge ids are
/// dense `0..m` indices assigned as edges are added.
pub(crate) struct Orientation {
    pub(crate) n: usize,
    pub(crate) adj: Vec<Vec<usize>>,
    /// `(source, target)` of each oriented edge. Starts in whatever
    /// order `add_edge` saw it; [`orient`] flips the pair in place the
    /// first time an edge is claimed by the endpoint closer to the root.
    pub(crate) edges: Vec<(usize, usize)>,

    pub(crate) lowpt: Vec<usize>,
    pub(crate) lowpt2: Vec<usize>,
    pub(crate) nesting_depth: Vec<isize>,

    pub(crate) parent_edge: Vec<Option<usize>>,
    pub(crate) height: Vec<usize>,
}

impl Orientation {
    pub(crate) fn new(n: usize, m: usize) -> Self {
        Orientation {
            n,
            adj: vec![Vec::new(); n],
            edges: Vec::with_capacity(m),
            lowpt: vec![NONE; m],
            lowpt2: vec![NONE; m],
            nesting_depth: vec![0; m],
            parent_edge: vec![None; n],
            height: vec![NONE; n],
        }
    }

    /// Registers an undirected edge `(u, v)` and returns its dense id.
    /// The caller is responsible for deduplicating parallel edges and
    /// self-loops before reaching this layer (spec §1's simple-graph
    /// assumption).
    pub(crate) fn add_edge(&mut self, u: usize, v: usize) -> usize {
        let eid = self.edges.len();
        self.edges.push((u, v));
        self.adj[u].push(eid);
        self.adj[v].push(eid);
        eid
    }

    pub(crate) fn other(&self, eid: usize, u: usize) -> usize {
        let (s, t) = self.edges[eid];
        if s == u { t } else { s }
    }
}

/// Phase 1 DFS (spec §4.2). `v` must already have `height[v]` set by the
/// caller (0 for a fresh root).
///
/// Each undirected edge sits in *two* adjacency lists (`adj[u]` and
/// `adj[v]`), so the first endpoint to reach it in its scan must claim
/// it before the other endpoint's scan gets there — otherwise both the
/// parent-edge back-reference and every genuine back edge would be
/// double-counted. `lowpt[eid]` doubles as that claim marker: it starts
/// at [`NONE`] and is set as soon as an edge is first seen, whichever
/// endpoint sees it first (this generalizes the "skip the reverse of
/// `parent_edge[v]`" rule to also cover a back edge's ancestor-side
/// re-visit, which the same array scan cannot otherwise tell apart).
pub(crate) fn orient(o: &mut Orientation, v: usize) {
    let incident = o.adj[v].clone();

    for eid in incident {
        if o.lowpt[eid] != NONE {
            continue;
        }

        let w = o.other(eid, v);
        if o.edges[eid].0 != v {
            o.edges[eid] = (v, w);
        }

        o.lowpt[eid] = o.height[v];
        o.lowpt2[eid] = o.height[v];

        let is_tree = o.height[w] == NONE;
        if is_tree {
            o.parent_edge[w] = Some(eid);
            o.height[w] = o.height[v] + 1;
            orient(o, w);
        } else {
            o.lowpt[eid] = o.height[w];
        }

        o.nesting_depth[eid] = 2 * o.lowpt[eid] as isize;
        if is_tree && o.lowpt2[eid] < o.height[v] {
            o.nesting_depth[eid] += 1;
        }

        if let Some(p) = o.parent_edge[v] {
            let lo2 = is_tree.then_some(o.lowpt2[eid]);
            propagate(o, p, o.lowpt[eid], lo2);
        }
    }
}

/// Lowpoint merge rule (spec §4.2): folds a child value `lo` (plus, for
/// tree edges, a second value `lo2`) into parent edge `p`.
fn propagate(o: &mut Orientation, p: usize, lo: usize, lo2: Option<usize>) {
    let cur_lo = o.lowpt[p];
    let cur_lo2 = o.lowpt2[p];

    if lo < cur_lo {
        o.lowpt[p] = lo;
        o.lowpt2[p] = match lo2 {
            Some(lo2) => cur_lo.min(lo2),
            None => cur_lo,
        };
    } else if lo > cur_lo {
        o.lowpt2[p] = cur_lo2.min(lo);
    } else {
        o.lowpt2[p] = match lo2 {
            Some(lo2) => cur_lo2.min(lo2),
            None => cur_lo2,
        };
    }
}

/// Sorts each vertex's adjacency list by ascending `nesting_depth`
/// (spec §4.3, "before the second traversal"). Uses `radsort` since
/// `nesting_depth` is a bounded integer key, the same choice the
/// teacher lineage makes for sorting edges by an integer key in
/// `reduce.rs`.
pub(crate) fn sort_by_nesting_depth(o: &mut Orientation) {
    for adj in o.adj.iter_mut() {
        let nesting_depth = &o.nesting_depth;
        radsort::sort_by_key(adj, |&eid| nesting_depth[eid]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orient_from(n: usize, edges: &[(usize, usize)]) -> Orientation {
        let mut o = Orientation::new(n, edges.len());
        for &(u, v) in edges {
            o.add_edge(u, v);
        }
        o.height[0] = 0;
        orient(&mut o, 0);
        o
    }

    #[test]
    fn triangle_has_one_back_edge_with_lowpt_zero() {
        let o = orient_from(3, &[(0, 1), (1, 2), (2, 0)]);
        let back_edges: Vec<usize> = (0..o.edges.len())
            .filter(|&eid| o.parent_edge[o.edges[eid].1] != Some(eid))
            .collect();
        assert_eq!(back_edges.len(), 1);
        assert_eq!(o.lowpt[back_edges[0]], 0);

        for eid in 0..o.edges.len() {
            assert!(o.lowpt[eid] <= o.height[o.edges[eid].0]);
            assert!(o.lowpt2[eid] >= o.lowpt[eid]);
        }
    }

    #[test]
    fn every_undirected_edge_is_claimed_exactly_once() {
        let o = orient_from(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        for eid in 0..o.edges.len() {
            assert_ne!(o.lowpt[eid], NONE);
        }
    }

    #[test]
    fn tree_has_no_back_edges() {
        let o = orient_from(4, &[(0, 1), (1, 2), (1, 3)]);
        for eid in 0..o.edges.len() {
            let (_, t) = o.edges[eid];
            assert_eq!(o.parent_edge[t], Some(eid));
        }
    }

    #[test]
    fn nesting_depth_sort_is_ascending_after_sort() {
        let mut o = orient_from(5, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 4)]);
        sort_by_nesting_depth(&mut o);
        for adj in &o.adj {
            for pair in adj.windows(2) {
                assert!(o.nesting_depth[pair[0]] <= o.nesting_depth[pair[1]]);
            }
        }
    }
}
