#![warn(missing_docs)]

//! # lr-planarity
//!
//! A linear-time planarity test: decides whether a finite, simple graph
//! can be drawn in the plane without crossing edges.
//!
//! Implements Brandes' left-right reformulation of the Hopcroft-Tarjan
//! algorithm: orient the graph into a palm tree while computing
//! lowpoints (phase 1), then walk the palm tree again checking that the
//! back edges can be consistently assigned to a left or right side of
//! each tree edge (phase 2). A conflict the second pass cannot resolve
//! is a Kuratowski obstruction; this crate reports only the yes/no
//! outcome, not the obstruction itself.
//!
//! Built on [`petgraph`] via the [`PlanarGraph`] trait, the same way
//! this crate's teacher lineage wraps `petgraph` behind its own graph
//! aliases.

mod component;
mod graph;
mod orientation;
mod structures;
#[cfg(test)]
mod testing;

use hashbrown::HashMap;

pub use graph::PlanarGraph;

/// Decides whether `g` is planar.
///
/// Boundary semantics:
/// - `n == 0`: planar (the empty graph embeds trivially).
/// - Directed graphs are rejected outright.
/// - `n <= 4`: planar (`K4` is the largest complete graph that still is).
/// - `n > 2 && m > 3n - 6`: non-planar, by Euler's formula, without
///   running the two-phase test at all.
/// - Otherwise: each connected component is oriented and tested in
///   turn, short-circuiting on the first non-planar one.
///
/// Malformed input — `vertex_ids` not matching `vertex_count`, or an
/// edge endpoint absent from `vertex_ids` — is folded into `false`
/// rather than panicking (see `PlanarGraph`'s documented precondition).
pub fn is_planar<G: PlanarGraph>(g: &G) -> bool {
    let n = g.vertex_count();
    if n == 0 {
        return true;
    }
    if g.is_directed() {
        return false;
    }
    if n <= 4 {
        return true;
    }

    let m = g.edge_count();
    if n > 2 && m > 3 * n - 6 {
        return false;
    }

    let ids = g.vertex_ids();
    if ids.len() != n {
        return false;
    }
    let mut dense = HashMap::with_capacity(n);
    for (i, &id) in ids.iter().enumerate() {
        dense.insert(id, i);
    }

    let endpoints = g.edge_endpoints();
    if endpoints.len() != m {
        return false;
    }
    let mut edges = Vec::with_capacity(m);
    for (u, v) in endpoints {
        let (Some(&lu), Some(&lv)) = (dense.get(&u), dense.get(&v)) else {
            return false;
        };
        edges.push((lu, lv));
    }

    component::all_components_planar(n, &edges)
}
