use rayon::prelude::*;
use webgraph::traits::{RandomAccessGraph, RandomAccessLabeling, SequentialLabeling};

/// Read-only access to an undirected graph with dense node identifiers.
///
/// Nodes are identified by the integers in `0..num_nodes()`. The graph is
/// expected to be symmetric: `u` is a neighbor of `v` if and only if `v` is a
/// neighbor of `u`.
pub trait Adjacency {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of neighbors of `node`.
    fn degree(&self, node: usize) -> usize;

    /// Returns the neighbors of `node`.
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize>;

    /// Returns the largest node identifier in use.
    ///
    /// Returns 0 on an empty graph.
    #[inline(always)]
    fn max_node_id(&self) -> usize {
        self.num_nodes().saturating_sub(1)
    }
}

/// Every random-access graph is an [`Adjacency`], with successors as
/// neighbors.
///
/// Visits are undirected only if the graph is symmetric.
impl<G: RandomAccessGraph> Adjacency for G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        SequentialLabeling::num_nodes(self)
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        RandomAccessLabeling::outdegree(self, node)
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> {
        RandomAccessGraph::successors(self, node).into_iter()
    }
}

/// Returns whether every arc of the graph has a matching reverse arc.
///
/// Multiplicities are taken into account. This function materializes all
/// arcs, so it is meant for debug assertions and tests.
pub fn check_symmetric(graph: &(impl Adjacency + Sync)) -> bool {
    let mut arcs: Vec<(usize, usize)> = (0..graph.num_nodes())
        .into_par_iter()
        .flat_map_iter(|node| graph.neighbors(node).map(move |succ| (node, succ)))
        .collect();
    let mut reversed: Vec<(usize, usize)> = arcs.par_iter().map(|&(u, v)| (v, u)).collect();
    arcs.par_sort_unstable();
    reversed.par_sort_unstable();
    arcs == reversed
}
