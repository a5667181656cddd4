use super::Adjacency;

/// An undirected graph in compressed sparse row form.
///
/// Every edge is stored as two arcs, one per direction (a self-loop is
/// stored once), and the neighbors of each node are sorted and free of
/// duplicates.
///
/// # Examples
///
/// ```
/// use webgraph_msbfs::graphs::{Adjacency, SymmCsrGraph};
///
/// let graph = SymmCsrGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (1, 3)]);
/// assert_eq!(graph.num_nodes(), 4);
/// assert_eq!(graph.num_arcs(), 8);
/// assert_eq!(graph.degree(1), 3);
/// assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmCsrGraph {
    /// `offsets[v]..offsets[v + 1]` is the range of the neighbors of `v`
    /// in `neighbors`.
    offsets: Box<[usize]>,
    neighbors: Box<[usize]>,
}

impl SymmCsrGraph {
    /// Builds a graph with `num_nodes` nodes from a list of undirected edges.
    ///
    /// # Panics
    ///
    /// If an endpoint is not smaller than `num_nodes`.
    pub fn from_edges(num_nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut lists = vec![Vec::new(); num_nodes];
        for (u, v) in edges {
            assert!(
                u < num_nodes && v < num_nodes,
                "edge ({}, {}) has an endpoint out of range (the graph has {} nodes)",
                u,
                v,
                num_nodes
            );
            lists[u].push(v);
            if u != v {
                lists[v].push(u);
            }
        }

        let mut offsets = Vec::with_capacity(num_nodes + 1);
        let mut neighbors = Vec::new();
        offsets.push(0);
        for mut list in lists {
            list.sort_unstable();
            list.dedup();
            neighbors.extend(list);
            offsets.push(neighbors.len());
        }

        Self {
            offsets: offsets.into_boxed_slice(),
            neighbors: neighbors.into_boxed_slice(),
        }
    }

    /// Returns the number of arcs, that is, twice the number of edges
    /// minus the number of self-loops.
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.neighbors.len()
    }
}

impl Adjacency for SymmCsrGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> {
        self.neighbors[self.offsets[node]..self.offsets[node + 1]]
            .iter()
            .copied()
    }
}
