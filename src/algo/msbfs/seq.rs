use super::*;
use crate::graphs::Adjacency;

/// A sequential multi-source breadth-first visit.
///
/// This implementation keeps its labels in plain vectors of words and scans
/// all nodes at each iteration. It generates the same discoveries, and
/// performs the same number of iterations, as [`ParMsBfs`], and it is the
/// natural choice for small graphs.
///
/// # Examples
///
/// ```
/// use webgraph_msbfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// // A star with center 0 and leaves 1, 2, 3, 4
/// let graph = SymmCsrGraph::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]);
/// let mut visit = SeqMsBfs::<_, u8>::new(&graph);
/// let mut found = vec![];
/// visit
///     .run(
///         &[1, 2],
///         Direction::BottomUp,
///         |d| found.push((d.iteration, d.node, d.sources)),
///         no_logging![],
///     )
///     .unwrap();
///
/// assert_eq!(
///     found,
///     vec![(1, 0, 0b11), (2, 1, 0b10), (2, 2, 0b01), (2, 3, 0b11), (2, 4, 0b11)]
/// );
/// ```
pub struct SeqMsBfs<'a, G: Adjacency, W = usize> {
    graph: &'a G,
    /// The frontier and next labels, alternating by iteration parity.
    buffers: [Vec<W>; 2],
    seen: Vec<W>,
}

impl<'a, G: Adjacency, W: Word> SeqMsBfs<'a, G, W> {
    /// Creates a sequential multi-source visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit, which must be symmetric.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            buffers: [vec![W::ZERO; num_nodes], vec![W::ZERO; num_nodes]],
            seen: vec![W::ZERO; num_nodes],
        }
    }

    /// Returns the sources that reached `node` in the last visit: bit _i_ is
    /// set if the _i_-th source reached `node`.
    pub fn seen(&self, node: usize) -> W {
        self.seen[node]
    }
}

impl<G: Adjacency, W: Word> Sequential<W> for SeqMsBfs<'_, G, W> {
    fn run<C: FnMut(Discovery<W>)>(
        &mut self,
        sources: &[usize],
        direction: Direction,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<usize, MsBfsError> {
        let num_nodes = self.graph.num_nodes();
        check_sources(sources, num_nodes, W::BITS)?;

        for buffer in self.buffers.iter_mut() {
            buffer.fill(W::ZERO);
        }
        self.seen.fill(W::ZERO);
        for (i, &source) in sources.iter().enumerate() {
            let bit = W::ONE << i;
            self.buffers[0][source] |= bit;
            self.seen[source] |= bit;
        }

        let all_sources = W::MAX >> (W::BITS - sources.len());
        let max_node = self.graph.max_node_id();

        pl.item_name("iteration");
        pl.expected_updates(None);
        pl.start(format!(
            "Running sequential {} MS-BFS from {} source(s)...",
            direction,
            sources.len()
        ));

        let mut iteration = 1;
        loop {
            let [first, second] = &mut self.buffers;
            let (frontier, next) = if iteration % 2 == 1 {
                (&*first, second)
            } else {
                (&*second, first)
            };
            let seen = &mut self.seen;
            next.fill(W::ZERO);

            let mut found = 0;
            match direction {
                Direction::TopDown => {
                    for node in 0..num_nodes {
                        let active = frontier[node];
                        if active == W::ZERO {
                            continue;
                        }
                        for succ in self.graph.neighbors(node) {
                            next[succ] |= active;
                        }
                    }

                    for node in 0..num_nodes {
                        if next[node] == W::ZERO {
                            continue;
                        }
                        next[node] &= !seen[node];
                        seen[node] |= next[node];
                        if next[node] != W::ZERO {
                            callback(Discovery {
                                iteration,
                                node,
                                max_node,
                                sources: next[node],
                            });
                            found += 1;
                        }
                    }
                }
                Direction::BottomUp => {
                    for node in 0..num_nodes {
                        if seen[node] & all_sources == all_sources {
                            continue;
                        }
                        let mut reached = W::ZERO;
                        for succ in self.graph.neighbors(node) {
                            reached |= frontier[succ];
                        }
                        reached &= !seen[node];
                        next[node] = reached;
                        if reached != W::ZERO {
                            seen[node] |= reached;
                            callback(Discovery {
                                iteration,
                                node,
                                max_node,
                                sources: reached,
                            });
                            found += 1;
                        }
                    }
                }
            }

            pl.info(format_args!(
                "Iteration {}: {} node(s) discovered",
                iteration, found
            ));
            pl.update();

            if found == 0 {
                break;
            }
            iteration += 1;
        }

        pl.done();
        Ok(iteration)
    }
}
