/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Multi-source breadth-first visits.
//!
//! A multi-source breadth-first visit (MS-BFS) runs up to `W::BITS`
//! independent breadth-first visits of an undirected graph at once. Every
//! node carries a word whose bit _i_ is set if the node has been reached by
//! the visit rooted at the _i_-th source, so each arc is scanned once per
//! level instead of once per level and source.
//!
//! The algorithm has been described by Manuel Then, Moritz Kaufmann,
//! Fernando Chirigati, Tuan-Anh Hoang-Vu, Kien Pham, Alfons Kemper,
//! Thomas Neumann, and Huy T. Vo in "[The More the Merrier: Efficient
//! Multi-Source Graph Traversal][MS-BFS paper]", _Proceedings of the VLDB
//! Endowment_, 8(4):449–460, 2014.
//!
//! Every node keeps three labels: the _frontier_ (sources active at the
//! node in the current iteration), the _next_ frontier (sources reaching the
//! node during the current iteration) and the _seen_ set (sources that
//! reached the node so far). Two buffers alternate between the frontier and
//! next roles, depending on the parity of the iteration.
//!
//! # Directions
//!
//! In a [top-down](Direction::TopDown) iteration active nodes push their
//! frontier into the next label of their neighbors; in a
//! [bottom-up](Direction::BottomUp) iteration nodes that have not yet been
//! reached by all sources pull the frontiers of their neighbors.
//!
//! # Implementations
//!
//! [`ParMsBfs`] partitions the nodes into tasks by descending degree, and
//! runs each phase of an iteration on all tasks in parallel, with a barrier
//! between phases. [`SeqMsBfs`] is a single-threaded implementation computing
//! the same discoveries.
//!
//! In both cases the callback receives a [`Discovery`] for every node that
//! gains at least one new source in an iteration. The visit stops after the
//! first iteration that discovers nothing, so the number of iterations is the
//! largest distance of a reachable node from a source plus one.
//!
//! [MS-BFS paper]: <https://doi.org/10.14778/2735496.2735507>
//!
//! # Examples
//!
//! ```
//! use webgraph_msbfs::prelude::*;
//! use webgraph_msbfs::threads;
//! use dsi_progress_logger::no_logging;
//! use std::sync::Mutex;
//!
//! // A path 0 - 1 - 2 - 3 - 4
//! let graph = SymmCsrGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
//! let mut visit = ParMsBfs::<_, u32>::new(&graph, 2);
//! let found = Mutex::new(vec![]);
//!
//! let iterations = visit
//!     .par_run(
//!         &[0, 4],
//!         Direction::TopDown,
//!         |d| found.lock().unwrap().push((d.iteration, d.node, d.sources)),
//!         &threads![],
//!         no_logging![],
//!     )
//!     .unwrap();
//!
//! let mut found = found.into_inner().unwrap();
//! found.sort();
//! assert_eq!(
//!     found,
//!     vec![
//!         (1, 1, 0b01), (1, 3, 0b10),
//!         (2, 2, 0b11),
//!         (3, 1, 0b10), (3, 3, 0b01),
//!         (4, 0, 0b10), (4, 4, 0b01),
//!     ]
//! );
//! assert_eq!(iterations, 5);
//! ```

use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;
use std::fmt::{Display, Formatter};
use sux::traits::Word;

mod error;
pub use error::*;

mod labels;
pub use labels::*;

mod partition;
pub use partition::*;

mod task;
pub use task::*;

mod phase;
pub use phase::*;

mod par;
pub use par::*;

mod seq;
pub use seq::*;

/// The default number of nodes per task.
pub const DEFAULT_TASK_SIZE: usize = 256;

/// The direction in which labels flow during an iteration.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Direction {
    /// Nodes in the frontier push their label to their neighbors.
    TopDown,
    /// Nodes not yet reached by all sources pull the labels of their
    /// neighbors in the frontier.
    BottomUp,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::TopDown => write!(f, "top-down"),
            Direction::BottomUp => write!(f, "bottom-up"),
        }
    }
}

/// Argument of the callback of a multi-source visit.
///
/// A discovery is generated once per node and iteration in which the node is
/// reached for the first time by at least one source.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Discovery<W> {
    /// The iteration, which is the distance of [`node`](Self::node) from
    /// every source in [`sources`](Self::sources).
    pub iteration: usize,
    /// The discovered node.
    pub node: usize,
    /// The largest node identifier of the graph.
    pub max_node: usize,
    /// The sources reaching [`node`](Self::node) for the first time: bit
    /// _i_ is set for the _i_-th source.
    pub sources: W,
}

impl<W: Word> Discovery<W> {
    /// Returns the indices of the sources of this discovery, in increasing
    /// order.
    pub fn source_indices(&self) -> impl Iterator<Item = usize> {
        let sources = self.sources;
        (0..W::BITS).filter(move |&i| (sources >> i) & W::ONE != W::ZERO)
    }
}

/// A sequential multi-source visit.
pub trait Sequential<W> {
    /// Visits the graph from the given sources.
    ///
    /// Returns the number of iterations, including the last one, which
    /// discovers nothing.
    ///
    /// # Arguments
    /// * `sources`: the sources; the _i_-th source is represented by bit _i_.
    ///   A node may appear more than once.
    ///
    /// * `direction`: the direction of the visit.
    ///
    /// * `callback`: the callback function, called for each [`Discovery`].
    ///
    /// * `pl`: A progress logger that implements
    ///   [`dsi_progress_logger::ProgressLog`] may be passed to the method to
    ///   log the progress of the visit. If
    ///   `Option::<dsi_progress_logger::ProgressLogger>::None` is passed,
    ///   logging code should be optimized away by the compiler.
    fn run<C: FnMut(Discovery<W>)>(
        &mut self,
        sources: &[usize],
        direction: Direction,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<usize, MsBfsError>;
}

/// A parallel multi-source visit.
///
/// The callback may be called concurrently by several threads. Within an
/// iteration there is no order among discoveries, but all discoveries of an
/// iteration are generated before those of the following one.
pub trait Parallel<W> {
    /// Visits the graph from the given sources.
    ///
    /// See [`Sequential::run`] for the meaning of arguments and return
    /// value; `thread_pool` is the pool running the parallel phases.
    fn par_run<C: Fn(Discovery<W>) + Sync>(
        &mut self,
        sources: &[usize],
        direction: Direction,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<usize, MsBfsError>;
}
