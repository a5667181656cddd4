use super::{atomic_bitwise_or, Discovery, Roles};
use crate::graphs::Adjacency;
use common_traits::{Atomic, AtomicUnsignedInt, IntoAtomic};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use sux::traits::Word;

/// The state shared by all tasks during a phase of an iteration.
pub struct Phase<'a, G, W: IntoAtomic, C> {
    /// The graph to visit.
    pub graph: &'a G,
    /// The labels, with the roles of the current iteration.
    pub roles: Roles<'a, W>,
    /// The current iteration, starting from one.
    pub iteration: usize,
    /// The mask containing a bit for each source.
    pub all_sources: W,
    /// The callback receiving discoveries.
    pub callback: &'a C,
    /// Set by every task that discovers something.
    pub found_new: &'a AtomicBool,
    /// The number of discoveries of the iteration.
    pub discoveries: &'a AtomicUsize,
}

impl<G: Adjacency, W: Word + IntoAtomic, C: Fn(Discovery<W>)> Phase<'_, G, W, C>
where
    W::AtomicType: AtomicUnsignedInt,
{
    /// Removes from `reached` the sources that have already reached `node`,
    /// stores the result as the next label of `node`, and adds it to the seen
    /// label of `node`.
    ///
    /// Returns whether `node` has been reached by some new source, in which
    /// case the callback has been invoked.
    ///
    /// Must be called only by the task owning `node`.
    #[inline(always)]
    fn discover(&self, node: usize, reached: W) -> bool {
        let seen = self.roles.seen[node].load(Ordering::Relaxed);
        let new = reached & !seen;
        self.roles.next[node].store(new, Ordering::Relaxed);
        if new == W::ZERO {
            return false;
        }
        self.roles.seen[node].store(seen | new, Ordering::Relaxed);
        (self.callback)(Discovery {
            iteration: self.iteration,
            node,
            max_node: self.graph.max_node_id(),
            sources: new,
        });
        true
    }

    #[inline(always)]
    fn record(&self, found: usize) {
        if found != 0 {
            self.found_new.store(true, Ordering::Relaxed);
            self.discoveries.fetch_add(found, Ordering::Relaxed);
        }
    }
}

/// A set of nodes processed as a single unit of parallel work.
///
/// During a phase, a task writes only the labels of the nodes it owns, with
/// the exception of [`spread`](Task::spread), which updates the next labels
/// of the neighbors of its nodes by [`atomic_bitwise_or`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    nodes: Box<[usize]>,
}

impl Task {
    /// Creates a task owning the given nodes.
    pub fn new(nodes: impl Into<Box<[usize]>>) -> Self {
        Self {
            nodes: nodes.into(),
        }
    }

    /// Returns the nodes owned by this task.
    #[inline(always)]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Sets to zero the next label of the nodes of this task.
    pub fn clear<G, W: Word + IntoAtomic, C>(&self, phase: &Phase<'_, G, W, C>)
    where
        W::AtomicType: AtomicUnsignedInt,
    {
        for &node in self.nodes.iter() {
            phase.roles.next[node].store(W::ZERO, Ordering::Relaxed);
        }
    }

    /// Top-down spread: adds the frontier label of each node of this task to
    /// the next label of its neighbors.
    ///
    /// Neighbors may belong to other tasks running concurrently, so updates
    /// are atomic.
    pub fn spread<G: Adjacency, W: Word + IntoAtomic, C>(&self, phase: &Phase<'_, G, W, C>)
    where
        W::AtomicType: AtomicUnsignedInt,
    {
        let Roles { frontier, next, .. } = phase.roles;
        for &node in self.nodes.iter() {
            let active = frontier[node].load(Ordering::Relaxed);
            if active == W::ZERO {
                continue;
            }
            for succ in phase.graph.neighbors(node) {
                atomic_bitwise_or::<W>(&next[succ], active);
            }
        }
    }

    /// Top-down processing: removes already seen sources from the next label
    /// of each node of this task, and reports the remaining ones.
    pub fn process<G: Adjacency, W: Word + IntoAtomic, C: Fn(Discovery<W>)>(
        &self,
        phase: &Phase<'_, G, W, C>,
    ) where
        W::AtomicType: AtomicUnsignedInt,
    {
        let mut found = 0;
        for &node in self.nodes.iter() {
            let reached = phase.roles.next[node].load(Ordering::Relaxed);
            if reached == W::ZERO {
                continue;
            }
            found += phase.discover(node, reached) as usize;
        }
        phase.record(found);
    }

    /// Bottom-up step: computes the next label of each node of this task as
    /// the union of the frontier labels of its neighbors, removes already
    /// seen sources, and reports the remaining ones.
    ///
    /// Nodes already reached by all sources are skipped. Only labels of nodes
    /// of this task are written, and frontier labels are not modified during
    /// this phase.
    pub fn pull_process<G: Adjacency, W: Word + IntoAtomic, C: Fn(Discovery<W>)>(
        &self,
        phase: &Phase<'_, G, W, C>,
    ) where
        W::AtomicType: AtomicUnsignedInt,
    {
        let frontier = phase.roles.frontier;
        let mut found = 0;
        for &node in self.nodes.iter() {
            let seen = phase.roles.seen[node].load(Ordering::Relaxed);
            if seen & phase.all_sources == phase.all_sources {
                continue;
            }
            let mut reached = W::ZERO;
            for succ in phase.graph.neighbors(node) {
                reached |= frontier[succ].load(Ordering::Relaxed);
            }
            if reached != W::ZERO {
                found += phase.discover(node, reached) as usize;
            }
        }
        phase.record(found);
    }
}
