use common_traits::{Atomic, AtomicUnsignedInt, IntoAtomic};
use rayon::{prelude::*, ThreadPool};
use std::sync::atomic::Ordering;
use sux::traits::Word;

/// Atomically sets in `cell` the bits of `mask`, returning the previous
/// value.
///
/// This is a compare-and-swap loop, so it is available for every word type,
/// and it returns without writing if `cell` already contains `mask`.
///
/// All accesses are relaxed: the labels written during a phase are read only
/// in later phases, and the end of a phase is a barrier.
#[inline(always)]
pub fn atomic_bitwise_or<W: Word + IntoAtomic>(cell: &W::AtomicType, mask: W) -> W
where
    W::AtomicType: AtomicUnsignedInt,
{
    let mut current = cell.load(Ordering::Relaxed);
    loop {
        let updated = current | mask;
        if updated == current {
            return current;
        }
        match cell.compare_exchange_weak(current, updated, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(previous) => return previous,
            Err(actual) => current = actual,
        }
    }
}

/// The labels of a multi-source visit.
///
/// There are two buffers playing alternately the role of the frontier and
/// of the next frontier, and a buffer containing, for each node, the sources
/// that have reached it.
pub struct Labels<W: IntoAtomic> {
    buffers: [Box<[W::AtomicType]>; 2],
    seen: Box<[W::AtomicType]>,
}

/// The view of [`Labels`] for a given iteration.
pub struct Roles<'a, W: IntoAtomic> {
    /// The sources active at each node in this iteration.
    pub frontier: &'a [W::AtomicType],
    /// The sources reaching each node in this iteration.
    pub next: &'a [W::AtomicType],
    /// The sources that have reached each node.
    pub seen: &'a [W::AtomicType],
}

impl<W: IntoAtomic> Clone for Roles<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: IntoAtomic> Copy for Roles<'_, W> {}

impl<W: Word + IntoAtomic> Labels<W>
where
    W::AtomicType: AtomicUnsignedInt,
{
    /// Creates labels for `num_nodes` nodes, all set to zero.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            buffers: [Self::zeroed(num_nodes), Self::zeroed(num_nodes)],
            seen: Self::zeroed(num_nodes),
        }
    }

    fn zeroed(num_nodes: usize) -> Box<[W::AtomicType]> {
        (0..num_nodes).map(|_| W::ZERO.to_atomic()).collect()
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.seen.len()
    }

    /// Sets all labels to zero using the given thread pool.
    pub fn reset(&mut self, thread_pool: &ThreadPool) {
        thread_pool.install(|| {
            for labels in self.buffers.iter().chain(std::iter::once(&self.seen)) {
                labels
                    .par_iter()
                    .for_each(|label| label.store(W::ZERO, Ordering::Relaxed));
            }
        });
    }

    /// Sets bit _i_ of the frontier of the first iteration and of the seen
    /// label of the _i_-th source.
    ///
    /// # Panics
    ///
    /// If there are more sources than bits, or a source is out of range.
    pub fn seed(&mut self, sources: &[usize]) {
        assert!(sources.len() <= W::BITS);
        let Roles { frontier, seen, .. } = self.roles(1);
        for (i, &source) in sources.iter().enumerate() {
            let bit = W::ONE << i;
            atomic_bitwise_or::<W>(&frontier[source], bit);
            atomic_bitwise_or::<W>(&seen[source], bit);
        }
    }

    /// Returns the roles of the buffers at the given iteration.
    ///
    /// Iterations start from one; at odd iterations the first buffer is the
    /// frontier.
    #[inline(always)]
    pub fn roles(&self, iteration: usize) -> Roles<'_, W> {
        let (frontier, next) = if iteration % 2 == 1 { (0, 1) } else { (1, 0) };
        Roles {
            frontier: &self.buffers[frontier],
            next: &self.buffers[next],
            seen: &self.seen,
        }
    }

    /// Returns the sources that have reached `node`.
    #[inline(always)]
    pub fn seen(&self, node: usize) -> W {
        self.seen[node].load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, AtomicU8};

    #[test]
    fn test_atomic_bitwise_or() {
        let cell = AtomicU8::new(0b0001);
        assert_eq!(atomic_bitwise_or::<u8>(&cell, 0b0110), 0b0001);
        assert_eq!(atomic_bitwise_or::<u8>(&cell, 0b0010), 0b0111);
        assert_eq!(cell.load(Ordering::Relaxed), 0b0111);
    }

    #[test]
    fn test_atomic_bitwise_or_contended() {
        let cell = AtomicU32::new(0);
        (0..32 * 1000).into_par_iter().for_each(|i| {
            atomic_bitwise_or::<u32>(&cell, 1 << (i % 32));
        });
        assert_eq!(cell.load(Ordering::Relaxed), u32::MAX);
    }

    #[test]
    fn test_roles_alternate() {
        let mut labels = Labels::<u16>::new(3);
        labels.seed(&[2, 0, 2]);

        let odd = labels.roles(1);
        assert_eq!(odd.frontier[2].load(Ordering::Relaxed), 0b101);
        assert_eq!(odd.frontier[0].load(Ordering::Relaxed), 0b010);
        assert_eq!(odd.next[2].load(Ordering::Relaxed), 0);

        let even = labels.roles(2);
        assert_eq!(even.next[2].load(Ordering::Relaxed), 0b101);
        assert_eq!(even.frontier[2].load(Ordering::Relaxed), 0);
        assert_eq!(labels.seen(2), 0b101);

        labels.reset(&crate::threads![2]);
        assert_eq!(labels.seen(2), 0);
        assert_eq!(labels.roles(1).frontier[0].load(Ordering::Relaxed), 0);
    }
}
