use rayon::{prelude::*, ThreadPool};

/// Runs `phase` on every task in parallel using the given thread pool, and
/// returns when all tasks have completed it.
///
/// Returning from this function is a barrier: everything written by the
/// phase is visible to whatever runs next.
#[inline]
pub fn run_phase<T: Sync>(tasks: &[T], thread_pool: &ThreadPool, phase: impl Fn(&T) + Sync + Send) {
    thread_pool.install(|| tasks.par_iter().for_each(phase));
}
