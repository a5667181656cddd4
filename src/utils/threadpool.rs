use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// The number of threads of the pool running parallel visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// As many threads as rayon's default, usually the number of logical
    /// CPUs (or the value of the `RAYON_NUM_THREADS` environment variable).
    #[default]
    Default,
    /// A given number of threads.
    NumThreads(usize),
}

impl Threads {
    /// Builds a thread pool with this number of threads.
    pub fn build(self) -> Result<ThreadPool> {
        match self {
            Self::Default => ThreadPoolBuilder::new()
                .build()
                .context("Could not build default thread pool"),
            Self::NumThreads(num_threads) => ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .with_context(|| format!("Could not build thread pool with {} threads", num_threads)),
        }
    }
}

/// Builds a [`ThreadPool`](rayon::ThreadPool) with the default number of
/// threads, or with the given number of threads.
///
/// # Panics
///
/// If the pool cannot be built.
#[macro_export]
macro_rules! threads {
    () => {
        $crate::utils::Threads::Default
            .build()
            .expect("Should be able to build default thread pool")
    };
    ($num_threads:expr) => {
        $crate::utils::Threads::NumThreads($num_threads)
            .build()
            .expect("Should be able to build thread pool")
    };
}
