use super::*;
use crate::graphs::{check_symmetric, Adjacency};
use common_traits::{Atomic, AtomicUnsignedInt, IntoAtomic};
use nonmax::NonMaxUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Parallel multi-source breadth-first visits.
///
/// At construction the nodes are [partitioned](partition_by_degree) into
/// tasks of about `task_size` nodes. Every iteration then runs a sequence of
/// phases on all tasks in parallel, each phase completing on all tasks
/// before the next one starts:
///
/// - [`clear`](Task::clear) the next labels;
/// - in a [top-down](Direction::TopDown) visit, [`spread`](Task::spread) the
///   frontier to the next labels of neighbors, and then
///   [`process`](Task::process) the next labels;
/// - in a [bottom-up](Direction::BottomUp) visit,
///   [`pull_process`](Task::pull_process) the frontier of neighbors.
///
/// The visit terminates after the first iteration that discovers nothing.
///
/// An optional interrupt flag, usually raised by the callback, is checked
/// before every iteration: if it is set, the visit stops returning
/// [`MsBfsError::Interrupted`].
pub struct ParMsBfs<'a, G: Adjacency, W: IntoAtomic = usize> {
    graph: &'a G,
    tasks: Box<[Task]>,
    labels: Labels<W>,
    interrupt: Option<&'a AtomicBool>,
}

impl<'a, G: Adjacency + Sync, W: Word + IntoAtomic> ParMsBfs<'a, G, W>
where
    W::AtomicType: AtomicUnsignedInt,
{
    /// Creates a parallel multi-source visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit, which must be symmetric.
    /// * `task_size`: the target number of nodes per task. Small tasks
    ///   balance better the load among threads, but increase the overhead of
    ///   each phase.
    pub fn new(graph: &'a G, task_size: usize) -> Self {
        debug_assert!(check_symmetric(graph), "the graph should be symmetric");
        Self {
            graph,
            tasks: partition_by_degree(graph, task_size),
            labels: Labels::new(graph.num_nodes()),
            interrupt: None,
        }
    }

    /// Sets a flag that stops the visit when raised.
    ///
    /// The flag is checked before each iteration, so the iteration in
    /// progress when the flag is raised is always completed.
    pub fn with_interrupt(mut self, interrupt: &'a AtomicBool) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Returns the tasks of this visit.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the sources that reached `node` in the last visit: bit _i_ is
    /// set if the _i_-th source reached `node`.
    pub fn seen(&self, node: usize) -> W {
        self.labels.seen(node)
    }

    /// Computes the distances from the given sources.
    ///
    /// Returns, for each source, the slice of the distances of all nodes
    /// from the source, `None` denoting unreachable nodes.
    ///
    /// See [`Parallel::par_run`] for the meaning of arguments.
    pub fn distances(
        &mut self,
        sources: &[usize],
        direction: Direction,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[Box<[Option<NonMaxUsize>]>]>, MsBfsError> {
        let num_nodes = self.graph.num_nodes();
        let distances: Vec<Box<[AtomicUsize]>> = sources
            .iter()
            .map(|_| (0..num_nodes).map(|_| AtomicUsize::new(usize::MAX)).collect())
            .collect();

        self.par_run(
            sources,
            direction,
            |discovery: Discovery<W>| {
                for i in discovery.source_indices() {
                    distances[i][discovery.node].store(discovery.iteration, Ordering::Relaxed);
                }
            },
            thread_pool,
            pl,
        )?;

        for (i, &source) in sources.iter().enumerate() {
            distances[i][source].store(0, Ordering::Relaxed);
        }

        Ok(distances
            .into_iter()
            .map(|row| {
                row.into_vec()
                    .into_iter()
                    .map(|distance| NonMaxUsize::new(distance.into_inner()))
                    .collect()
            })
            .collect())
    }
}

impl<G: Adjacency + Sync, W: Word + IntoAtomic> Parallel<W> for ParMsBfs<'_, G, W>
where
    W::AtomicType: AtomicUnsignedInt,
{
    fn par_run<C: Fn(Discovery<W>) + Sync>(
        &mut self,
        sources: &[usize],
        direction: Direction,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<usize, MsBfsError> {
        check_sources(sources, self.labels.num_nodes(), W::BITS)?;

        self.labels.reset(thread_pool);
        self.labels.seed(sources);

        let all_sources = W::MAX >> (W::BITS - sources.len());
        let found_new = AtomicBool::new(false);
        let discoveries = AtomicUsize::new(0);

        pl.item_name("iteration");
        pl.expected_updates(None);
        pl.start(format!(
            "Running {} MS-BFS from {} source(s) using {} task(s)...",
            direction,
            sources.len(),
            self.tasks.len()
        ));

        let tasks: &[Task] = &self.tasks;
        let mut iteration = 1;
        loop {
            if self
                .interrupt
                .is_some_and(|interrupt| interrupt.load(Ordering::Relaxed))
            {
                pl.info(format_args!("Interrupted after {} iteration(s)", iteration - 1));
                pl.done();
                return Err(MsBfsError::Interrupted {
                    iteration: iteration - 1,
                });
            }

            found_new.store(false, Ordering::Relaxed);
            discoveries.store(0, Ordering::Relaxed);

            let phase = Phase {
                graph: self.graph,
                roles: self.labels.roles(iteration),
                iteration,
                all_sources,
                callback: &callback,
                found_new: &found_new,
                discoveries: &discoveries,
            };

            run_phase(tasks, thread_pool, |task| task.clear(&phase));
            debug_assert!(phase
                .roles
                .next
                .iter()
                .all(|label| label.load(Ordering::Relaxed) == W::ZERO));

            match direction {
                Direction::TopDown => {
                    run_phase(tasks, thread_pool, |task| task.spread(&phase));
                    run_phase(tasks, thread_pool, |task| task.process(&phase));
                }
                Direction::BottomUp => {
                    run_phase(tasks, thread_pool, |task| task.pull_process(&phase));
                }
            }

            pl.info(format_args!(
                "Iteration {}: {} node(s) discovered",
                iteration,
                discoveries.load(Ordering::Relaxed)
            ));
            pl.update();

            if !found_new.load(Ordering::Relaxed) {
                break;
            }
            iteration += 1;
        }

        pl.done();
        Ok(iteration)
    }
}

/// Runs a parallel top-down visit of `graph` from `sources`, using
/// [`DEFAULT_TASK_SIZE`].
///
/// See [`Parallel::par_run`] for the meaning of arguments and return value.
pub fn top_down<G: Adjacency + Sync, W: Word + IntoAtomic, C: Fn(Discovery<W>) + Sync>(
    graph: &G,
    sources: &[usize],
    callback: C,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<usize, MsBfsError>
where
    W::AtomicType: AtomicUnsignedInt,
{
    ParMsBfs::<G, W>::new(graph, DEFAULT_TASK_SIZE).par_run(
        sources,
        Direction::TopDown,
        callback,
        thread_pool,
        pl,
    )
}

/// Runs a parallel bottom-up visit of `graph` from `sources`, using
/// [`DEFAULT_TASK_SIZE`].
///
/// See [`Parallel::par_run`] for the meaning of arguments and return value.
pub fn bottom_up<G: Adjacency + Sync, W: Word + IntoAtomic, C: Fn(Discovery<W>) + Sync>(
    graph: &G,
    sources: &[usize],
    callback: C,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<usize, MsBfsError>
where
    W::AtomicType: AtomicUnsignedInt,
{
    ParMsBfs::<G, W>::new(graph, DEFAULT_TASK_SIZE).par_run(
        sources,
        Direction::BottomUp,
        callback,
        thread_pool,
        pl,
    )
}
