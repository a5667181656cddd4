use super::Task;
use crate::graphs::Adjacency;
use rayon::prelude::*;
use sux::bits::BitVec;

/// Partitions the nodes of a graph into tasks, balancing their cost.
///
/// Nodes are sorted by descending degree (ties are broken by node
/// identifier, so the partition depends only on the graph) and then dealt
/// round-robin to `max(1, num_nodes / task_size)` tasks, so each task
/// contains at most ⌈`num_nodes` / `num_tasks`⌉ nodes, in descending-degree order.
///
/// A `task_size` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use webgraph_msbfs::algo::msbfs::partition_by_degree;
/// use webgraph_msbfs::graphs::SymmCsrGraph;
///
/// // A star with center 0 and a pendant edge 1 - 4
/// let graph = SymmCsrGraph::from_edges(5, [(0, 1), (0, 2), (0, 3), (1, 4)]);
/// let tasks = partition_by_degree(&graph, 2);
///
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks[0].nodes(), &[0, 2, 4]);
/// assert_eq!(tasks[1].nodes(), &[1, 3]);
/// ```
pub fn partition_by_degree(graph: &(impl Adjacency + Sync), task_size: usize) -> Box<[Task]> {
    let num_nodes = graph.num_nodes();
    let num_tasks = std::cmp::max(1, num_nodes / std::cmp::max(1, task_size));

    let degrees: Vec<usize> = (0..num_nodes)
        .into_par_iter()
        .map(|node| graph.degree(node))
        .collect();
    let mut order: Vec<usize> = (0..num_nodes).collect();
    order.par_sort_unstable_by(|&x, &y| degrees[y].cmp(&degrees[x]).then(x.cmp(&y)));

    let mut tasks: Vec<Vec<usize>> = (0..num_tasks)
        .map(|_| Vec::with_capacity(num_nodes.div_ceil(num_tasks)))
        .collect();
    for (i, node) in order.into_iter().enumerate() {
        tasks[i % num_tasks].push(node);
    }

    let tasks: Box<[Task]> = tasks.into_iter().map(Task::new).collect();
    debug_assert!(
        check_partition(&tasks, num_nodes),
        "tasks do not partition the nodes"
    );
    tasks
}

/// Returns whether every node in `0..num_nodes` belongs to exactly one task.
pub fn check_partition(tasks: &[Task], num_nodes: usize) -> bool {
    let mut owned = BitVec::new(num_nodes);
    for &node in tasks.iter().flat_map(|task| task.nodes()) {
        if node >= num_nodes || owned[node] {
            return false;
        }
        owned.set(node, true);
    }
    tasks.iter().map(|task| task.nodes().len()).sum::<usize>() == num_nodes
}
