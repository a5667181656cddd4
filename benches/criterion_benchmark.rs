use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use rand::{rngs::StdRng, Rng, SeedableRng};
use webgraph_msbfs::prelude::*;
use webgraph_msbfs::threads;

const NUM_NODES: usize = 100_000;
const NUM_EDGES: usize = 500_000;

fn random_graph() -> SymmCsrGraph {
    let mut rng = StdRng::seed_from_u64(0);
    SymmCsrGraph::from_edges(
        NUM_NODES,
        (0..NUM_EDGES).map(|_| {
            (
                rng.random_range(0..NUM_NODES),
                rng.random_range(0..NUM_NODES),
            )
        }),
    )
}

fn bench_msbfs(c: &mut Criterion) {
    let graph = random_graph();
    let thread_pool = threads![];
    let mut rng = StdRng::seed_from_u64(1);
    let sources: Vec<usize> = (0..64).map(|_| rng.random_range(0..NUM_NODES)).collect();

    let mut group = c.benchmark_group("msbfs");
    group.sample_size(10);
    group.throughput(Throughput::Elements(graph.num_arcs() as u64));

    for direction in [Direction::TopDown, Direction::BottomUp] {
        for task_size in [64, 256, 4096] {
            let mut visit = ParMsBfs::<_, u64>::new(&graph, task_size);
            group.bench_with_input(
                BenchmarkId::new(format!("par {}", direction), task_size),
                &sources,
                |b, sources| {
                    b.iter(|| {
                        visit
                            .par_run(sources, direction, |_| {}, &thread_pool, no_logging![])
                            .unwrap()
                    })
                },
            );
        }

        let mut visit = SeqMsBfs::<_, u64>::new(&graph);
        group.bench_with_input(
            BenchmarkId::new(format!("seq {}", direction), 0),
            &sources,
            |b, sources| {
                b.iter(|| {
                    visit
                        .run(sources, direction, |_| {}, no_logging![])
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_msbfs);
criterion_main!(benches);
