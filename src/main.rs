use anyhow::{bail, Context, Result};
use dsi_progress_logger::prelude::*;
use std::io::{BufWriter, Stdout, Write};
use std::sync::Mutex;
use webgraph::prelude::BvGraph;
use webgraph_msbfs::prelude::*;

const USAGE: &str = "Usage: webgraph-msbfs <top-down|bottom-up|seq-top-down|seq-bottom-up> <basename> <source>...";

/// Prints the sources of a discovery, numbered from one.
fn print_discovery(out: &mut impl Write, discovery: Discovery<u64>) -> std::io::Result<()> {
    write!(
        out,
        "{} is found on level\t{}\tin the following BFS(s):\t",
        discovery.node, discovery.iteration
    )?;
    for i in discovery.source_indices() {
        write!(out, "{} ", i + 1)?;
    }
    writeln!(out)
}

/// Prints a discovery, keeping the first output error.
fn report(
    out: &Mutex<BufWriter<Stdout>>,
    failure: &Mutex<Option<std::io::Error>>,
    discovery: Discovery<u64>,
) {
    if let Err(e) = print_discovery(&mut *out.lock().unwrap(), discovery) {
        failure.lock().unwrap().get_or_insert(e);
    }
}

fn env_usize(name: &str) -> Result<Option<usize>> {
    std::env::var(name)
        .ok()
        .map(|value| {
            value
                .parse()
                .with_context(|| format!("Invalid value {} for {}", value, name))
        })
        .transpose()
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let operation = args.next().context(USAGE)?;
    let basename = args.next().context(USAGE)?;
    let sources = args
        .map(|arg| {
            arg.parse::<usize>()
                .with_context(|| format!("Invalid source {}", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    let threads = env_usize("MSBFS_THREADS")?.map_or(Threads::Default, Threads::NumThreads);
    let task_size = env_usize("MSBFS_TASK_SIZE")?.unwrap_or(msbfs::DEFAULT_TASK_SIZE);
    let thread_pool = threads.build()?;

    let graph = BvGraph::with_basename(&basename)
        .load()
        .with_context(|| format!("Could not load graph {}", basename))?;
    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Visiting {} from {} source(s) ({}, task size {})",
        basename,
        sources.len(),
        operation,
        task_size
    ));

    let out = Mutex::new(BufWriter::new(std::io::stdout()));
    let failure = Mutex::new(None);

    match operation.as_str() {
        "top-down" | "bottom-up" => {
            let direction = if operation == "top-down" {
                Direction::TopDown
            } else {
                Direction::BottomUp
            };
            let mut visit = ParMsBfs::<_, u64>::new(&graph, task_size);
            visit.par_run(
                &sources,
                direction,
                |discovery| report(&out, &failure, discovery),
                &thread_pool,
                &mut main_pl,
            )?;
        }
        "seq-top-down" | "seq-bottom-up" => {
            let direction = if operation == "seq-top-down" {
                Direction::TopDown
            } else {
                Direction::BottomUp
            };
            let mut visit = SeqMsBfs::<_, u64>::new(&graph);
            visit.run(
                &sources,
                direction,
                |discovery| report(&out, &failure, discovery),
                &mut main_pl,
            )?;
        }
        _ => bail!("Unknown operation {}\n{}", operation, USAGE),
    }

    if let Some(e) = failure.into_inner().unwrap() {
        return Err(e).context("Could not write discoveries");
    }
    out.into_inner()
        .unwrap()
        .flush()
        .context("Could not flush standard output")?;

    Ok(())
}
