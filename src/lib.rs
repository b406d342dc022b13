// src/lib.rs

pub mod cli;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod types;

use anyhow::{Context, Result, bail};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::dag::PlannedVisit;
use crate::engine::{LogSink, Traversal, TraversalSummary};
use crate::graph::Graph;
use crate::types::Delay;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - graph loading (inline JSON or `--file`)
/// - validation (start node + cycles)
/// - dry-run output, or the traversal itself with a [`LogSink`]
/// - Ctrl-C and `--timeout` cancellation
///
/// Returns `None` for a dry run.
pub async fn run(args: CliArgs) -> Result<Option<TraversalSummary>> {
    let graph = load_graph(&args)?;
    let start = dag::validate(&graph)?;

    if args.dry_run {
        print_dry_run(&graph, start);
        return Ok(None);
    }

    let deadline = args
        .timeout
        .map(|secs| {
            Delay::from_secs(secs)
                .map_err(anyhow::Error::msg)
                .context("invalid --timeout")
        })
        .transpose()?;

    let cancel = CancellationToken::new();
    let mut watchers = vec![spawn_interrupt_listener(cancel.clone())];
    if let Some(deadline) = deadline {
        watchers.push(spawn_deadline(deadline, cancel.clone()));
    }

    let result = Traversal::new(&graph, LogSink)
        .with_cancellation(cancel.clone())
        .run(start)
        .await;

    // Both watchers exit on cancellation; none outlives this call.
    cancel.cancel();
    for watcher in watchers {
        if let Err(e) = watcher.await {
            debug!(error = %e, "cancellation watcher ended abnormally");
        }
    }

    let summary = result?;

    debug!(?summary, "traversal complete");
    Ok(Some(summary))
}

fn load_graph(args: &CliArgs) -> Result<Graph> {
    let graph = match (&args.file, &args.dag) {
        (Some(path), _) => graph::load_and_check(path)
            .with_context(|| format!("loading graph from {}", path.display()))?,
        (None, Some(json)) => graph::from_json_str(json)?,
        (None, None) => bail!("no graph given; pass it as JSON or with --file"),
    };
    Ok(graph)
}

/// Ctrl-C → cancel the traversal. Exits once `cancel` fires either way.
fn spawn_interrupt_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            res = tokio::signal::ctrl_c() => {
                if let Err(e) = res {
                    eprintln!("failed to listen for Ctrl+C: {e}");
                    return;
                }
                warn!("interrupted; cancelling traversal");
                cancel.cancel();
            }
        }
    })
}

fn spawn_deadline(deadline: Delay, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(deadline.as_duration()) => {
                warn!("timeout of {deadline} reached; cancelling traversal");
                cancel.cancel();
            }
        }
    })
}

/// Simple dry-run output: print the start node and the planned visits.
fn print_dry_run(graph: &Graph, start: &str) {
    let visits = dag::plan(graph, start);

    println!("dag-traveler dry-run");
    println!("  start = {start}");
    println!("  nodes = {}", graph.len());
    println!(
        "  total time = {:.3}s",
        dag::plan::total_duration(&visits).as_secs_f64()
    );
    println!();

    println!("planned visits ({}):", visits.len());
    for PlannedVisit { node, from, at } in visits.iter() {
        match from {
            Some(from) => println!("  +{:>8.3}s  {node}  (from {from})", at.as_secs_f64()),
            None => println!("  +{:>8.3}s  {node}", at.as_secs_f64()),
        }
    }

    info!("dry-run complete (no traversal)");
}
