// src/engine/traversal.rs

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, join_all};
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::errors::{Result, TravelerError};
use crate::graph::Graph;
use crate::types::Delay;

use super::{TraversalEvent, TraversalSummary, VisitSink};

/// Stand-in deadline for path delays too large to add to an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// One traversal of a graph, reporting to a [`VisitSink`].
///
/// The graph must already have passed [`crate::dag::validate`]. Cycles are
/// not re-checked here and would recurse forever. Edges pointing at unknown
/// nodes cannot survive `Graph::try_from`; if one shows up anyway the target
/// is treated as a leaf.
///
/// All per-edge work is a future in a single tree joined with `join_all`;
/// nothing is spawned, so no task outlives the traversal.
pub struct Traversal<'g, S> {
    graph: &'g Graph,
    sink: S,
    cancel: CancellationToken,
}

impl<'g, S: VisitSink> Traversal<'g, S> {
    pub fn new(graph: &'g Graph, sink: S) -> Self {
        Self {
            graph,
            sink,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort when `token` is cancelled.
    ///
    /// Pending waits end immediately, no further `Visited` events are emitted,
    /// no `Done` is emitted and [`run`](Self::run) returns
    /// [`TravelerError::Cancelled`].
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Visit everything reachable from `start`.
    pub async fn run(&self, start: &str) -> Result<TraversalSummary> {
        if self.cancel.is_cancelled() {
            return Err(TravelerError::Cancelled);
        }

        let origin = Instant::now();
        debug!(start, nodes = self.graph.len(), "starting traversal");

        self.emit_visit(start, None, Duration::ZERO, origin);
        let visits = 1 + self.fan_out(start, Duration::ZERO, origin).await?;

        let elapsed = origin.elapsed();
        self.sink.notify(TraversalEvent::Done { visits, elapsed });

        Ok(TraversalSummary { visits, elapsed })
    }

    /// Follow every edge of `node` concurrently and wait for all of them.
    ///
    /// Edges are joined shortest wait first: timers due within the same
    /// timer tick wake together and are then polled in this order.
    ///
    /// Resolves to the number of visits made in the subtree below `node`.
    fn fan_out<'a>(
        &'a self,
        node: &'a str,
        path_delay: Duration,
        origin: Instant,
    ) -> BoxFuture<'a, Result<usize>> {
        async move {
            let mut edges: Vec<_> = self.graph.edges_of(node).collect();
            edges.sort_by(|(_, a), (_, b)| a.as_secs_f64().total_cmp(&b.as_secs_f64()));

            let children = edges
                .into_iter()
                .map(move |(next, wait)| self.follow_edge(node, next, wait, path_delay, origin));

            join_all(children).await.into_iter().sum()
        }
        .boxed()
    }

    fn follow_edge<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
        wait: Delay,
        path_delay: Duration,
        origin: Instant,
    ) -> BoxFuture<'a, Result<usize>> {
        async move {
            trace!(from, to, %wait, "waiting before visit");

            // Absolute deadline: origin plus the whole path delay.
            let path_delay = path_delay.saturating_add(wait.as_duration());
            let deadline = origin
                .checked_add(path_delay)
                .unwrap_or_else(|| Instant::now() + FAR_FUTURE);

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!(from, to, "traversal cancelled during wait");
                    return Err(TravelerError::Cancelled);
                }
                _ = sleep_until(deadline) => {}
            }

            self.emit_visit(to, Some(from), path_delay, origin);

            let below = self.fan_out(to, path_delay, origin).await?;
            Ok(1 + below)
        }
        .boxed()
    }

    fn emit_visit(&self, node: &str, from: Option<&str>, path_delay: Duration, origin: Instant) {
        self.sink.notify(TraversalEvent::Visited {
            node: node.to_string(),
            from: from.map(str::to_string),
            path_delay,
            elapsed: origin.elapsed(),
        });
    }
}

/// Traverse `graph` from `start`, without cancellation.
pub async fn traverse<S: VisitSink>(
    graph: &Graph,
    start: &str,
    sink: S,
) -> Result<TraversalSummary> {
    Traversal::new(graph, sink).run(start).await
}
