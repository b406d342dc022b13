// src/engine/sink.rs

//! Pluggable destination for traversal notifications.
//!
//! The engine talks to a `VisitSink` instead of a global logger. Production
//! uses [`LogSink`]; tests can record events or read them from a channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::TraversalEvent;

/// Receives every notification of a traversal, in emission order.
///
/// `notify` is called from inside the traversal future, so it must not block.
pub trait VisitSink: Send + Sync {
    fn notify(&self, event: TraversalEvent);
}

impl<S: VisitSink + ?Sized> VisitSink for &S {
    fn notify(&self, event: TraversalEvent) {
        (**self).notify(event)
    }
}

impl<S: VisitSink + ?Sized> VisitSink for Arc<S> {
    fn notify(&self, event: TraversalEvent) {
        (**self).notify(event)
    }
}

/// Renders visits as log lines: the node id at `info`, timing at `debug`,
/// and `Done!` on completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl VisitSink for LogSink {
    fn notify(&self, event: TraversalEvent) {
        match event {
            TraversalEvent::Visited {
                node,
                from,
                path_delay,
                elapsed,
            } => {
                match from {
                    Some(from) => debug!(
                        "Visiting {node} from {from} (path delay {:.3}s, elapsed {:.3}s)",
                        path_delay.as_secs_f64(),
                        elapsed.as_secs_f64()
                    ),
                    None => debug!("Starting at {node}"),
                }
                info!("{node}");
            }
            TraversalEvent::Done { visits, elapsed } => {
                debug!(visits, "traversal finished after {:.3}s", elapsed.as_secs_f64());
                info!("Done!");
            }
        }
    }
}

/// Forwards every event over an unbounded mpsc channel.
///
/// A dropped receiver is not an error for the traversal; the event is
/// discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<TraversalEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<TraversalEvent>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TraversalEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl VisitSink for ChannelSink {
    fn notify(&self, event: TraversalEvent) {
        if let Err(err) = self.tx.send(event) {
            debug!(event = ?err.0, "visit receiver dropped; discarding event");
        }
    }
}

/// Calls a closure for every event.
pub struct FnSink<F>(pub F);

impl<F> VisitSink for FnSink<F>
where
    F: Fn(TraversalEvent) + Send + Sync,
{
    fn notify(&self, event: TraversalEvent) {
        (self.0)(event)
    }
}
