// src/engine/mod.rs

//! Delay-gated concurrent traversal.
//!
//! The engine walks the graph from the start node. Each edge waits for its
//! delay, reports the visit, then fans out to all of the target's edges at
//! once and waits for every one of them before its own subtree counts as
//! finished.
//!
//! Visits are not logged directly. They are pushed to a [`VisitSink`], which
//! decides how (and whether) to render them:
//! - [`LogSink`] prints them through `tracing` (used by the binary);
//! - [`ChannelSink`] forwards them over an mpsc channel;
//! - [`FnSink`] calls a closure.

use std::time::Duration;

use crate::types::NodeId;

/// Notifications produced by a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A node was reached.
    Visited {
        node: NodeId,
        /// Predecessor on this path; `None` for the start node.
        from: Option<NodeId>,
        /// Sum of the edge delays along this path.
        path_delay: Duration,
        /// Time since the traversal started, on the tokio clock.
        elapsed: Duration,
    },
    /// Every subtree has finished. Emitted exactly once, last.
    Done { visits: usize, elapsed: Duration },
}

impl TraversalEvent {
    /// Node id for `Visited`, `None` for `Done`.
    pub fn node(&self) -> Option<&str> {
        match self {
            TraversalEvent::Visited { node, .. } => Some(node),
            TraversalEvent::Done { .. } => None,
        }
    }
}

/// What a finished traversal reports back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalSummary {
    pub visits: usize,
    pub elapsed: Duration,
}

pub mod sink;
pub mod traversal;

pub use sink::{ChannelSink, FnSink, LogSink, VisitSink};
pub use traversal::{Traversal, traverse};
