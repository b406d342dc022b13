// src/dag/plan.rs

//! Synchronous, deterministic visit schedule.
//!
//! Computes when every visit of a traversal is due without sleeping. The
//! traversal engine produces the same timeline in real time; `--dry-run`
//! prints this one instead.

use std::time::Duration;

use crate::types::NodeId;
use crate::graph::Graph;

/// One expected visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedVisit {
    pub node: NodeId,
    /// Predecessor on the path this visit arrives by (`None` for the start).
    pub from: Option<NodeId>,
    /// Sum of the edge delays along that path.
    pub at: Duration,
}

/// Every visit reachable from `start`, ordered by due time.
///
/// Nodes reachable via several paths appear once per path. Visits due at the
/// same instant keep depth-first discovery order.
///
/// Expects a graph that already passed `validator::validate_acyclic`.
pub fn plan(graph: &Graph, start: &str) -> Vec<PlannedVisit> {
    let mut visits = vec![PlannedVisit {
        node: start.to_string(),
        from: None,
        at: Duration::ZERO,
    }];
    collect(graph, start, Duration::ZERO, &mut visits);

    // `sort_by_key` is stable, so ties stay in discovery order.
    visits.sort_by_key(|v| v.at);
    visits
}

fn collect(graph: &Graph, node: &str, at: Duration, out: &mut Vec<PlannedVisit>) {
    for (next, delay) in graph.edges_of(node) {
        let due = at.saturating_add(delay.as_duration());
        out.push(PlannedVisit {
            node: next.to_string(),
            from: Some(node.to_string()),
            at: due,
        });
        collect(graph, next, due, out);
    }
}

/// Time at which the last visit is due.
pub fn total_duration(visits: &[PlannedVisit]) -> Duration {
    visits.iter().map(|v| v.at).max().unwrap_or(Duration::ZERO)
}
