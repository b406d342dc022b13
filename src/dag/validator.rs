// src/dag/validator.rs

//! Start-node discovery and path-local cycle detection.
//!
//! Both checks run before the traversal starts, so a failing graph never
//! produces a single visit.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::errors::{Result, TravelerError};
use crate::graph::Graph;

/// Find the node flagged with `start = true`.
///
/// Nodes are scanned in document order and the first flagged one wins. Extra
/// claimants are reported with a warning rather than rejected.
pub fn find_start_node(graph: &Graph) -> Result<&str> {
    let mut flagged = graph
        .nodes()
        .filter(|(_, record)| record.start)
        .map(|(id, _)| id);

    let start = flagged.next().ok_or(TravelerError::NoStartNode)?;

    let ignored: Vec<&str> = flagged.collect();
    if !ignored.is_empty() {
        warn!(
            start,
            ?ignored,
            "multiple start nodes flagged; using the first one"
        );
    }

    debug!(start, "found start node");
    Ok(start)
}

/// Check that no node repeats along any single path from `start`.
///
/// The set only holds the nodes of the current descent path: a node reached
/// again through a different branch (a diamond) is fine, re-entering a node
/// that is still on the path is a cycle.
pub fn validate_acyclic(graph: &Graph, start: &str) -> Result<()> {
    let mut on_path: HashSet<&str> = HashSet::new();
    visit(graph, start, &mut on_path)
}

fn visit<'g>(graph: &'g Graph, node: &'g str, on_path: &mut HashSet<&'g str>) -> Result<()> {
    if !on_path.insert(node) {
        return Err(TravelerError::CycleDetected(node.to_string()));
    }

    for (next, _) in graph.edges_of(node) {
        visit(graph, next, on_path)?;
    }

    on_path.remove(node);
    Ok(())
}

/// Locate the start node and check acyclicity from it.
pub fn validate(graph: &Graph) -> Result<&str> {
    let start = find_start_node(graph)?;
    validate_acyclic(graph, start)?;
    Ok(start)
}
