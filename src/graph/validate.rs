// src/graph/validate.rs

use crate::errors::{Result, TravelerError};
use crate::graph::model::{Graph, RawGraph};

impl TryFrom<RawGraph> for Graph {
    type Error = TravelerError;

    fn try_from(raw: RawGraph) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(Graph::new_unchecked(raw.nodes))
    }
}

/// Structural checks only: anything that would make a lookup fail later.
///
/// Delays are range-checked while deserializing (see [`crate::types::Delay`]),
/// and the start node / cycle checks run separately in `dag::validator`.
pub fn validate_raw_graph(raw: &RawGraph) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_edge_targets(raw)?;
    Ok(())
}

fn ensure_has_nodes(raw: &RawGraph) -> Result<()> {
    if raw.nodes.is_empty() {
        return Err(TravelerError::InvalidGraph(
            "graph must contain at least one node".to_string(),
        ));
    }
    Ok(())
}

fn validate_edge_targets(raw: &RawGraph) -> Result<()> {
    for (name, record) in raw.nodes.iter() {
        for target in record.edges.keys() {
            if !raw.nodes.contains_key(target) {
                return Err(TravelerError::InvalidGraph(format!(
                    "node '{}' has an edge to unknown node '{}'",
                    name, target
                )));
            }
        }
    }
    Ok(())
}
