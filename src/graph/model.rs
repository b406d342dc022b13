// src/graph/model.rs

use indexmap::IndexMap;
use serde::Deserialize;

use crate::types::{Delay, NodeId};

/// A graph exactly as deserialized from its textual description.
///
/// ```json
/// {
///   "A": {"start": true, "edges": {"B": 1, "C": 2}},
///   "B": {"edges": {}},
///   "C": {"edges": {}}
/// }
/// ```
///
/// The same shape works in TOML:
///
/// ```toml
/// [A]
/// start = true
/// edges = { B = 1, C = 2 }
///
/// [B]
/// [C]
/// ```
///
/// Node and edge order follow the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawGraph {
    pub nodes: IndexMap<NodeId, NodeRecord>,
}

/// One node of the graph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeRecord {
    /// Marks the entry point of the traversal.
    #[serde(default, alias = "isStart")]
    pub start: bool,

    /// Outgoing edges: target node -> delay before the target is visited.
    #[serde(default)]
    pub edges: IndexMap<NodeId, Delay>,
}

/// A graph whose edges all point at existing nodes.
///
/// Built from a [`RawGraph`] via `TryFrom` (see `graph::validate`). It is
/// read-only for its whole lifetime; the validator and the traversal engine
/// only ever borrow it.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: IndexMap<NodeId, NodeRecord>,
}

impl Graph {
    pub(crate) fn new_unchecked(nodes: IndexMap<NodeId, NodeRecord>) -> Self {
        Self { nodes }
    }

    /// All nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeRecord)> {
        self.nodes.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Outgoing edges of `id` in document order. Unknown nodes have none.
    pub fn edges_of<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, Delay)> + use<'a> {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|record| record.edges.iter().map(|(to, delay)| (to.as_str(), *delay)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
