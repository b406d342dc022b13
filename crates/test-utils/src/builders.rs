#![allow(dead_code)]

use dag_traveler::graph::{Graph, NodeRecord, RawGraph};
use dag_traveler::types::Delay;

/// Builder for `Graph` to simplify test setup.
pub struct GraphBuilder {
    raw: RawGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawGraph::default(),
        }
    }

    pub fn with_node(mut self, name: &str, node: NodeRecord) -> Self {
        self.raw.nodes.insert(name.to_string(), node);
        self
    }

    /// Raw form, for tests that exercise `Graph::try_from` themselves.
    pub fn build_raw(self) -> RawGraph {
        self.raw
    }

    pub fn build(self) -> Graph {
        Graph::try_from(self.raw).expect("Failed to build valid graph from builder")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NodeRecord`.
pub struct NodeBuilder {
    node: NodeRecord,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self {
            node: NodeRecord::default(),
        }
    }

    pub fn start() -> Self {
        Self::new().is_start(true)
    }

    pub fn is_start(mut self, val: bool) -> Self {
        self.node.start = val;
        self
    }

    pub fn edge(mut self, to: &str, secs: f64) -> Self {
        let delay = Delay::from_secs(secs).expect("test edge delay must be valid");
        self.node.edges.insert(to.to_string(), delay);
        self
    }

    pub fn build(self) -> NodeRecord {
        self.node
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The seven-node graph used throughout the end-to-end tests.
///
/// ```text
/// A -1-> B -3-> D
/// A -2-> C
/// B -4-> E -5-> F -7-> G
///        E -6-> G
/// ```
pub fn sample_graph() -> Graph {
    GraphBuilder::new()
        .with_node("A", NodeBuilder::start().edge("B", 1.0).edge("C", 2.0).build())
        .with_node("B", NodeBuilder::new().edge("D", 3.0).edge("E", 4.0).build())
        .with_node("C", NodeBuilder::new().build())
        .with_node("D", NodeBuilder::new().build())
        .with_node("E", NodeBuilder::new().edge("F", 5.0).edge("G", 6.0).build())
        .with_node("F", NodeBuilder::new().edge("G", 7.0).build())
        .with_node("G", NodeBuilder::new().build())
        .build()
}
