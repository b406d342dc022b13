// tests/validator.rs

mod common;
use crate::common::builders::{GraphBuilder, NodeBuilder, sample_graph};
use crate::common::init_tracing;

use dag_traveler::dag::{find_start_node, validate, validate_acyclic};
use dag_traveler::errors::TravelerError;

#[test]
fn finds_the_flagged_start_node() {
    init_tracing();

    let graph = sample_graph();
    assert_eq!(find_start_node(&graph).unwrap(), "A");
}

#[test]
fn start_node_need_not_be_first() {
    let graph = GraphBuilder::new()
        .with_node("X", NodeBuilder::new().build())
        .with_node("Y", NodeBuilder::start().edge("X", 1.0).build())
        .build();

    assert_eq!(find_start_node(&graph).unwrap(), "Y");
}

#[test]
fn missing_start_node_is_an_error() {
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::new().edge("B", 5.0).edge("C", 7.0).build())
        .with_node("B", NodeBuilder::new().build())
        .with_node("C", NodeBuilder::new().build())
        .build();

    let err = find_start_node(&graph).unwrap_err();
    assert!(matches!(err, TravelerError::NoStartNode));
    assert_eq!(err.to_string(), "No start node in this DAG");
    assert!(err.is_validation_error());
}

#[test]
fn multiple_start_nodes_pick_the_first_in_document_order() {
    init_tracing();

    let graph = GraphBuilder::new()
        .with_node("Z", NodeBuilder::start().edge("M", 1.0).build())
        .with_node("M", NodeBuilder::new().build())
        .with_node("A", NodeBuilder::start().build())
        .build();

    assert_eq!(find_start_node(&graph).unwrap(), "Z");
}

#[test]
fn sample_graph_is_acyclic() {
    let graph = sample_graph();
    validate_acyclic(&graph, "A").expect("sample graph should validate");
    assert_eq!(validate(&graph).unwrap(), "A");
}

#[test]
fn two_node_cycle_names_the_reentered_node() {
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::start().edge("B", 5.0).build())
        .with_node("B", NodeBuilder::new().edge("A", 3.0).build())
        .build();

    let start = find_start_node(&graph).unwrap();
    let err = validate_acyclic(&graph, start).unwrap_err();

    match &err {
        TravelerError::CycleDetected(node) => assert_eq!(node, "A"),
        other => panic!("Expected CycleDetected, got: {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Cycle detected in DAG. Node A has already been visited"
    );
}

#[test]
fn self_loop_is_a_cycle() {
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::start().edge("A", 0.0).build())
        .build();

    let err = validate(&graph).unwrap_err();
    assert!(matches!(err, TravelerError::CycleDetected(ref n) if n == "A"));
}

#[test]
fn deep_cycle_is_reported_on_the_cycle() {
    // A -> B -> C -> D -> B
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::start().edge("B", 1.0).build())
        .with_node("B", NodeBuilder::new().edge("C", 1.0).build())
        .with_node("C", NodeBuilder::new().edge("D", 1.0).build())
        .with_node("D", NodeBuilder::new().edge("B", 1.0).build())
        .build();

    match validate(&graph) {
        Err(TravelerError::CycleDetected(node)) => {
            assert!(["B", "C", "D"].contains(&node.as_str()), "got {node}");
        }
        other => panic!("Expected CycleDetected, got: {:?}", other),
    }
}

#[test]
fn diamond_is_not_a_cycle() {
    // A -> B -> D, A -> C -> D
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::start().edge("B", 1.0).edge("C", 1.0).build())
        .with_node("B", NodeBuilder::new().edge("D", 1.0).build())
        .with_node("C", NodeBuilder::new().edge("D", 1.0).build())
        .with_node("D", NodeBuilder::new().build())
        .build();

    assert_eq!(validate(&graph).unwrap(), "A");
}

#[test]
fn cycle_unreachable_from_start_is_ignored() {
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::start().edge("B", 1.0).build())
        .with_node("B", NodeBuilder::new().build())
        .with_node("X", NodeBuilder::new().edge("Y", 1.0).build())
        .with_node("Y", NodeBuilder::new().edge("X", 1.0).build())
        .build();

    assert!(validate(&graph).is_ok());
}

#[test]
fn missing_start_is_reported_before_cycles() {
    let graph = GraphBuilder::new()
        .with_node("A", NodeBuilder::new().edge("B", 1.0).build())
        .with_node("B", NodeBuilder::new().edge("A", 1.0).build())
        .build();

    assert!(matches!(validate(&graph), Err(TravelerError::NoStartNode)));
}
