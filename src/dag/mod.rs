// src/dag/mod.rs

//! DAG validation and scheduling.
//!
//! - [`validator`] finds the start node and rejects cycles.
//! - [`plan`] computes the visit timeline without waiting.

pub mod plan;
pub mod validator;

pub use plan::{PlannedVisit, plan};
pub use validator::{find_start_node, validate, validate_acyclic};
