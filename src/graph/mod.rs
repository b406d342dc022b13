// src/graph/mod.rs

//! Graph description loading and structural checks.
//!
//! Responsibilities:
//! - Define the serde-backed data model (`model.rs`).
//! - Load a graph from a JSON string or from disk (`loader.rs`).
//! - Reject structurally broken input like dangling edges (`validate.rs`).
//!
//! Start-node discovery and cycle detection are not done here; they belong to
//! [`crate::dag::validator`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{from_json_str, from_toml_str, load_and_check, load_from_path};
pub use model::{Graph, NodeRecord, RawGraph};
