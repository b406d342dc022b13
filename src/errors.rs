// src/errors.rs

//! Crate-wide error type.
//!
//! `NoStartNode` and `CycleDetected` come from the validator and are raised
//! before any visit is emitted. The remaining variants describe input that
//! never made it to the core (unreadable files, bad JSON/TOML, dangling
//! edges) or a traversal that was cut short.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelerError {
    #[error("No start node in this DAG")]
    NoStartNode,

    #[error("Cycle detected in DAG. Node {0} has already been visited")]
    CycleDetected(String),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Traversal cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TravelerError {
    /// True for the errors raised by the validator itself, as opposed to
    /// problems with the input or the surrounding process.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            TravelerError::NoStartNode | TravelerError::CycleDetected(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TravelerError>;
