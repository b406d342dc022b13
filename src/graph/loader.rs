// src/graph/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::graph::model::{Graph, RawGraph};

/// Parse a JSON graph description and run the structural checks.
pub fn from_json_str(contents: &str) -> Result<Graph> {
    let raw: RawGraph = serde_json::from_str(contents)?;
    Graph::try_from(raw)
}

/// Parse a TOML graph description and run the structural checks.
pub fn from_toml_str(contents: &str) -> Result<Graph> {
    let raw: RawGraph = toml::from_str(contents)?;
    Graph::try_from(raw)
}

/// Load a graph file from a given path and return the raw `RawGraph`.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
/// This only deserializes; use [`load_and_check`] to also reject dangling
/// edges.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    debug!(path = %path.display(), is_toml, "loading graph file");

    let raw = if is_toml {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    Ok(raw)
}

/// Load a graph file from path and run the structural checks.
pub fn load_and_check(path: impl AsRef<Path>) -> Result<Graph> {
    let raw = load_from_path(path)?;
    Graph::try_from(raw)
}
