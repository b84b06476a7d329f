//! Workflow record structures
//!
//! Flat tool/connection records as produced by the external workflow loader.
//! The loader owns parsing the native `.yxmd` format; this crate only reads
//! the flattened records and never mutates them.

use serde::Deserialize;

/// Tool types that never execute: containers only group, browses only display.
pub const NON_EXECUTABLE_TOOL_TYPES: [&str; 2] = ["BrowseV2", "Toolcontainer"];

/// A single tool placed on the workflow canvas
#[derive(Debug, Clone, Deserialize)]
pub struct ToolNode {
    pub tool_id: String,
    pub tool_type: String,
    /// Tool ID of the enclosing container, absent for top-level tools
    #[serde(default)]
    pub container_id: Option<String>,
}

/// A directed data connection: `target` runs strictly after `source`
#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    pub source_tool_id: String,
    pub target_tool_id: String,
    /// Anchor labels on either end (irrelevant to ordering)
    #[serde(default)]
    pub source_anchor: Option<String>,
    #[serde(default)]
    pub target_anchor: Option<String>,
}

/// Workflow records parsed from YAML
#[derive(Debug, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<ToolNode>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Workflow {
    /// Tools that actually run, in listing order.
    ///
    /// Container membership is still resolved over ALL nodes; this filter
    /// only matters to the code-generation consumer.
    pub fn executable_nodes(&self) -> Vec<&ToolNode> {
        self.nodes
            .iter()
            .filter(|n| !NON_EXECUTABLE_TOOL_TYPES.contains(&n.tool_type.as_str()))
            .collect()
    }
}
