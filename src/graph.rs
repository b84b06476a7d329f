//! Dependency graph built from workflow records (Arc<str> optimized)
//!
//! Uses Arc<str> for zero-cost cloning of tool IDs.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::YxError;
use crate::workflow::{Connection, ToolNode};

/// Graph of data dependencies between tools
///
/// Built fresh for every workflow load; nothing is retained between loads.
#[derive(Debug)]
pub struct DependencyGraph {
    /// tool_id -> successor tool_ids (tools fed by this one)
    successors: HashMap<Arc<str>, Vec<Arc<str>>>,
    /// tool_id -> predecessor tool_ids (tools this one waits for)
    predecessors: HashMap<Arc<str>, Vec<Arc<str>>>,
    /// All tool IDs in original listing order (tie-break source for ordering)
    tool_ids: Vec<Arc<str>>,
    /// Quick lookup for tool existence and Arc reuse
    tool_set: HashSet<Arc<str>>,
}

impl DependencyGraph {
    /// Build the graph, failing fast on duplicate tool IDs and on
    /// connections that reference tools absent from the node list.
    pub fn from_records(
        nodes: &[ToolNode],
        connections: &[Connection],
    ) -> Result<Self, YxError> {
        let capacity = nodes.len();
        let mut successors: HashMap<Arc<str>, Vec<Arc<str>>> =
            HashMap::with_capacity(capacity);
        let mut predecessors: HashMap<Arc<str>, Vec<Arc<str>>> =
            HashMap::with_capacity(capacity);
        let mut tool_ids: Vec<Arc<str>> = Vec::with_capacity(capacity);
        let mut tool_set: HashSet<Arc<str>> = HashSet::with_capacity(capacity);

        // Create Arc<str> once per tool, reuse everywhere
        for node in nodes {
            let id: Arc<str> = Arc::from(node.tool_id.as_str());
            if !tool_set.insert(Arc::clone(&id)) {
                return Err(YxError::DuplicateToolId {
                    tool_id: node.tool_id.clone(),
                });
            }
            tool_ids.push(Arc::clone(&id));
            successors.insert(Arc::clone(&id), Vec::new());
            predecessors.insert(id, Vec::new());
        }

        let mut seen_edges: HashSet<(Arc<str>, Arc<str>)> =
            HashSet::with_capacity(connections.len());
        for conn in connections {
            let src = tool_set
                .get(conn.source_tool_id.as_str())
                .cloned()
                .ok_or_else(|| YxError::DanglingReference {
                    tool_id: conn.source_tool_id.clone(),
                })?;
            let tgt = tool_set
                .get(conn.target_tool_id.as_str())
                .cloned()
                .ok_or_else(|| YxError::DanglingReference {
                    tool_id: conn.target_tool_id.clone(),
                })?;

            // Duplicate connections are idempotent for ordering
            if !seen_edges.insert((Arc::clone(&src), Arc::clone(&tgt))) {
                continue;
            }

            if let Some(out) = successors.get_mut(&src) {
                out.push(Arc::clone(&tgt));
            }
            if let Some(inc) = predecessors.get_mut(&tgt) {
                inc.push(src);
            }
        }

        Ok(Self {
            successors,
            predecessors,
            tool_ids,
            tool_set,
        })
    }

    /// Tools this tool waits for
    #[inline]
    pub fn predecessors_of(&self, tool_id: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.predecessors
            .get(tool_id)
            .map(|v| v.as_slice())
            .unwrap_or(EMPTY)
    }

    /// Tools fed by this tool
    #[inline]
    pub fn successors_of(&self, tool_id: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.successors
            .get(tool_id)
            .map(|v| v.as_slice())
            .unwrap_or(EMPTY)
    }

    /// All tool IDs in original listing order
    #[inline]
    pub fn tool_ids(&self) -> &[Arc<str>] {
        &self.tool_ids
    }

    /// Check if a tool exists
    #[inline]
    pub fn contains(&self, tool_id: &str) -> bool {
        self.tool_set.contains(tool_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tool_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tool_ids.is_empty()
    }
}
