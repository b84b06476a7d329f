//! Topological execution order
//!
//! Kahn's algorithm over the dependency graph, with a deterministic
//! tie-break: among tools whose dependencies are all satisfied, the one
//! listed earliest in the workflow goes first. Identical input always
//! yields an identical order, so generated scripts are reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

use crate::error::YxError;
use crate::graph::DependencyGraph;

/// Compute one valid execution order over all tools in the graph.
///
/// Fails with `DependencyCycle` (naming every unplaced tool) if the graph
/// is not acyclic; no partial order is ever returned.
pub fn execution_order(graph: &DependencyGraph) -> Result<Vec<Arc<str>>, YxError> {
    let tool_ids = graph.tool_ids();
    let index_of: HashMap<&str, usize> = tool_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_ref(), i))
        .collect();

    // Unsatisfied predecessor count per tool, indexed by listing position
    let mut remaining: Vec<usize> = tool_ids
        .iter()
        .map(|id| graph.predecessors_of(id).len())
        .collect();

    // Min-heap of listing indices: pops the earliest-listed eligible tool
    let mut ready: BinaryHeap<Reverse<usize>> = remaining
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order: Vec<Arc<str>> = Vec::with_capacity(tool_ids.len());
    while let Some(Reverse(idx)) = ready.pop() {
        let id = &tool_ids[idx];
        order.push(Arc::clone(id));
        for succ in graph.successors_of(id) {
            let s = index_of[succ.as_ref()];
            remaining[s] -= 1;
            if remaining[s] == 0 {
                ready.push(Reverse(s));
            }
        }
    }

    if order.len() != tool_ids.len() {
        // Tools whose in-degree never reached zero sit on or behind a cycle
        let members: Vec<String> = tool_ids
            .iter()
            .enumerate()
            .filter(|(i, _)| remaining[*i] > 0)
            .map(|(_, id)| id.to_string())
            .collect();
        return Err(YxError::DependencyCycle { members });
    }

    Ok(order)
}
