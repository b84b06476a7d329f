//! Container membership resolution
//!
//! Alteryx containers group tools on the canvas and may nest. Membership of
//! a container is the recursive set of tools inside it, computed once per
//! load from each node's `container_id` annotation. The containment relation
//! must form a forest; a cycle is a structural error, never silently broken.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::YxError;
use crate::workflow::ToolNode;

/// container_id -> all tool IDs inside it, direct and nested
#[derive(Debug)]
pub struct ContainerMembership {
    members: HashMap<Arc<str>, Vec<Arc<str>>>,
}

impl ContainerMembership {
    pub fn resolve(nodes: &[ToolNode]) -> Result<Self, YxError> {
        // parent -> direct children, in node listing order
        let mut direct: HashMap<&str, Vec<&str>> = HashMap::new();
        for node in nodes {
            if let Some(parent) = &node.container_id {
                direct
                    .entry(parent.as_str())
                    .or_default()
                    .push(node.tool_id.as_str());
            }
        }

        let mut members: HashMap<Arc<str>, Vec<Arc<str>>> =
            HashMap::with_capacity(direct.len());
        for parent in direct.keys() {
            let mut closure: Vec<Arc<str>> = Vec::new();
            let mut path: Vec<&str> = vec![*parent];
            expand(parent, &direct, &mut path, &mut closure)?;
            members.insert(Arc::from(*parent), closure);
        }

        Ok(Self { members })
    }

    /// All tools inside a container, in depth-first discovery order.
    ///
    /// Unknown IDs and childless containers both yield an empty slice; the
    /// reported outcome is "no children found" either way.
    #[inline]
    pub fn children_of(&self, container_id: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.members
            .get(container_id)
            .map(|v| v.as_slice())
            .unwrap_or(EMPTY)
    }

    /// Number of containers that have at least one member
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Depth-first closure of `parent`, failing if the expansion path revisits
/// a container already on it.
fn expand<'a>(
    parent: &str,
    direct: &HashMap<&'a str, Vec<&'a str>>,
    path: &mut Vec<&'a str>,
    out: &mut Vec<Arc<str>>,
) -> Result<(), YxError> {
    let Some(children) = direct.get(parent) else {
        return Ok(());
    };
    for child in children {
        if path.contains(child) {
            let mut cycle: Vec<String> =
                path.iter().map(|id| id.to_string()).collect();
            cycle.push(child.to_string());
            return Err(YxError::ContainmentCycle { cycle });
        }
        out.push(Arc::from(*child));
        path.push(*child);
        expand(child, direct, path, out)?;
        path.pop();
    }
    Ok(())
}
