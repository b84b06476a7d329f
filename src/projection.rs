//! Subset ordering against the global execution order
//!
//! Callers type tool IDs in whatever order is convenient; downstream code
//! combination must still see them in dependency-safe order. Projection is
//! a stable filter of the full order down to the requested set, never a
//! re-sort by any other key.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::YxError;

/// Permute `subset` into the relative order of `full_order`.
///
/// Duplicates in `subset` collapse to one occurrence. An ID absent from
/// `full_order` fails with `UnknownToolId` naming it.
pub fn project(subset: &[String], full_order: &[Arc<str>]) -> Result<Vec<Arc<str>>, YxError> {
    let known: HashSet<&str> = full_order.iter().map(|id| id.as_ref()).collect();

    let mut requested: HashSet<&str> = HashSet::with_capacity(subset.len());
    for id in subset {
        if !known.contains(id.as_str()) {
            return Err(YxError::UnknownToolId {
                tool_id: id.clone(),
            });
        }
        requested.insert(id.as_str());
    }

    Ok(full_order
        .iter()
        .filter(|id| requested.contains(id.as_ref()))
        .cloned()
        .collect())
}
