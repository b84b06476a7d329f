//! Yxflow - workflow graph resolver for Alteryx-to-Python conversion
//!
//! Loads flat tool/connection records, resolves container membership,
//! computes a deterministic dependency-respecting execution order, and
//! projects caller-requested tool subsets onto that order. Everything is a
//! pure function of its inputs; nothing is retained between loads.

pub mod containers;
pub mod error;
pub mod graph;
pub mod projection;
pub mod sequencer;
pub mod workflow;

pub use containers::ContainerMembership;
pub use error::{FixSuggestion, YxError};
pub use graph::DependencyGraph;
pub use projection::project;
pub use sequencer::execution_order;
pub use workflow::{Connection, ToolNode, Workflow, NON_EXECUTABLE_TOOL_TYPES};
