//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Graph errors (YX-0xx) abort the whole computation: a partial graph or a
/// partial order would silently produce an incorrectly ordered script, so
/// nothing best-effort is ever returned.
#[derive(Error, Debug)]
pub enum YxError {
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no tool IDs given")]
    EmptyToolIds,

    // ─────────────────────────────────────────────────────────────
    // Graph construction errors (YX-010 to YX-011)
    // ─────────────────────────────────────────────────────────────

    #[error("YX-010: connection references tool '{tool_id}', which is not in the workflow")]
    DanglingReference { tool_id: String },

    #[error("YX-011: duplicate tool id '{tool_id}' in the node list")]
    DuplicateToolId { tool_id: String },

    // ─────────────────────────────────────────────────────────────
    // Container errors (YX-020)
    // ─────────────────────────────────────────────────────────────

    #[error("YX-020: container nesting cycle: {}", .cycle.join(" -> "))]
    ContainmentCycle { cycle: Vec<String> },

    // ─────────────────────────────────────────────────────────────
    // Ordering errors (YX-030 to YX-040)
    // ─────────────────────────────────────────────────────────────

    #[error("YX-030: dependency cycle among tools: {}", .members.join(", "))]
    DependencyCycle { members: Vec<String> },

    #[error("YX-040: tool id '{tool_id}' is not in the computed execution order")]
    UnknownToolId { tool_id: String },
}

impl FixSuggestion for YxError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            YxError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
            YxError::Json(_) => None,
            YxError::Io(_) => Some("Check file path and permissions"),
            YxError::EmptyToolIds => Some("Pass a comma-separated list like '644, 645, 646'"),
            YxError::DanglingReference { .. } => {
                Some("Re-export the workflow records: every connection must name a tool present in the node list")
            }
            YxError::DuplicateToolId { .. } => {
                Some("Tool IDs must be unique within a workflow: fix the duplicate before loading")
            }
            YxError::ContainmentCycle { .. } => {
                Some("Break the nesting loop: a container cannot contain itself, directly or indirectly")
            }
            YxError::DependencyCycle { .. } => {
                Some("Remove a connection on the cycle: a tool cannot feed its own inputs")
            }
            YxError::UnknownToolId { .. } => {
                Some("Check for typos: run the 'order' command to list valid tool IDs")
            }
        }
    }
}
