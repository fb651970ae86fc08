//! Endpoint → MCP primitive classification.
//!
//! Rules are evaluated in a fixed priority order (first match wins):
//! 1. Mutating methods, or an action hint in the path/operation id → [`Primitive::Tool`].
//! 2. `GET` → [`Primitive::Resource`] (fetch when the path is parameterized, list/query
//!    otherwise).
//! 3. Anything else (`HEAD`, `OPTIONS`) → [`Primitive::Tool`].

use crate::endpoint::{Endpoint, HttpMethod};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Words that mark an imperative operation regardless of HTTP method.
pub const ACTION_HINTS: &[&str] = &[
    "search", "sync", "refresh", "execute", "run", "submit", "approve", "reject", "create",
    "update", "delete", "import", "export", "generate", "send",
];

pub const ACTION_RATIONALE: &str =
    "State-changing or action-oriented endpoint; expose as an MCP tool.";
pub const FETCH_RATIONALE: &str = "Read endpoint with path parameters; model as a resource fetch.";
pub const LIST_RATIONALE: &str = "Read endpoint; model as a resource list/query where practical.";
pub const FALLBACK_RATIONALE: &str =
    "Non-standard method; default to tool with explicit input schema.";

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("path parameter regex"));

/// Target MCP primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Primitive {
    Tool,
    Resource,
}

impl Primitive {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Tool => "Tool",
            Primitive::Resource => "Resource",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub primitive: Primitive,
    pub rationale: &'static str,
}

impl Classification {
    const fn new(primitive: Primitive, rationale: &'static str) -> Self {
        Self {
            primitive,
            rationale,
        }
    }
}

/// Classify one endpoint.
#[must_use]
pub fn classify(endpoint: &Endpoint) -> Classification {
    let path = endpoint.path.to_lowercase();
    let operation_id = endpoint.operation_id.to_lowercase();

    if endpoint.method.is_mutating() || has_action_hint(&path, &operation_id) {
        return Classification::new(Primitive::Tool, ACTION_RATIONALE);
    }

    if endpoint.method == HttpMethod::Get {
        if PATH_PARAM.is_match(&path) {
            return Classification::new(Primitive::Resource, FETCH_RATIONALE);
        }
        return Classification::new(Primitive::Resource, LIST_RATIONALE);
    }

    Classification::new(Primitive::Tool, FALLBACK_RATIONALE)
}

/// Both inputs must already be lower-cased.
///
/// Path hints match right after any `/`, so `/export`, `/exports` and `/users/{id}/runs` all count;
/// operation id hints match anywhere (`bulkImportUsers`).
fn has_action_hint(path: &str, operation_id: &str) -> bool {
    let in_path = path.match_indices('/').any(|(i, _)| {
        let rest = &path[i + 1..];
        ACTION_HINTS.iter().any(|hint| rest.starts_with(hint))
    });
    in_path || ACTION_HINTS.iter().any(|hint| operation_id.contains(hint))
}
