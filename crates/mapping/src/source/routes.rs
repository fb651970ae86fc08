//! Live application route table → endpoint records.
//!
//! Frameworks that keep a route registry (path, method set, handler name, summary) can dump it as
//! JSON or YAML, or serve it from a debug endpoint. Accepted shapes:
//!
//! ```yaml
//! - path: /pets/{id}
//!   methods: [GET, HEAD]
//!   name: get_pet
//!   summary: Fetch one pet
//! ```
//!
//! or the same list under a top-level `routes` key.

use super::text_field;
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::{AssessError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// One registered route. Every field is optional; mounts and websocket routes often lack
/// `methods`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteEntry {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub methods: Option<BTreeSet<String>>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub summary: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RouteTable {
    List(Vec<RouteEntry>),
    Wrapped { routes: Vec<RouteEntry> },
}

/// Parse a route table document.
///
/// # Errors
///
/// Returns an error if the document is neither a list of routes nor a mapping with a `routes`
/// list.
pub fn parse_route_table(doc: Value) -> Result<Vec<RouteEntry>> {
    match serde_json::from_value::<RouteTable>(doc) {
        Ok(RouteTable::List(routes) | RouteTable::Wrapped { routes }) => Ok(routes),
        Err(e) => Err(AssessError::InvalidDocument(format!(
            "route table must be a list of routes or a mapping with a `routes` list: {e}"
        ))),
    }
}

/// One endpoint per (route, method), methods visited in sorted order. `HEAD` and `OPTIONS` are
/// framework-generated and skipped, as are routes without a path or methods.
#[must_use]
pub fn endpoints_from_routes(routes: &[RouteEntry]) -> Vec<Endpoint> {
    let mut endpoints = Vec::new();
    for route in routes {
        let path = match route.path.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => continue,
        };
        let Some(methods) = route.methods.as_ref().filter(|m| !m.is_empty()) else {
            tracing::debug!("Skipping route '{}': no methods", path);
            continue;
        };

        let operation_id = text_field(route.name.as_ref()).unwrap_or_default();
        let summary = text_field(route.summary.as_ref()).unwrap_or_default();

        for raw in methods {
            let Some(method) = HttpMethod::parse(raw) else {
                tracing::debug!("Skipping '{} {}': unrecognized method", raw, path);
                continue;
            };
            if matches!(method, HttpMethod::Head | HttpMethod::Options) {
                continue;
            }
            endpoints.push(Endpoint::new(method, path, operation_id.clone(), summary.clone()));
        }
    }
    endpoints
}
