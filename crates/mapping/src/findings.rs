//! Findings over the whole endpoint set.

use crate::endpoint::Endpoint;

pub const NO_ENDPOINTS: &str = "No endpoints discovered. Verify source path/import and try again.";
pub const MUTATION_HEAVY: &str = concat!(
    "API is mutation-heavy. ",
    "Prioritize tool design with clear side-effect descriptions and confirmations."
);
pub const SENSITIVE_ROUTES: &str = concat!(
    "Sensitive/internal routes detected. ",
    "Apply strict auth boundaries before exposing to MCP clients."
);
pub const SEARCH_PATTERNS: &str =
    "Search/query patterns detected. Prefer read-oriented resources when side effects are absent.";

/// Mutating share above which the API counts as mutation-heavy, as a fraction (3/5 = 0.6).
const MUTATION_HEAVY_NUM: usize = 3;
const MUTATION_HEAVY_DEN: usize = 5;

/// Build findings in rule order. An empty endpoint set yields only [`NO_ENDPOINTS`].
#[must_use]
pub fn build_findings(endpoints: &[Endpoint]) -> Vec<&'static str> {
    if endpoints.is_empty() {
        return vec![NO_ENDPOINTS];
    }

    let mut findings = Vec::new();

    let mutations = endpoints.iter().filter(|e| e.method.is_mutating()).count();
    // mutations / len > 3/5, without floats.
    if mutations * MUTATION_HEAVY_DEN > endpoints.len() * MUTATION_HEAVY_NUM {
        findings.push(MUTATION_HEAVY);
    }

    if endpoints
        .iter()
        .any(|e| e.path.starts_with("/admin") || e.path.contains("/internal"))
    {
        findings.push(SENSITIVE_ROUTES);
    }

    if endpoints
        .iter()
        .any(|e| e.path.contains("/search") || e.operation_id.to_lowercase().contains("query"))
    {
        findings.push(SEARCH_PATTERNS);
    }

    findings
}
