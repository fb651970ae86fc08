//! Mapping report assembly and markdown rendering.

use crate::advise::{route_map_suggestion, transform_suggestion};
use crate::classify::{Primitive, classify};
use crate::endpoint::Endpoint;
use crate::findings::build_findings;
use serde::Serialize;

const DEFAULT_ROUTE_MAP_NOTE: &str =
    "Default route naming appears acceptable; custom RouteMaps can be deferred.";
const DEFAULT_TRANSFORM_NOTE: &str =
    "No immediate transform requirements detected; start with native schemas.";

const FOLLOW_UP: [&str; 4] = [
    "Keep bootstrap mapping simple and ship a minimal MCP surface first.",
    "Add RouteMaps for naming clarity after first client feedback.",
    "Add Transforms where payload shape harms usability or consistency.",
    "Validate exposed tools/resources with representative prompt flows.",
];

/// Everything the renderer needs, computed once per run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingReport {
    pub source: String,
    pub endpoints: Vec<EndpointAssessment>,
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointAssessment {
    #[serde(flatten)]
    pub endpoint: Endpoint,
    pub primitive: Primitive,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_map: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl MappingReport {
    /// `(METHOD PATH, note)` for every endpoint with a RouteMap suggestion, in input order.
    pub fn route_map_notes(&self) -> impl Iterator<Item = (String, &str)> {
        self.endpoints
            .iter()
            .filter_map(|e| e.route_map.as_deref().map(|n| (e.endpoint.label(), n)))
    }

    /// `(METHOD PATH, note)` for every endpoint with a transform suggestion, in input order.
    pub fn transform_notes(&self) -> impl Iterator<Item = (String, &str)> {
        self.endpoints
            .iter()
            .filter_map(|e| e.transform.as_deref().map(|n| (e.endpoint.label(), n)))
    }
}

/// Classify and advise on every endpoint, keeping input order.
#[must_use]
pub fn assess(source: &str, endpoints: &[Endpoint]) -> MappingReport {
    let assessments = endpoints
        .iter()
        .map(|endpoint| {
            let classification = classify(endpoint);
            EndpointAssessment {
                endpoint: endpoint.clone(),
                primitive: classification.primitive,
                rationale: classification.rationale.to_string(),
                route_map: route_map_suggestion(endpoint).map(str::to_string),
                transform: transform_suggestion(endpoint).map(str::to_string),
            }
        })
        .collect();

    MappingReport {
        source: source.to_string(),
        endpoints: assessments,
        findings: build_findings(endpoints)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Render a report as markdown.
#[must_use]
pub fn render_markdown(report: &MappingReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# MCP Mapping Report".to_string());
    lines.push(String::new());
    lines.push(format!("Source: `{}`", report.source));
    lines.push(format!("Endpoints analyzed: **{}**", report.endpoints.len()));
    lines.push(String::new());
    lines.push("## Proposed Endpoint Mapping".to_string());
    lines.push(String::new());
    lines.push("| Method | Path | Suggested MCP Primitive | Rationale |".to_string());
    lines.push("|---|---|---|---|".to_string());
    for e in &report.endpoints {
        lines.push(format!(
            "| {} | `{}` | {} | {} |",
            e.endpoint.method, e.endpoint.path, e.primitive, e.rationale
        ));
    }

    lines.push(String::new());
    lines.push("## MCP Best-Practice Findings".to_string());
    lines.push(String::new());
    for finding in &report.findings {
        lines.push(format!("- {finding}"));
    }

    push_notes_section(
        &mut lines,
        "## Suggested RouteMap Strategy",
        report.route_map_notes(),
        DEFAULT_ROUTE_MAP_NOTE,
    );
    push_notes_section(
        &mut lines,
        "## Suggested Transform Strategy",
        report.transform_notes(),
        DEFAULT_TRANSFORM_NOTE,
    );

    lines.push(String::new());
    lines.push("## Recommended Bootstrap Follow-up".to_string());
    lines.push(String::new());
    for (i, step) in FOLLOW_UP.iter().enumerate() {
        lines.push(format!("{}. {step}", i + 1));
    }
    lines.push(String::new());

    lines.join("\n")
}

fn push_notes_section<'a>(
    lines: &mut Vec<String>,
    heading: &str,
    notes: impl Iterator<Item = (String, &'a str)>,
    fallback: &str,
) {
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.push(String::new());

    let before = lines.len();
    for (label, note) in notes {
        lines.push(format!("- `{label}`: {note}"));
    }
    if lines.len() == before {
        lines.push(format!("- {fallback}"));
    }
}

/// Assess and render in one step.
#[must_use]
pub fn render_report(source: &str, endpoints: &[Endpoint]) -> String {
    render_markdown(&assess(source, endpoints))
}
