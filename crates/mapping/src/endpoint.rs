//! The normalized endpoint record every source produces.

use serde::Serialize;
use std::fmt;

/// HTTP verbs recognized by the source adapters.
///
/// Anything else is dropped before it reaches classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    /// Parse a method token, ignoring case. Returns `None` for unrecognized verbs.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "OPTIONS" => Some(Self::Options),
            "HEAD" => Some(Self::Head),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
        }
    }

    /// POST, PUT, PATCH and DELETE.
    #[must_use]
    pub fn is_mutating(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch | Self::Delete)
    }

    /// Methods that usually carry a request body (POST, PUT, PATCH).
    #[must_use]
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (method, path) pair exposed by the API under assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub method: HttpMethod,
    /// Path template (e.g. `/pets/{petId}`).
    pub path: String,
    /// Empty when the source does not provide one.
    pub operation_id: String,
    /// Empty when the source does not provide one.
    pub summary: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(
        method: HttpMethod,
        path: impl Into<String>,
        operation_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            operation_id: operation_id.into(),
            summary: summary.into(),
        }
    }

    /// `METHOD /path`, used to label per-endpoint notes.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("HEAD"), Some(HttpMethod::Head));
    }

    #[test]
    fn test_parse_rejects_unknown_verbs() {
        assert_eq!(HttpMethod::parse("trace"), None);
        assert_eq!(HttpMethod::parse("parameters"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_mutating_and_body_sets() {
        let mutating: Vec<_> = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
        ]
        .into_iter()
        .filter(|m| m.is_mutating())
        .collect();
        assert_eq!(
            mutating,
            vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch, HttpMethod::Delete]
        );
        assert!(!HttpMethod::Delete.carries_body());
        assert!(HttpMethod::Patch.carries_body());
    }

    #[test]
    fn test_method_serializes_upper_case() {
        let ep = Endpoint::new(HttpMethod::Delete, "/pets/{id}", "deletePet", "");
        let v = serde_json::to_value(&ep).unwrap();
        assert_eq!(v["method"], "DELETE");
        assert_eq!(v["operationId"], "deletePet");
        assert_eq!(ep.label(), "DELETE /pets/{id}");
    }
}
