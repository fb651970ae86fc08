//! Endpoint sources.
//!
//! Two independent producers of [`Endpoint`] records:
//! - [`openapi`]: an `OpenAPI` (or Swagger) document, JSON or YAML.
//! - [`routes`]: a route table dumped from (or served by) a live application.
//!
//! Both accept a file path or an `http(s)://` URL. Any failure surfaces before a single endpoint is
//! produced, so callers never render a report from a partially loaded source.

pub mod openapi;
pub mod routes;

use crate::endpoint::Endpoint;
use crate::error::{AssessError, Result};
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use url::Url;

/// Where the endpoint inventory comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointSource {
    /// `OpenAPI` document location.
    OpenApi(String),
    /// Route table location.
    Routes(String),
}

impl EndpointSource {
    /// Label shown in the report (the location as given).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            EndpointSource::OpenApi(location) | EndpointSource::Routes(location) => location,
        }
    }

    /// Load the source and normalize it into endpoint records.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is invalid, cannot be read/fetched, does not parse as
    /// JSON/YAML, or does not have the expected top-level shape.
    pub async fn load(&self, client: &Client) -> Result<Vec<Endpoint>> {
        let endpoints = match self {
            EndpointSource::OpenApi(location) => {
                tracing::info!("Loading OpenAPI document from {}", location);
                let doc = load_document(location, client).await?;
                openapi::endpoints_from_openapi(&doc)?
            }
            EndpointSource::Routes(location) => {
                tracing::info!("Loading route table from {}", location);
                let doc = load_document(location, client).await?;
                let table = routes::parse_route_table(doc)?;
                routes::endpoints_from_routes(&table)
            }
        };
        tracing::info!("Discovered {} endpoint(s) in '{}'", endpoints.len(), self.label());
        Ok(endpoints)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Url(Url),
    File(PathBuf),
}

impl Location {
    fn parse(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let url = Url::parse(location)
                .map_err(|e| AssessError::Source(format!("Invalid source URL '{location}': {e}")))?;
            Ok(Location::Url(url))
        } else if location.starts_with("file://") {
            let url = Url::parse(location).map_err(|e| {
                AssessError::Source(format!("Invalid source file URL '{location}': {e}"))
            })?;
            let path = url.to_file_path().map_err(|()| {
                AssessError::Source(format!(
                    "Invalid file URL (cannot convert to path): {location}"
                ))
            })?;
            Ok(Location::File(path))
        } else {
            Ok(Location::File(PathBuf::from(location)))
        }
    }
}

async fn read_location(location: &str, client: &Client) -> Result<String> {
    match Location::parse(location)? {
        Location::File(path) => {
            std::fs::read_to_string(&path).map_err(|e| AssessError::SourceReadFile {
                path: path.display().to_string(),
                source: e,
            })
        }
        Location::Url(url) => {
            let resp = client
                .get(url)
                .send()
                .await
                .map_err(|e| AssessError::SourceFetch {
                    url: location.to_string(),
                    message: e.to_string(),
                })?;
            let status = resp.status();
            if !status.is_success() {
                return Err(AssessError::Lookup {
                    url: location.to_string(),
                    status: status.as_u16(),
                });
            }
            resp.text().await.map_err(|e| AssessError::SourceReadBody {
                url: location.to_string(),
                message: e.to_string(),
            })
        }
    }
}

/// Parse a JSON or YAML document.
///
/// JSON is tried first for better error positions on `.json` inputs; YAML is the fallback (and the
/// error reported when both fail).
///
/// # Errors
///
/// Returns [`AssessError::SourceParse`] if the content is neither valid JSON nor valid YAML.
pub fn parse_document(location: &str, content: &str) -> Result<Value> {
    serde_json::from_str(content).or_else(|_| {
        serde_yaml::from_str(content).map_err(|e| AssessError::SourceParse {
            location: location.to_string(),
            source: e,
        })
    })
}

async fn load_document(location: &str, client: &Client) -> Result<Value> {
    let content = read_location(location, client).await?;
    parse_document(location, &content)
}

/// Python-style truthiness for optional text fields: missing, null, `false`, `0`, `""`, `[]` and
/// `{}` all read as absent.
///
/// Strings, numbers and `true` (as `True`) render the way Python's `str()` does. Non-empty arrays
/// and objects render as compact JSON text.
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("True".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}
