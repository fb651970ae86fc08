//! `OpenAPI` document → endpoint records.
//!
//! The document is walked as plain JSON rather than a typed `OpenAPI` model: Swagger 2.0, partial
//! and slightly invalid documents all still yield an inventory. Path items and operations that are
//! not mappings are tolerated; keys that are not HTTP verbs (`parameters`, `servers`, `x-*`,
//! `trace`) are skipped.

use super::text_field;
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::{AssessError, Result};
use serde_json::{Map, Value};

/// Extract endpoints in document order (paths, then methods within each path item).
///
/// # Errors
///
/// Returns an error if the document root is not a mapping.
pub fn endpoints_from_openapi(doc: &Value) -> Result<Vec<Endpoint>> {
    let root = doc.as_object().ok_or_else(|| {
        AssessError::InvalidDocument("OpenAPI document root must be a mapping".to_string())
    })?;

    let paths = match root.get("paths") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(paths)) => paths,
        Some(_) => {
            return Err(AssessError::InvalidDocument(
                "OpenAPI `paths` must be a mapping".to_string(),
            ));
        }
    };

    let empty = Map::new();
    let mut endpoints = Vec::new();
    for (path, item) in paths {
        let Some(operations) = item.as_object() else {
            tracing::debug!("Skipping path '{}': path item is not a mapping", path);
            continue;
        };

        for (key, operation) in operations {
            let Some(method) = HttpMethod::parse(key) else {
                tracing::debug!("Skipping '{} {}': not an HTTP method", key, path);
                continue;
            };
            let operation = operation.as_object().unwrap_or(&empty);

            endpoints.push(Endpoint::new(
                method,
                path.clone(),
                text_field(operation.get("operationId")).unwrap_or_default(),
                text_field(operation.get("summary"))
                    .or_else(|| text_field(operation.get("description")))
                    .unwrap_or_default(),
            ));
        }
    }

    Ok(endpoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_document;
    use serde_json::json;

    #[test]
    fn test_extracts_operations_in_document_order() {
        let doc = parse_document(
            "petstore.yaml",
            r#"
openapi: "3.0.0"
info:
  title: Petstore
  version: "1"
paths:
  /pets:
    post:
      operationId: createPet
      summary: Create a pet
    get:
      operationId: listPets
      description: Lists pets
  /pets/{petId}:
    parameters:
      - name: petId
        in: path
    get:
      operationId: showPetById
    delete:
      operationId: deletePet
"#,
        )
        .unwrap();

        let endpoints = endpoints_from_openapi(&doc).unwrap();
        let got: Vec<_> = endpoints.iter().map(Endpoint::label).collect();
        assert_eq!(
            got,
            vec![
                "POST /pets",
                "GET /pets",
                "GET /pets/{petId}",
                "DELETE /pets/{petId}"
            ]
        );
        assert_eq!(endpoints[0].summary, "Create a pet");
        assert_eq!(endpoints[1].summary, "Lists pets");
        assert_eq!(endpoints[2].operation_id, "showPetById");
    }

    #[test]
    fn test_method_keys_are_case_insensitive_and_filtered() {
        let doc = json!({
            "paths": {
                "/jobs": {
                    "GET": {"operationId": "listJobs"},
                    "Head": {},
                    "options": {},
                    "trace": {},
                    "x-internal": true,
                    "summary": "Jobs"
                }
            }
        });
        let endpoints = endpoints_from_openapi(&doc).unwrap();
        let methods: Vec<_> = endpoints.iter().map(|e| e.method).collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Head, HttpMethod::Options]);
    }

    #[test]
    fn test_non_mapping_items_are_tolerated() {
        let doc = json!({
            "paths": {
                "/broken": "not a path item",
                "/ping": {"get": null, "post": "nope"}
            }
        });
        let endpoints = endpoints_from_openapi(&doc).unwrap();
        assert_eq!(
            endpoints,
            vec![
                Endpoint::new(HttpMethod::Get, "/ping", "", ""),
                Endpoint::new(HttpMethod::Post, "/ping", "", ""),
            ]
        );
    }

    #[test]
    fn test_missing_paths_yields_no_endpoints() {
        assert!(endpoints_from_openapi(&json!({"openapi": "3.1.0"})).unwrap().is_empty());
        assert!(endpoints_from_openapi(&json!({"paths": null})).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_shapes_are_errors() {
        assert!(endpoints_from_openapi(&json!(["not", "a", "spec"])).is_err());
        assert!(endpoints_from_openapi(&json!({"paths": ["/a"]})).is_err());
    }

    #[test]
    fn test_empty_summary_falls_back_to_description() {
        let doc = json!({
            "paths": {"/a": {"get": {"summary": "", "description": "From description"}}}
        });
        let endpoints = endpoints_from_openapi(&doc).unwrap();
        assert_eq!(endpoints[0].summary, "From description");
    }
}
