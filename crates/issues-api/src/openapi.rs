//! OpenAPI 3.0 description of the API, served at `GET /openapi.json`.
//!
//! Component schemas are generated from the Rust types with `schemars`, so
//! they cannot drift from what the handlers actually accept and return.

use crate::models::{ErrorBody, HealthResponse};
use axum::Json;
use issues::domain::Issue;
use issues::validation::{CreateIssueRequest, UpdateIssueRequest};
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde_json::{Value, json};

/// Title reported in the document's `info` block.
pub const API_TITLE: &str = "Issues API";

/// `GET /openapi.json`
pub async fn openapi_json() -> Json<Value> {
    Json(document())
}

/// Build the full OpenAPI document.
pub fn document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": API_TITLE,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "REST API for managing issues (CRUD).",
        },
        "servers": [{ "url": "/", "description": "Current host" }],
        "tags": [{ "name": "Issues" }],
        "paths": paths(),
        "components": {
            "schemas": {
                "Issue": schema_for::<Issue>(),
                "CreateIssueRequest": schema_for::<CreateIssueRequest>(),
                "UpdateIssueRequest": schema_for::<UpdateIssueRequest>(),
                "Error": schema_for::<ErrorBody>(),
                "Health": schema_for::<HealthResponse>(),
            }
        }
    })
}

/// Inline OpenAPI 3.0 schema for `T`, without a `$schema` header.
fn schema_for<T: JsonSchema>() -> Value {
    let mut generator = SchemaSettings::openapi3()
        .with(|settings| {
            settings.inline_subschemas = true;
            settings.meta_schema = None;
        })
        .into_generator();
    generator.root_schema_for::<T>().to_value()
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn response(description: &str, schema: Option<Value>) -> Value {
    match schema {
        Some(schema) => json!({ "description": description, "content": json_content(schema) }),
        None => json!({ "description": description }),
    }
}

fn error_response(description: &str) -> Value {
    response(description, Some(schema_ref("Error")))
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer" },
        "description": "Issue id",
    })
}

fn paths() -> Value {
    json!({
        "/health": {
            "get": {
                "summary": "Health check",
                "responses": { "200": response("Service is up", Some(schema_ref("Health"))) },
            }
        },
        "/issues": {
            "post": {
                "summary": "Create an issue",
                "tags": ["Issues"],
                "requestBody": {
                    "required": true,
                    "content": json_content(schema_ref("CreateIssueRequest")),
                },
                "responses": {
                    "201": response("Created issue", Some(schema_ref("Issue"))),
                    "400": error_response("Validation error"),
                },
            },
            "get": {
                "summary": "List all issues",
                "tags": ["Issues"],
                "responses": {
                    "200": response(
                        "Issues in creation order",
                        Some(json!({ "type": "array", "items": schema_ref("Issue") })),
                    ),
                },
            }
        },
        "/issues/{id}": {
            "parameters": [id_parameter()],
            "get": {
                "summary": "Get an issue by id",
                "tags": ["Issues"],
                "responses": {
                    "200": response("The issue", Some(schema_ref("Issue"))),
                    "400": error_response("Invalid id"),
                    "404": error_response("Issue not found"),
                },
            },
            "put": {
                "summary": "Update an issue",
                "tags": ["Issues"],
                "requestBody": {
                    "required": true,
                    "content": json_content(schema_ref("UpdateIssueRequest")),
                },
                "responses": {
                    "200": response("Updated issue", Some(schema_ref("Issue"))),
                    "400": error_response("Invalid id or validation error"),
                    "404": error_response("Issue not found"),
                },
            },
            "delete": {
                "summary": "Delete an issue",
                "tags": ["Issues"],
                "responses": {
                    "204": response("Issue deleted", None),
                    "400": error_response("Invalid id"),
                    "404": error_response("Issue not found"),
                },
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();

        assert_eq!(doc["openapi"], "3.0.0");
        assert_eq!(doc["info"]["title"], API_TITLE);
        assert!(paths["/health"]["get"].is_object());
        for method in ["get", "post"] {
            assert!(paths["/issues"][method].is_object(), "missing {method} /issues");
        }
        for method in ["get", "put", "delete"] {
            assert!(
                paths["/issues/{id}"][method].is_object(),
                "missing {method} /issues/{{id}}"
            );
        }
    }

    #[test]
    fn test_issue_schema_uses_wire_names() {
        let doc = document();
        let issue = &doc["components"]["schemas"]["Issue"];
        let properties = issue["properties"].as_object().unwrap();

        for field in ["id", "title", "description", "status", "createdAt"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
        assert!(issue.get("$schema").is_none());
    }

    #[test]
    fn test_status_enum_is_documented() {
        let doc = document();
        let text = doc["components"]["schemas"]["CreateIssueRequest"].to_string();
        for status in ["open", "in-progress", "closed"] {
            assert!(text.contains(status), "missing status {status}");
        }
    }
}
