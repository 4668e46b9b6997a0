//! OpenAPI 3.0 document model
//!
//! The subset of OpenAPI 3.0 that WSDL conversion produces. Maps are
//! insertion-ordered so the JSON and YAML renderings keep a stable key
//! order equal to construction order, and both renderings deserialize back
//! into a structurally equal tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use wsdl2openapi_common::ScalarType;

/// OpenAPI document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version, always "3.0.0"
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Server entries; empty when no port declares an absolute URL
    #[serde(default)]
    pub servers: Vec<Server>,

    /// One POST path per operation, keyed "/" + operation name
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components
    pub components: Components,

    /// Fixed tag list
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// API information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
}

/// Server information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    pub description: String,
}

/// Grouping tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: String,
}

/// Operations for a path; SOAP conversion only ever emits POST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    pub post: PathOperation,
}

/// A single POST operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathOperation {
    pub tags: Vec<String>,

    pub summary: String,

    pub description: String,

    #[serde(rename = "operationId")]
    pub operation_id: String,

    #[serde(rename = "requestBody")]
    pub request_body: RequestBody,

    pub responses: IndexMap<String, Response>,

    pub parameters: Vec<Parameter>,
}

/// Request body with per-content-type schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub description: String,

    pub required: bool,

    pub content: IndexMap<String, MediaType>,
}

/// Response with per-content-type schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: Schema,
}

/// Header parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Location: always "header" here
    #[serde(rename = "in")]
    pub location: String,

    pub description: String,

    pub required: bool,

    pub schema: Schema,
}

/// Schema object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    /// Required property names; omitted entirely when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Reusable components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

impl Schema {
    fn base(schema_type: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            format: None,
            example: None,
            properties: IndexMap::new(),
            required: Vec::new(),
            items: None,
            enum_values: Vec::new(),
            default_value: None,
        }
    }

    /// Plain string schema
    pub fn string() -> Self {
        Self::base("string")
    }

    /// String schema carrying an example payload
    pub fn string_example(example: String) -> Self {
        Self {
            example: Some(example),
            ..Self::base("string")
        }
    }

    /// Generic open object schema
    pub fn object() -> Self {
        Self::base("object")
    }

    /// Primitive schema for a mapped XSD scalar
    pub fn from_scalar(scalar: ScalarType) -> Self {
        Self {
            format: scalar.format.map(|format| format.as_str().to_string()),
            ..Self::base(scalar.kind.as_str())
        }
    }

    /// Array schema wrapping an item schema
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::base("array")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsdl2openapi_common::map_scalar;

    #[test]
    fn test_scalar_schema_carries_format() {
        let schema = Schema::from_scalar(map_scalar("xsd:long"));
        assert_eq!(schema.schema_type, "integer");
        assert_eq!(schema.format.as_deref(), Some("int64"));

        let schema = Schema::from_scalar(map_scalar("xsd:string"));
        assert_eq!(schema.schema_type, "string");
        assert_eq!(schema.format, None);
    }

    #[test]
    fn test_empty_collections_are_not_serialized() {
        let value = serde_json::to_value(Schema::object()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["type"], "object");
    }
}
