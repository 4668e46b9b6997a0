//! OpenAPI 3.0 document generation from a parsed WSDL descriptor
//!
//! Consumes the `ServiceDescriptor` produced by the parser and builds an
//! in-memory [`OpenApiDocument`], plus its JSON and YAML renderings.
//! Generation is total: every descriptor field already carries a parse-time
//! default, so there is no failure path.

mod document;
mod soap;

pub use document::{
    Components, Contact, Info, MediaType, OpenApiDocument, Parameter, PathItem, PathOperation,
    RequestBody, Response, Schema, Server, Tag,
};

use indexmap::IndexMap;
use url::Url;
use wsdl2openapi_common::{
    map_scalar, Message, MessagePart, Operation, Result, ScalarType, ServiceDescriptor,
    TypeDefinition,
};

const OPENAPI_VERSION: &str = "3.0.0";
const API_VERSION: &str = "1.0.0";
const TAG_NAME: &str = "SOAP Operations";

const TEXT_XML: &str = "text/xml";
const SOAP_XML: &str = "application/soap+xml";
const APPLICATION_JSON: &str = "application/json";

/// OpenAPI document generator
///
/// Transforms a [`ServiceDescriptor`] into an OpenAPI 3.0 document tree:
/// one POST path per operation, component schemas from the type catalog,
/// and synthesized SOAP envelope examples.
pub struct OpenApiGenerator<'a> {
    descriptor: &'a ServiceDescriptor,
}

impl<'a> OpenApiGenerator<'a> {
    /// Create a generator over a parsed descriptor
    pub fn new(descriptor: &'a ServiceDescriptor) -> Self {
        Self { descriptor }
    }

    /// Generate the OpenAPI document
    pub fn generate(&self) -> OpenApiDocument {
        // Insert keeps the first occurrence's position and replaces the
        // value, so operations sharing a name resolve last-wins.
        let mut paths = IndexMap::new();
        for operation in &self.descriptor.operations {
            paths.insert(format!("/{}", operation.name), self.path_item(operation));
        }

        OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: self.descriptor.name.clone(),
                description: self.descriptor.description.clone(),
                version: API_VERSION.to_string(),
                contact: Contact {
                    name: "API Support".to_string(),
                },
            },
            servers: self.servers(),
            paths,
            components: Components {
                schemas: self.component_schemas(),
            },
            tags: vec![Tag {
                name: TAG_NAME.to_string(),
                description: "SOAP web service operations".to_string(),
            }],
        }
    }

    /// The first port location that parses as an absolute URL contributes
    /// the single server entry, path component stripped. No placeholder is
    /// synthesized when none qualifies.
    fn servers(&self) -> Vec<Server> {
        for service in &self.descriptor.services {
            for port in &service.ports {
                let Ok(parsed) = Url::parse(&port.location) else {
                    continue;
                };
                let Some(host) = parsed.host_str() else {
                    continue;
                };
                let url = match parsed.port() {
                    Some(p) => format!("{}://{}:{}", parsed.scheme(), host, p),
                    None => format!("{}://{}", parsed.scheme(), host),
                };
                return vec![Server {
                    url,
                    description: "SOAP Service Endpoint".to_string(),
                }];
            }
        }

        Vec::new()
    }

    fn path_item(&self, operation: &Operation) -> PathItem {
        let request_example = soap::request_envelope(&operation.name);

        let mut request_content = IndexMap::new();
        request_content.insert(
            TEXT_XML.to_string(),
            MediaType {
                schema: Schema::string_example(request_example.clone()),
            },
        );
        request_content.insert(
            SOAP_XML.to_string(),
            MediaType {
                schema: Schema::string_example(request_example),
            },
        );
        if let Some(input) = &operation.input {
            request_content.insert(
                APPLICATION_JSON.to_string(),
                MediaType {
                    schema: input_schema(input),
                },
            );
        }

        let mut success_content = IndexMap::new();
        success_content.insert(
            TEXT_XML.to_string(),
            MediaType {
                schema: Schema::string_example(soap::response_envelope(&operation.name)),
            },
        );
        if let Some(output) = &operation.output {
            success_content.insert(
                APPLICATION_JSON.to_string(),
                MediaType {
                    schema: output_schema(output),
                },
            );
        }

        let mut fault_content = IndexMap::new();
        fault_content.insert(
            TEXT_XML.to_string(),
            MediaType {
                schema: Schema::string_example(soap::fault_envelope().to_string()),
            },
        );

        let mut responses = IndexMap::new();
        responses.insert(
            "200".to_string(),
            Response {
                description: "Successful SOAP response".to_string(),
                content: success_content,
            },
        );
        responses.insert(
            "500".to_string(),
            Response {
                description: "SOAP Fault".to_string(),
                content: fault_content,
            },
        );

        let description = operation
            .documentation
            .clone()
            .unwrap_or_else(|| format!("SOAP operation: {}", operation.name));

        PathItem {
            post: PathOperation {
                tags: vec![TAG_NAME.to_string()],
                summary: operation.name.clone(),
                description,
                operation_id: operation.name.clone(),
                request_body: RequestBody {
                    description: "SOAP request body".to_string(),
                    required: true,
                    content: request_content,
                },
                responses,
                parameters: header_parameters(),
            },
        }
    }

    fn component_schemas(&self) -> IndexMap<String, Schema> {
        let mut schemas = IndexMap::new();

        for (name, definition) in &self.descriptor.types {
            schemas.insert(name.clone(), type_schema(definition));
        }

        schemas
    }
}

/// Generate an OpenAPI document (convenience function)
pub fn generate(descriptor: &ServiceDescriptor) -> OpenApiDocument {
    OpenApiGenerator::new(descriptor).generate()
}

impl OpenApiDocument {
    /// Render as pretty-printed JSON, key order equal to construction order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as block-style YAML with unicode preserved
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// The two header parameters attached to every operation
fn header_parameters() -> Vec<Parameter> {
    vec![
        Parameter {
            name: "SOAPAction".to_string(),
            location: "header".to_string(),
            description: "SOAP Action header".to_string(),
            required: false,
            schema: Schema::string(),
        },
        Parameter {
            name: "Content-Type".to_string(),
            location: "header".to_string(),
            description: "Content type".to_string(),
            required: true,
            schema: Schema {
                enum_values: vec![TEXT_XML.to_string(), SOAP_XML.to_string()],
                default_value: Some(TEXT_XML.to_string()),
                ..Schema::string()
            },
        },
    ]
}

/// Object schema for an input message; every property is required
fn input_schema(message: &Message) -> Schema {
    if message.parts.is_empty() {
        return Schema::object();
    }

    let mut properties = IndexMap::new();
    let mut required = Vec::new();
    for part in &message.parts {
        let name = part.name.as_deref().unwrap_or("parameter").to_string();
        properties.insert(name.clone(), Schema::from_scalar(part_scalar(part)));
        required.push(name);
    }

    Schema {
        properties,
        required,
        ..Schema::object()
    }
}

/// Object schema for an output message; no property is required
fn output_schema(message: &Message) -> Schema {
    if message.parts.is_empty() {
        return Schema::object();
    }

    let mut properties = IndexMap::new();
    for part in &message.parts {
        let name = part.name.as_deref().unwrap_or("result").to_string();
        properties.insert(name, Schema::from_scalar(part_scalar(part)));
    }

    Schema {
        properties,
        ..Schema::object()
    }
}

/// A part is typed by its type attribute, else its element attribute,
/// else as a plain string
fn part_scalar(part: &MessagePart) -> ScalarType {
    map_scalar(
        part.type_ref
            .as_deref()
            .or(part.element.as_deref())
            .unwrap_or("string"),
    )
}

/// Component schema for one catalog entry
///
/// Complex types become object schemas; simple and element types emit the
/// mapped primitive schema directly, dropping the raw XSD name.
fn type_schema(definition: &TypeDefinition) -> Schema {
    match definition {
        TypeDefinition::ComplexType { properties } => {
            let mut props = IndexMap::new();
            let mut required = Vec::new();
            for (name, property) in properties {
                let scalar_schema = Schema::from_scalar(property.scalar);
                let schema = if property.is_array {
                    Schema::array(scalar_schema)
                } else {
                    scalar_schema
                };
                props.insert(name.clone(), schema);
                if property.required {
                    required.push(name.clone());
                }
            }
            Schema {
                properties: props,
                required,
                ..Schema::object()
            }
        }
        TypeDefinition::SimpleType { scalar, .. } | TypeDefinition::ElementType { scalar, .. } => {
            Schema::from_scalar(*scalar)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsdl2openapi_common::{ScalarKind, ServiceEndpoint, ServicePort};

    fn empty_descriptor() -> ServiceDescriptor {
        ServiceDescriptor {
            name: "Test".to_string(),
            description: "Test service".to_string(),
            target_namespace: None,
            operations: vec![],
            types: IndexMap::new(),
            bindings: vec![],
            services: vec![],
        }
    }

    fn port(location: &str) -> ServicePort {
        ServicePort {
            name: "Port".to_string(),
            binding: None,
            location: location.to_string(),
        }
    }

    #[test]
    fn test_empty_descriptor_generates_skeleton() {
        let document = generate(&empty_descriptor());

        assert_eq!(document.openapi, "3.0.0");
        assert_eq!(document.info.title, "Test");
        assert_eq!(document.info.version, "1.0.0");
        assert!(document.servers.is_empty());
        assert!(document.paths.is_empty());
        assert_eq!(document.tags[0].name, "SOAP Operations");
    }

    #[test]
    fn test_first_absolute_location_wins() {
        let mut descriptor = empty_descriptor();
        descriptor.services = vec![ServiceEndpoint {
            name: "Svc".to_string(),
            documentation: None,
            ports: vec![
                port(""),
                port("/relative/path"),
                port("https://soap.example.com:8443/svc/endpoint"),
                port("http://other.example.com/svc"),
            ],
        }];

        let servers = generate(&descriptor).servers;
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "https://soap.example.com:8443");
    }

    #[test]
    fn test_part_scalar_prefers_type_over_element() {
        let part = MessagePart {
            name: Some("id".to_string()),
            element: Some("tns:GetUserRequest".to_string()),
            type_ref: Some("xsd:int".to_string()),
        };
        assert_eq!(part_scalar(&part).kind, ScalarKind::Integer);

        let part = MessagePart {
            name: None,
            element: Some("tns:GetUserRequest".to_string()),
            type_ref: None,
        };
        assert_eq!(part_scalar(&part).kind, ScalarKind::String);
    }
}
