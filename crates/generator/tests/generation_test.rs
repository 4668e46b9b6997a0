//! Integration tests for OpenAPI document generation

use serde_json::json;
use wsdl2openapi_generator::{generate, OpenApiDocument};
use wsdl2openapi_parser::parse_wsdl;

const GET_USER_WSDL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions name="UserService"
             targetNamespace="http://example.com/users"
             xmlns="http://schemas.xmlsoap.org/wsdl/"
             xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
             xmlns:tns="http://example.com/users"
             xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <message name="GetUserRequest">
    <part name="id" type="xsd:int"/>
  </message>
  <message name="GetUserResponse">
    <part name="name" type="xsd:string"/>
  </message>
  <portType name="UserPort">
    <operation name="GetUser">
      <input message="tns:GetUserRequest"/>
      <output message="tns:GetUserResponse"/>
    </operation>
  </portType>
  <service name="UserService">
    <port name="UserPortSoap" binding="tns:UserBinding">
      <soap:address location="https://api.example.com/soap/users"/>
    </port>
  </service>
</definitions>"#;

fn generate_from(wsdl: &str) -> OpenApiDocument {
    let descriptor = parse_wsdl(wsdl).unwrap();
    generate(&descriptor)
}

#[test]
fn test_get_user_json_schemas() {
    let document = generate_from(GET_USER_WSDL);
    let value = serde_json::to_value(&document).unwrap();

    let post = &value["paths"]["/GetUser"]["post"];

    assert_eq!(
        post["requestBody"]["content"]["application/json"]["schema"],
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer", "format": "int32"}
            },
            "required": ["id"]
        })
    );

    let response_schema = &post["responses"]["200"]["content"]["application/json"]["schema"];
    assert_eq!(
        *response_schema,
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"}
            }
        })
    );
    // Output properties are never required.
    assert!(response_schema.get("required").is_none());
}

#[test]
fn test_operation_metadata_and_info() {
    let document = generate_from(GET_USER_WSDL);

    assert_eq!(document.openapi, "3.0.0");
    assert_eq!(document.info.title, "UserService");
    assert_eq!(document.info.version, "1.0.0");
    assert_eq!(document.info.contact.name, "API Support");

    let item = &document.paths["/GetUser"];
    assert_eq!(item.post.summary, "GetUser");
    assert_eq!(item.post.operation_id, "GetUser");
    assert_eq!(item.post.description, "SOAP operation: GetUser");
    assert_eq!(item.post.tags, vec!["SOAP Operations".to_string()]);
}

#[test]
fn test_request_content_types() {
    let document = generate_from(GET_USER_WSDL);

    let content = &document.paths["/GetUser"].post.request_body.content;
    let keys: Vec<&str> = content.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["text/xml", "application/soap+xml", "application/json"]
    );

    let example = content["text/xml"].schema.example.as_deref().unwrap();
    assert!(example.contains("<GetUser xmlns=\"http://example.com/service\">"));
    assert!(example.contains("soap:Envelope"));
}

#[test]
fn test_response_envelopes() {
    let document = generate_from(GET_USER_WSDL);

    let responses = &document.paths["/GetUser"].post.responses;

    let success = responses["200"].content["text/xml"]
        .schema
        .example
        .as_deref()
        .unwrap();
    assert!(success.contains("<GetUserResponse xmlns=\"http://example.com/service\">"));

    let fault = responses["500"].content["text/xml"]
        .schema
        .example
        .as_deref()
        .unwrap();
    assert!(fault.contains("<faultcode>soap:Server</faultcode>"));
    assert!(fault.contains("<faultstring>Server Error</faultstring>"));
}

#[test]
fn test_header_parameters() {
    let document = generate_from(GET_USER_WSDL);

    let parameters = &document.paths["/GetUser"].post.parameters;
    assert_eq!(parameters.len(), 2);

    let soap_action = &parameters[0];
    assert_eq!(soap_action.name, "SOAPAction");
    assert_eq!(soap_action.location, "header");
    assert!(!soap_action.required);

    let content_type = &parameters[1];
    assert_eq!(content_type.name, "Content-Type");
    assert!(content_type.required);
    assert_eq!(
        content_type.schema.enum_values,
        vec!["text/xml".to_string(), "application/soap+xml".to_string()]
    );
    assert_eq!(
        content_type.schema.default_value.as_deref(),
        Some("text/xml")
    );
}

#[test]
fn test_server_url_strips_path() {
    let document = generate_from(GET_USER_WSDL);

    assert_eq!(document.servers.len(), 1);
    assert_eq!(document.servers[0].url, "https://api.example.com");
    assert_eq!(document.servers[0].description, "SOAP Service Endpoint");
}

#[test]
fn test_no_absolute_location_means_no_servers() {
    let wsdl = r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
                 xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/">
      <portType name="Port">
        <operation name="Ping"/>
      </portType>
      <service name="Svc">
        <port name="P" binding="tns:B">
          <soap:address location="/soap/relative"/>
        </port>
      </service>
    </definitions>"#;

    let document = generate_from(wsdl);
    assert!(document.servers.is_empty());
    assert_eq!(document.paths.len(), 1);
}

#[test]
fn test_operation_without_messages_has_no_json_content() {
    let wsdl = r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/">
      <portType name="Port">
        <operation name="Ping"/>
      </portType>
    </definitions>"#;

    let document = generate_from(wsdl);

    let post = &document.paths["/Ping"].post;
    assert!(!post.request_body.content.contains_key("application/json"));
    assert!(!post.responses["200"].content.contains_key("application/json"));
    // The XML entries are always present.
    assert!(post.request_body.content.contains_key("text/xml"));
    assert!(post.request_body.content.contains_key("application/soap+xml"));
}

#[test]
fn test_duplicate_operation_names_last_wins() {
    let wsdl = r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
                 xmlns:tns="http://example.com/dup">
      <message name="SyncRequest">
        <part name="token" type="xsd:string"/>
      </message>
      <portType name="PortA">
        <operation name="Sync">
          <input message="tns:SyncRequest"/>
        </operation>
        <operation name="Reset"/>
      </portType>
      <portType name="PortB">
        <operation name="Sync"/>
      </portType>
    </definitions>"#;

    let document = generate_from(wsdl);

    // Three operations, two distinct names.
    assert_eq!(document.paths.len(), 2);
    let keys: Vec<&str> = document.paths.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["/Sync", "/Reset"]);

    // PortB's Sync has no input, so the surviving entry carries no JSON
    // request content.
    let sync = &document.paths["/Sync"].post;
    assert!(!sync.request_body.content.contains_key("application/json"));
}

#[test]
fn test_component_schemas() {
    let wsdl = r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
                 xmlns:xsd="http://www.w3.org/2001/XMLSchema">
      <types>
        <xsd:schema>
          <xsd:complexType name="User">
            <xsd:sequence>
              <xsd:element name="id" type="xsd:long"/>
              <xsd:element name="nick" type="xsd:string" minOccurs="0"/>
              <xsd:element name="roles" type="xsd:string" maxOccurs="unbounded"/>
            </xsd:sequence>
          </xsd:complexType>
          <xsd:complexType name="Notes">
            <xsd:sequence>
              <xsd:element name="note" type="xsd:string" minOccurs="0"/>
            </xsd:sequence>
          </xsd:complexType>
          <xsd:simpleType name="Score">
            <xsd:restriction base="xsd:double"/>
          </xsd:simpleType>
          <xsd:element name="Timestamp" type="xsd:dateTime"/>
        </xsd:schema>
      </types>
    </definitions>"#;

    let document = generate_from(wsdl);
    let value = serde_json::to_value(&document).unwrap();
    let schemas = &value["components"]["schemas"];

    assert_eq!(
        schemas["User"],
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "nick": {"type": "string"},
                "roles": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["id", "roles"]
        })
    );

    // All-optional complex types omit the required list entirely.
    assert!(schemas["Notes"].get("required").is_none());

    // Simple and element types emit the mapped primitive schema; the raw
    // XSD name is not carried into the output.
    assert_eq!(
        schemas["Score"],
        json!({"type": "number", "format": "double"})
    );
    assert_eq!(
        schemas["Timestamp"],
        json!({"type": "string", "format": "date-time"})
    );
}

#[test]
fn test_json_round_trip() {
    let document = generate_from(GET_USER_WSDL);

    let rendered = document.to_json().unwrap();
    let reparsed: OpenApiDocument = serde_json::from_str(&rendered).unwrap();

    assert_eq!(reparsed, document);
}

#[test]
fn test_yaml_round_trip() {
    let document = generate_from(GET_USER_WSDL);

    let rendered = document.to_yaml().unwrap();
    let reparsed: OpenApiDocument = serde_yaml::from_str(&rendered).unwrap();

    assert_eq!(reparsed, document);
}

#[test]
fn test_json_key_order_is_stable() {
    let document = generate_from(GET_USER_WSDL);
    let rendered = document.to_json().unwrap();

    let openapi_pos = rendered.find("\"openapi\"").unwrap();
    let info_pos = rendered.find("\"info\"").unwrap();
    let paths_pos = rendered.find("\"paths\"").unwrap();
    let components_pos = rendered.find("\"components\"").unwrap();

    assert!(openapi_pos < info_pos);
    assert!(info_pos < paths_pos);
    assert!(paths_pos < components_pos);
}
