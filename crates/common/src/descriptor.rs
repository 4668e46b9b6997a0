//! Intermediate representation of a parsed WSDL document
//!
//! The parser produces a [`ServiceDescriptor`] tree; the generator consumes
//! it read-only. Every field that the source document may omit is either an
//! explicit `Option` or carries the documented default, so the tree is
//! always fully populated after parsing.

use crate::ScalarType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of the intermediate representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name (`"UnknownService"` when the document declares none)
    pub name: String,

    /// Service description from the first documentation element
    pub description: String,

    /// Root `targetNamespace` attribute, when present
    #[serde(rename = "targetNamespace")]
    pub target_namespace: Option<String>,

    /// Port-type operations in document order, duplicates preserved
    pub operations: Vec<Operation>,

    /// Named type definitions from embedded schema fragments
    pub types: IndexMap<String, TypeDefinition>,

    /// SOAP bindings
    pub bindings: Vec<Binding>,

    /// Service endpoints with their ports
    pub services: Vec<ServiceEndpoint>,
}

/// Abstract operation declared by a port type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,

    #[serde(default)]
    pub documentation: Option<String>,

    /// Resolved input message; `None` when the declaration is absent or
    /// the message reference does not resolve
    #[serde(default)]
    pub input: Option<Message>,

    /// Resolved output message, same leniency as `input`
    #[serde(default)]
    pub output: Option<Message>,

    #[serde(default)]
    pub faults: Vec<Fault>,
}

/// A document-level message definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub name: String,

    /// Message parts in declaration order
    pub parts: Vec<MessagePart>,
}

/// One part of a message
///
/// `element` and `type_ref` are independent optional references, not a
/// tagged union: a part may carry both, either, or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub element: Option<String>,

    #[serde(rename = "type", default)]
    pub type_ref: Option<String>,
}

/// Fault declared by an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fault {
    pub name: String,

    /// Reference to the fault message
    pub message: String,

    #[serde(default)]
    pub documentation: Option<String>,
}

/// A named type extracted from an embedded schema fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDefinition {
    /// Complex type with named properties in declaration order
    ComplexType {
        properties: IndexMap<String, PropertySchema>,
    },

    /// Simple type restriction; `base` retains the raw XSD base name for
    /// diagnostics
    SimpleType { scalar: ScalarType, base: String },

    /// Top-level element; `xml_type` retains the raw XSD type name
    ElementType {
        scalar: ScalarType,
        #[serde(rename = "xmlType")]
        xml_type: String,
    },
}

/// Schema facts recorded for one complex-type property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    pub scalar: ScalarType,

    /// `false` only when the element declares `minOccurs="0"`
    pub required: bool,

    /// `true` when `maxOccurs` is `"unbounded"` or an integer above 1
    #[serde(rename = "isArray")]
    pub is_array: bool,
}

/// SOAP binding for a port type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,

    /// The bound WSDL port type reference, when declared
    #[serde(rename = "type", default)]
    pub type_ref: Option<String>,

    /// SOAP transport URI (`"http://schemas.xmlsoap.org/soap/http"` when
    /// the binding declares none)
    pub transport: String,

    /// SOAP style (`"document"` when the binding declares none)
    pub style: String,

    pub operations: Vec<BindingOperation>,
}

/// Per-operation binding information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingOperation {
    pub name: String,

    /// `soapAction` attribute, empty when absent
    #[serde(rename = "soapAction")]
    pub soap_action: String,
}

/// A `<service>` element with its ports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub name: String,

    #[serde(default)]
    pub documentation: Option<String>,

    pub ports: Vec<ServicePort>,
}

/// A service port and its resolved address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePort {
    pub name: String,

    #[serde(default)]
    pub binding: Option<String>,

    /// Location of the SOAP 1.1 address element, else the SOAP 1.2 one,
    /// else empty
    pub location: String,
}
