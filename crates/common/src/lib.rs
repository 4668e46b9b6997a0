//! Common types and utilities for wsdl2openapi
//!
//! This crate contains the intermediate representation shared between the
//! WSDL parser and the OpenAPI generator, the XSD scalar type mapper, and
//! the error types used across the workspace.

use thiserror::Error;

mod descriptor;
mod xsd;

pub use descriptor::{
    Binding, BindingOperation, Fault, Message, MessagePart, Operation, PropertySchema,
    ServiceDescriptor, ServiceEndpoint, ServicePort, TypeDefinition,
};
pub use xsd::{map_scalar, ScalarFormat, ScalarKind, ScalarType};

/// Errors that can occur while converting a WSDL document
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Malformed XML. Fatal; the message carries the underlying parser
    /// diagnostic verbatim.
    #[error("Invalid XML syntax: {0}")]
    Syntax(String),

    /// Failure to acquire the input document (unreachable URL, bad
    /// status). Raised by collaborators before bytes reach the parser,
    /// never by the parser itself.
    #[error("Failed to fetch WSDL document: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;
