//! WSDL 1.1 document parsing
//!
//! Extracts operations, messages, type definitions, bindings, and service
//! endpoints from a WSDL document into a `ServiceDescriptor`.
//!
//! ## Leniency
//!
//! Absent optional structure (documentation, bindings, ports, type
//! attributes) degrades to documented defaults, and message or type
//! references that do not resolve yield absent values instead of errors.
//! Only malformed XML fails a parse.
//!
//! ## Usage
//! ```rust,ignore
//! use wsdl2openapi_parser::WsdlParser;
//!
//! let descriptor = WsdlParser::from_xml(&wsdl_text)?.parse();
//! ```

mod parser;
mod schema;

pub use parser::WsdlParser;
