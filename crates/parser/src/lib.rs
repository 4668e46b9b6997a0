//! WSDL parsing for SOAP service descriptions
//!
//! This crate parses WSDL 1.1 documents into the intermediate
//! representation consumed by the OpenAPI generator
//! (`ServiceDescriptor`).
//!
//! ## Parsing Strategy
//!
//! The document is loaded into a read-only XML DOM and walked in one pass:
//! - `portType` operations become `Operation` entries, in document order
//!   and without deduplication
//! - embedded `schema` fragments become a flat type catalog
//! - `binding` and `service` elements become binding and endpoint entries
//!
//! Missing optional structure degrades to documented defaults, and message
//! references that do not resolve become absent values; only malformed XML
//! aborts a parse.

mod wsdl;

pub use wsdl::WsdlParser;

use wsdl2openapi_common::{Result, ServiceDescriptor};

/// Parse a WSDL 1.1 document into a [`ServiceDescriptor`]
///
/// # Arguments
/// * `content` - the WSDL document as UTF-8 text
///
/// # Returns
/// * `ServiceDescriptor` - intermediate representation of the service
pub fn parse_wsdl(content: &str) -> Result<ServiceDescriptor> {
    Ok(WsdlParser::from_xml(content)?.parse())
}
