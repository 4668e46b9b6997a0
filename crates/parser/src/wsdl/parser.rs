//! WSDL document parser

use super::schema;
use roxmltree::{Document, Node};
use wsdl2openapi_common::{
    Binding, BindingOperation, ConverterError, Fault, Message, MessagePart, Operation, Result,
    ServiceDescriptor, ServiceEndpoint, ServicePort,
};

pub(crate) const WSDL_NS: &str = "http://schemas.xmlsoap.org/wsdl/";
pub(crate) const SOAP_NS: &str = "http://schemas.xmlsoap.org/wsdl/soap/";
pub(crate) const SOAP12_NS: &str = "http://schemas.xmlsoap.org/wsdl/soap12/";
pub(crate) const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

const DEFAULT_SERVICE_NAME: &str = "UnknownService";
const DEFAULT_DESCRIPTION: &str = "SOAP Web Service converted from WSDL";
const EMPTY_DESCRIPTION: &str = "No description available";
const DEFAULT_TRANSPORT: &str = "http://schemas.xmlsoap.org/soap/http";
const DEFAULT_STYLE: &str = "document";

/// Namespace bindings in effect for one parse call
///
/// Built fresh per invocation, so concurrent parses on independent
/// documents share no state.
pub(crate) struct NamespaceBindings<'a> {
    pub(crate) wsdl: &'static str,
    pub(crate) soap: &'static str,
    pub(crate) soap12: &'static str,
    pub(crate) xsd: &'static str,
    pub(crate) target: Option<&'a str>,
}

impl<'a> NamespaceBindings<'a> {
    fn for_document(root: &Node<'a, '_>) -> Self {
        Self {
            wsdl: WSDL_NS,
            soap: SOAP_NS,
            soap12: SOAP12_NS,
            xsd: XSD_NS,
            target: root.attribute("targetNamespace"),
        }
    }
}

/// WSDL 1.1 document parser
///
/// Owns the parsed XML DOM for one document; `parse` extracts the
/// `ServiceDescriptor` from it. Syntax errors are reported by
/// [`WsdlParser::from_xml`]; extraction itself cannot fail.
pub struct WsdlParser<'input> {
    document: Document<'input>,
}

impl<'input> WsdlParser<'input> {
    /// Load a WSDL document from XML text
    pub fn from_xml(content: &'input str) -> Result<Self> {
        let document =
            Document::parse(content).map_err(|e| ConverterError::Syntax(e.to_string()))?;
        Ok(Self { document })
    }

    /// Extract the service descriptor from the loaded document
    pub fn parse(&self) -> ServiceDescriptor {
        let root = self.document.root_element();
        let ns = NamespaceBindings::for_document(&root);

        ServiceDescriptor {
            name: service_name(root, &ns),
            description: service_description(root, &ns),
            target_namespace: ns.target.map(str::to_string),
            operations: extract_operations(root, &ns),
            types: schema::build_catalog(root, &ns),
            bindings: extract_bindings(root, &ns),
            services: extract_services(root, &ns),
        }
    }
}

/// All element descendants of `scope` with the given expanded name,
/// in document order
pub(crate) fn named_descendants<'a, 'input>(
    scope: Node<'a, 'input>,
    namespace: &'static str,
    local: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    scope.descendants().filter(move |node| {
        node.is_element()
            && node.tag_name().name() == local
            && node.tag_name().namespace() == Some(namespace)
    })
}

/// Strip a namespace prefix from a QName, if present
fn strip_prefix(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Trimmed text of the first nested documentation element, when non-empty
fn documentation(scope: Node, ns: &NamespaceBindings) -> Option<String> {
    named_descendants(scope, ns.wsdl, "documentation")
        .next()
        .and_then(|node| node.text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn service_name(root: Node, ns: &NamespaceBindings) -> String {
    named_descendants(root, ns.wsdl, "service")
        .next()
        .and_then(|service| service.attribute("name"))
        .unwrap_or(DEFAULT_SERVICE_NAME)
        .to_string()
}

/// The first documentation element anywhere in the document supplies the
/// description; an element with empty text falls back differently from a
/// missing element.
fn service_description(root: Node, ns: &NamespaceBindings) -> String {
    match named_descendants(root, ns.wsdl, "documentation").next() {
        Some(node) => {
            let text = node.text().map(str::trim).unwrap_or("");
            if text.is_empty() {
                EMPTY_DESCRIPTION.to_string()
            } else {
                text.to_string()
            }
        }
        None => DEFAULT_DESCRIPTION.to_string(),
    }
}

/// Operations from every port type, in document order, duplicates kept
fn extract_operations(root: Node, ns: &NamespaceBindings) -> Vec<Operation> {
    let mut operations = Vec::new();

    for port_type in named_descendants(root, ns.wsdl, "portType") {
        for op in named_descendants(port_type, ns.wsdl, "operation") {
            operations.push(Operation {
                name: op.attribute("name").unwrap_or_default().to_string(),
                documentation: documentation(op, ns),
                input: resolve_message(root, op, "input", ns),
                output: resolve_message(root, op, "output", ns),
                faults: extract_faults(op, ns),
            });
        }
    }

    operations
}

/// Resolve an operation's input or output message declaration
///
/// The `message` attribute is prefix-stripped and looked up against the
/// document-level message definitions. A missing declaration, attribute,
/// or definition yields `None`.
fn resolve_message(
    root: Node,
    operation: Node,
    direction: &'static str,
    ns: &NamespaceBindings,
) -> Option<Message> {
    let declaration = named_descendants(operation, ns.wsdl, direction).next()?;
    let reference = declaration.attribute("message")?;
    let local = strip_prefix(reference);

    let definition = named_descendants(root, ns.wsdl, "message")
        .find(|message| message.attribute("name") == Some(local))?;

    Some(parse_message(definition, ns))
}

fn parse_message(definition: Node, ns: &NamespaceBindings) -> Message {
    let parts = named_descendants(definition, ns.wsdl, "part")
        .map(|part| MessagePart {
            name: part.attribute("name").map(str::to_string),
            element: part.attribute("element").map(str::to_string),
            type_ref: part.attribute("type").map(str::to_string),
        })
        .collect();

    Message {
        name: definition.attribute("name").unwrap_or_default().to_string(),
        parts,
    }
}

fn extract_faults(operation: Node, ns: &NamespaceBindings) -> Vec<Fault> {
    named_descendants(operation, ns.wsdl, "fault")
        .map(|fault| Fault {
            name: fault.attribute("name").unwrap_or_default().to_string(),
            message: fault.attribute("message").unwrap_or_default().to_string(),
            documentation: documentation(fault, ns),
        })
        .collect()
}

fn extract_bindings(root: Node, ns: &NamespaceBindings) -> Vec<Binding> {
    named_descendants(root, ns.wsdl, "binding")
        .map(|binding| {
            let soap_binding = named_descendants(binding, ns.soap, "binding").next();
            Binding {
                name: binding.attribute("name").unwrap_or_default().to_string(),
                type_ref: binding.attribute("type").map(str::to_string),
                transport: soap_binding
                    .and_then(|b| b.attribute("transport"))
                    .unwrap_or(DEFAULT_TRANSPORT)
                    .to_string(),
                style: soap_binding
                    .and_then(|b| b.attribute("style"))
                    .unwrap_or(DEFAULT_STYLE)
                    .to_string(),
                operations: extract_binding_operations(binding, ns),
            }
        })
        .collect()
}

fn extract_binding_operations(binding: Node, ns: &NamespaceBindings) -> Vec<BindingOperation> {
    named_descendants(binding, ns.wsdl, "operation")
        .map(|op| BindingOperation {
            name: op.attribute("name").unwrap_or_default().to_string(),
            soap_action: named_descendants(op, ns.soap, "operation")
                .next()
                .and_then(|soap_op| soap_op.attribute("soapAction"))
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

fn extract_services(root: Node, ns: &NamespaceBindings) -> Vec<ServiceEndpoint> {
    named_descendants(root, ns.wsdl, "service")
        .map(|service| ServiceEndpoint {
            name: service.attribute("name").unwrap_or_default().to_string(),
            documentation: documentation(service, ns),
            ports: named_descendants(service, ns.wsdl, "port")
                .map(|port| ServicePort {
                    name: port.attribute("name").unwrap_or_default().to_string(),
                    binding: port.attribute("binding").map(str::to_string),
                    location: port_location(port, ns),
                })
                .collect(),
        })
        .collect()
}

/// The SOAP 1.1 address wins over the SOAP 1.2 one when both are present
fn port_location(port: Node, ns: &NamespaceBindings) -> String {
    named_descendants(port, ns.soap, "address")
        .next()
        .or_else(|| named_descendants(port, ns.soap12, "address").next())
        .and_then(|address| address.attribute("location"))
        .unwrap_or_default()
        .to_string()
}
