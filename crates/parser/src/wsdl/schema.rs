//! Type catalog builder
//!
//! Extracts complex types, simple types, and top-level elements from the
//! embedded schema fragments of a WSDL document into one flat catalog
//! keyed by local (unprefixed) name.

use super::parser::{named_descendants, NamespaceBindings};
use indexmap::IndexMap;
use roxmltree::Node;
use wsdl2openapi_common::{map_scalar, PropertySchema, TypeDefinition};

/// Build the type catalog from every embedded schema fragment
///
/// Each fragment is scanned in three passes (complex types, simple types,
/// elements); a later entry with an already-seen name replaces the earlier
/// definition while keeping its position in the catalog. Within one
/// fragment an element therefore shadows a complex or simple type of the
/// same name. Unnamed constructs are skipped.
pub(crate) fn build_catalog(
    root: Node,
    ns: &NamespaceBindings,
) -> IndexMap<String, TypeDefinition> {
    let mut catalog = IndexMap::new();

    for schema in named_descendants(root, ns.xsd, "schema") {
        for complex in named_descendants(schema, ns.xsd, "complexType") {
            let Some(name) = complex.attribute("name") else {
                continue;
            };
            catalog.insert(name.to_string(), parse_complex_type(complex, ns));
        }

        for simple in named_descendants(schema, ns.xsd, "simpleType") {
            let Some(name) = simple.attribute("name") else {
                continue;
            };
            catalog.insert(name.to_string(), parse_simple_type(simple, ns));
        }

        // Only top-level elements; nested sequence elements belong to
        // their complex type.
        for element in schema.children().filter(|node| {
            node.is_element()
                && node.tag_name().name() == "element"
                && node.tag_name().namespace() == Some(ns.xsd)
        }) {
            let Some(name) = element.attribute("name") else {
                continue;
            };
            catalog.insert(name.to_string(), parse_element(element));
        }
    }

    catalog
}

/// One property per element under any descendant sequence, not only
/// direct children
fn parse_complex_type(complex: Node, ns: &NamespaceBindings) -> TypeDefinition {
    let mut properties = IndexMap::new();

    for sequence in named_descendants(complex, ns.xsd, "sequence") {
        for element in named_descendants(sequence, ns.xsd, "element") {
            let Some(name) = element.attribute("name") else {
                continue;
            };
            properties.insert(
                name.to_string(),
                PropertySchema {
                    scalar: map_scalar(element.attribute("type").unwrap_or("string")),
                    required: element.attribute("minOccurs") != Some("0"),
                    is_array: occurs_as_array(element.attribute("maxOccurs")),
                },
            );
        }
    }

    TypeDefinition::ComplexType { properties }
}

/// `maxOccurs` marks an array when it is `"unbounded"` or an integer
/// above 1
fn occurs_as_array(max_occurs: Option<&str>) -> bool {
    match max_occurs {
        Some("unbounded") => true,
        Some(value) => value.parse::<u64>().map(|n| n > 1).unwrap_or(false),
        None => false,
    }
}

fn parse_simple_type(simple: Node, ns: &NamespaceBindings) -> TypeDefinition {
    let base = named_descendants(simple, ns.xsd, "restriction")
        .next()
        .and_then(|restriction| restriction.attribute("base"))
        .unwrap_or("string");

    TypeDefinition::SimpleType {
        scalar: map_scalar(base),
        base: base.to_string(),
    }
}

fn parse_element(element: Node) -> TypeDefinition {
    let xml_type = element.attribute("type").unwrap_or("string");

    TypeDefinition::ElementType {
        scalar: map_scalar(xml_type),
        xml_type: xml_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurs_as_array() {
        assert!(occurs_as_array(Some("unbounded")));
        assert!(occurs_as_array(Some("2")));
        assert!(occurs_as_array(Some("10")));
        assert!(!occurs_as_array(Some("1")));
        assert!(!occurs_as_array(Some("0")));
        assert!(!occurs_as_array(Some("many")));
        assert!(!occurs_as_array(None));
    }
}
