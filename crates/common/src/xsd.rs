//! XSD scalar type mapping
//!
//! Maps XSD primitive type names to canonical OpenAPI scalar kinds. This is
//! the single source of truth used both when building the type catalog and
//! when typing message parts during generation.

use serde::{Deserialize, Serialize};

/// Canonical OpenAPI scalar kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
        }
    }
}

/// OpenAPI format qualifier attached to some scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarFormat {
    Int32,
    Int64,
    Double,
    Float,
    Date,
    DateTime,
    Time,
    Byte,
    Binary,
    Uri,
}

impl ScalarFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarFormat::Int32 => "int32",
            ScalarFormat::Int64 => "int64",
            ScalarFormat::Double => "double",
            ScalarFormat::Float => "float",
            ScalarFormat::Date => "date",
            ScalarFormat::DateTime => "date-time",
            ScalarFormat::Time => "time",
            ScalarFormat::Byte => "byte",
            ScalarFormat::Binary => "binary",
            ScalarFormat::Uri => "uri",
        }
    }
}

/// A mapped scalar: kind plus optional format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarType {
    pub kind: ScalarKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ScalarFormat>,
}

impl ScalarType {
    const fn new(kind: ScalarKind, format: Option<ScalarFormat>) -> Self {
        Self { kind, format }
    }
}

/// Map an XSD type name to its canonical scalar
///
/// Any namespace prefix is stripped and the lookup is case-insensitive.
/// Names outside the canonical table, including the empty string, map to a
/// plain string scalar.
///
/// # Examples
/// ```
/// use wsdl2openapi_common::{map_scalar, ScalarFormat, ScalarKind};
///
/// assert_eq!(map_scalar("xsd:int").kind, ScalarKind::Integer);
/// assert_eq!(map_scalar("xsd:int").format, Some(ScalarFormat::Int32));
/// assert_eq!(map_scalar("tns:CustomThing").kind, ScalarKind::String);
/// ```
pub fn map_scalar(xsd_type: &str) -> ScalarType {
    use ScalarFormat::*;
    use ScalarKind::*;

    let local = match xsd_type.split_once(':') {
        Some((_, local)) => local,
        None => xsd_type,
    };

    match local.to_ascii_lowercase().as_str() {
        "string" => ScalarType::new(String, None),
        "int" => ScalarType::new(Integer, Some(Int32)),
        "integer" => ScalarType::new(Integer, None),
        "long" => ScalarType::new(Integer, Some(Int64)),
        "short" => ScalarType::new(Integer, Some(Int32)),
        "byte" => ScalarType::new(Integer, Some(Int32)),
        "double" => ScalarType::new(Number, Some(Double)),
        "float" => ScalarType::new(Number, Some(Float)),
        "decimal" => ScalarType::new(Number, None),
        "boolean" => ScalarType::new(Boolean, None),
        "date" => ScalarType::new(String, Some(Date)),
        "datetime" => ScalarType::new(String, Some(DateTime)),
        "time" => ScalarType::new(String, Some(Time)),
        "base64binary" => ScalarType::new(String, Some(Byte)),
        "hexbinary" => ScalarType::new(String, Some(Binary)),
        "anyuri" => ScalarType::new(String, Some(Uri)),
        _ => ScalarType::new(String, None),
    }
}
