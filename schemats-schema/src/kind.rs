//! Schema node kinds.

use indexmap::IndexMap;

use crate::SchemaId;

/// A primitive value carried by `literal` schemas and template-literal parts.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    BigInt(i128),
    Bool(bool),
    String(String),
    /// A symbol value; only its type can be expressed.
    Symbol,
    Null,
    Undefined,
    /// A plain object value.
    Object,
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i128> for LiteralValue {
    fn from(value: i128) -> Self {
        Self::BigInt(value)
    }
}

/// The value of one enum member.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    String(String),
    Number(f64),
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for EnumValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// One segment of a template-literal schema.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// Literal text, emitted verbatim.
    Text(String),
    /// An interpolated primitive value.
    Value(LiteralValue),
    /// An interpolated schema.
    Schema(SchemaId),
}

impl From<&str> for TemplatePart {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<SchemaId> for TemplatePart {
    fn from(value: SchemaId) -> Self {
        Self::Schema(value)
    }
}

impl From<LiteralValue> for TemplatePart {
    fn from(value: LiteralValue) -> Self {
        Self::Value(value)
    }
}

/// The kind of a schema node together with its kind-specific children.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    String,
    Number,
    Int,
    Nan,
    BigInt,
    Symbol,
    Boolean,
    Date,
    Undefined,
    Null,
    Void,
    Any,
    Unknown,
    Never,
    File,
    Literal(Vec<LiteralValue>),
    /// Member name to value, in declaration order.
    Enum(IndexMap<String, EnumValue>),
    /// Property name to schema, in declaration order.
    Object(IndexMap<String, SchemaId>),
    Array(SchemaId),
    Tuple(Vec<SchemaId>),
    Union {
        options: Vec<SchemaId>,
        /// Discriminator key of a discriminated union.
        discriminator: Option<String>,
    },
    Intersection {
        left: SchemaId,
        right: SchemaId,
    },
    Record {
        key: SchemaId,
        value: SchemaId,
    },
    Map {
        key: SchemaId,
        value: SchemaId,
    },
    Set(SchemaId),
    Promise(SchemaId),
    TemplateLiteral(Vec<TemplatePart>),
    /// A deferred reference, bound once the target exists.
    Lazy(Option<SchemaId>),
    Pipe {
        input: SchemaId,
        output: SchemaId,
    },
    Optional(SchemaId),
    NonOptional(SchemaId),
    Nullable(SchemaId),
    Readonly(SchemaId),
    Default(SchemaId),
    Prefault(SchemaId),
    Catch(SchemaId),
    Success(SchemaId),
    /// An opaque validator function (e.g. an `instanceof` check).
    Custom,
    /// An arbitrary output transformation.
    Transform,
    /// A kind the generator has no mapping for.
    Unsupported(String),
}

impl SchemaKind {
    /// The schema system's name for this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Int => "int",
            Self::Nan => "nan",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Void => "void",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::File => "file",
            Self::Literal(_) => "literal",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Tuple(_) => "tuple",
            Self::Union { .. } => "union",
            Self::Intersection { .. } => "intersection",
            Self::Record { .. } => "record",
            Self::Map { .. } => "map",
            Self::Set(_) => "set",
            Self::Promise(_) => "promise",
            Self::TemplateLiteral(_) => "template_literal",
            Self::Lazy(_) => "lazy",
            Self::Pipe { .. } => "pipe",
            Self::Optional(_) => "optional",
            Self::NonOptional(_) => "nonoptional",
            Self::Nullable(_) => "nullable",
            Self::Readonly(_) => "readonly",
            Self::Default(_) => "default",
            Self::Prefault(_) => "prefault",
            Self::Catch(_) => "catch",
            Self::Success(_) => "success",
            Self::Custom => "custom",
            Self::Transform => "transform",
            Self::Unsupported(name) => name,
        }
    }

    /// The single wrapped schema of a modifier kind.
    ///
    /// Returns `None` for kinds that are not single-child wrappers.
    pub fn inner(&self) -> Option<SchemaId> {
        match self {
            Self::Optional(inner)
            | Self::NonOptional(inner)
            | Self::Nullable(inner)
            | Self::Readonly(inner)
            | Self::Default(inner)
            | Self::Prefault(inner)
            | Self::Catch(inner)
            | Self::Success(inner) => Some(*inner),
            _ => None,
        }
    }
}

/// A schema node: its kind plus the node it was derived from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    /// The node this one was cloned from (e.g. by `describe`). Metadata
    /// missing on this node is looked up along this chain.
    pub parent: Option<SchemaId>,
}

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self { kind, parent: None }
    }
}
