//! TypeScript type nodes and declarations.

use crate::escape::is_identifier;

/// Keyword types (`string`, `never`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    String,
    Number,
    BigInt,
    Boolean,
    Symbol,
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Symbol => "symbol",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Void => "void",
            Self::Undefined => "undefined",
        }
    }
}

/// Literal types (`"a"`, `42`, `10n`, `true`, `null`).
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    String(String),
    Number(f64),
    BigInt(i128),
    Boolean(bool),
    Null,
}

/// The name of a property signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyName {
    /// Printed bare: `name`.
    Identifier(String),
    /// Printed quoted: `"string-literal"`.
    StringLiteral(String),
}

impl PropertyName {
    /// Use a bare identifier when `key` is a valid identifier, a string
    /// literal otherwise.
    pub fn from_key(key: &str) -> Self {
        if is_identifier(key) {
            Self::Identifier(key.to_string())
        } else {
            Self::StringLiteral(key.to_string())
        }
    }

    /// The unquoted key text.
    pub fn text(&self) -> &str {
        match self {
            Self::Identifier(name) | Self::StringLiteral(name) => name,
        }
    }
}

/// A member of a type literal.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: PropertyName,
    pub ty: TypeNode,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl PropertySignature {
    pub fn new(name: impl AsRef<str>, ty: TypeNode) -> Self {
        Self {
            name: PropertyName::from_key(name.as_ref()),
            ty,
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// One `${type}text` span of a template literal type.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpan {
    pub ty: TypeNode,
    pub text: String,
}

/// A TypeScript type node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Keyword(Keyword),
    Literal(LiteralType),
    /// A named type, optionally with type arguments (`Date`, `Map<K, V>`).
    Reference { name: String, args: Vec<TypeNode> },
    Array(Box<TypeNode>),
    Tuple(Vec<TypeNode>),
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    TypeLiteral(Vec<PropertySignature>),
    /// `readonly T`, applied to arrays and tuples.
    Readonly(Box<TypeNode>),
    TemplateLiteral {
        head: String,
        spans: Vec<TemplateSpan>,
    },
}

impl TypeNode {
    /// Whether this node needs parentheses as a union/intersection member.
    pub(crate) fn is_compound(&self) -> bool {
        matches!(self, Self::Union(_) | Self::Intersection(_))
    }
}

/// A `type Name = ...;` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub name: String,
    pub ty: TypeNode,
    pub doc: Option<String>,
    pub exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            exported: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }
}

/// Output for one top-level schema: a bare type or a named alias.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Type(TypeNode),
    Alias(TypeAlias),
}

impl Declaration {
    /// The declared name, if this is an alias.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Type(_) => None,
            Self::Alias(alias) => Some(&alias.name),
        }
    }

    /// The declared type.
    pub fn ty(&self) -> &TypeNode {
        match self {
            Self::Type(ty) => ty,
            Self::Alias(alias) => &alias.ty,
        }
    }
}

impl From<TypeNode> for Declaration {
    fn from(value: TypeNode) -> Self {
        Self::Type(value)
    }
}

impl From<TypeAlias> for Declaration {
    fn from(value: TypeAlias) -> Self {
        Self::Alias(value)
    }
}
