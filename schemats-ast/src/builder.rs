//! Factory for type nodes.

use crate::{Keyword, LiteralType, PropertySignature, TemplateSpan, TypeAlias, TypeNode};

/// Creates type nodes.
///
/// This is the factory handed to override hooks, so callers can build
/// replacement output without depending on the node representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeBuilder;

impl NodeBuilder {
    pub fn keyword(&self, keyword: Keyword) -> TypeNode {
        TypeNode::Keyword(keyword)
    }

    pub fn string_literal(&self, value: impl Into<String>) -> TypeNode {
        TypeNode::Literal(LiteralType::String(value.into()))
    }

    pub fn numeric_literal(&self, value: f64) -> TypeNode {
        TypeNode::Literal(LiteralType::Number(value))
    }

    pub fn bigint_literal(&self, value: i128) -> TypeNode {
        TypeNode::Literal(LiteralType::BigInt(value))
    }

    pub fn boolean_literal(&self, value: bool) -> TypeNode {
        TypeNode::Literal(LiteralType::Boolean(value))
    }

    pub fn null_literal(&self) -> TypeNode {
        TypeNode::Literal(LiteralType::Null)
    }

    /// A type reference without type arguments (`Date`).
    pub fn reference(&self, name: impl Into<String>) -> TypeNode {
        self.generic(name, Vec::new())
    }

    /// A type reference with type arguments (`Map<K, V>`).
    pub fn generic(&self, name: impl Into<String>, args: Vec<TypeNode>) -> TypeNode {
        TypeNode::Reference {
            name: name.into(),
            args,
        }
    }

    pub fn union(&self, types: Vec<TypeNode>) -> TypeNode {
        TypeNode::Union(types)
    }

    pub fn intersection(&self, types: Vec<TypeNode>) -> TypeNode {
        TypeNode::Intersection(types)
    }

    pub fn array(&self, element: TypeNode) -> TypeNode {
        TypeNode::Array(Box::new(element))
    }

    pub fn tuple(&self, elements: Vec<TypeNode>) -> TypeNode {
        TypeNode::Tuple(elements)
    }

    pub fn type_literal(&self, members: Vec<PropertySignature>) -> TypeNode {
        TypeNode::TypeLiteral(members)
    }

    pub fn property_signature(&self, name: impl AsRef<str>, ty: TypeNode) -> PropertySignature {
        PropertySignature::new(name, ty)
    }

    /// `readonly T`.
    pub fn readonly(&self, ty: TypeNode) -> TypeNode {
        TypeNode::Readonly(Box::new(ty))
    }

    pub fn template_literal(&self, head: impl Into<String>, spans: Vec<TemplateSpan>) -> TypeNode {
        TypeNode::TemplateLiteral {
            head: head.into(),
            spans,
        }
    }

    pub fn template_span(&self, ty: TypeNode, text: impl Into<String>) -> TemplateSpan {
        TemplateSpan {
            ty,
            text: text.into(),
        }
    }

    pub fn type_alias(&self, name: impl Into<String>, ty: TypeNode) -> TypeAlias {
        TypeAlias::new(name, ty)
    }
}
