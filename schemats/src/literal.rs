//! Mapping primitive values to literal types.

use schemats_ast::{Keyword, NodeBuilder, TypeNode};
use schemats_schema::{EnumValue, LiteralValue};

/// The literal type of a primitive value.
///
/// Values without a literal form fall back to the closest type: a symbol
/// becomes `symbol`, a plain object `null`.
pub(crate) fn literal_type(f: &NodeBuilder, value: &LiteralValue) -> TypeNode {
    match value {
        LiteralValue::Number(number) => f.numeric_literal(*number),
        LiteralValue::BigInt(number) => f.bigint_literal(*number),
        LiteralValue::Bool(flag) => f.boolean_literal(*flag),
        LiteralValue::String(text) => f.string_literal(text.as_str()),
        LiteralValue::Symbol => f.keyword(Keyword::Symbol),
        LiteralValue::Undefined => f.keyword(Keyword::Undefined),
        LiteralValue::Null | LiteralValue::Object => f.null_literal(),
    }
}

pub(crate) fn enum_member_type(f: &NodeBuilder, value: &EnumValue) -> TypeNode {
    match value {
        EnumValue::Number(number) => f.numeric_literal(*number),
        EnumValue::String(text) => f.string_literal(text.as_str()),
    }
}
