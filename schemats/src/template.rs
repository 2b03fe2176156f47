//! Normalization of template-literal parts into head + spans.

use schemats_schema::{LiteralValue, SchemaId, TemplatePart};

/// A template literal broken into alternating text and interpolations.
///
/// Always shaped `head (value text)*`: the first and last entries are text,
/// and no two interpolations are adjacent.
#[derive(Debug, PartialEq)]
pub(crate) struct Template<'a> {
    pub head: String,
    pub spans: Vec<Span<'a>>,
}

/// One interpolated part and the text following it.
#[derive(Debug, PartialEq)]
pub(crate) struct Span<'a> {
    /// Position of the part in the original list.
    pub index: usize,
    pub value: Interpolation<'a>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Interpolation<'a> {
    Value(&'a LiteralValue),
    Schema(SchemaId),
}

/// Merge adjacent text parts and pad with empty text where needed.
///
/// String values count as text. Returns `None` for an empty part list.
pub(crate) fn normalize(parts: &[TemplatePart]) -> Option<Template<'_>> {
    if parts.is_empty() {
        return None;
    }

    let mut head = String::new();
    let mut spans: Vec<Span<'_>> = Vec::new();
    for (index, part) in parts.iter().enumerate() {
        let value = match part {
            TemplatePart::Text(text) | TemplatePart::Value(LiteralValue::String(text)) => {
                match spans.last_mut() {
                    Some(span) => span.text.push_str(text),
                    None => head.push_str(text),
                }
                continue;
            }
            TemplatePart::Value(value) => Interpolation::Value(value),
            TemplatePart::Schema(id) => Interpolation::Schema(*id),
        };
        spans.push(Span {
            index,
            value,
            text: String::new(),
        });
    }

    Some(Template { head, spans })
}
