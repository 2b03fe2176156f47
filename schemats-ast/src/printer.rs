//! Rendering type nodes and declarations to TypeScript source text.

use crate::escape::{escape_template, format_number, quote_string};
use crate::{
    Declaration, Emitter, Indent, LiteralType, PropertyName, PropertySignature, TypeAlias,
    TypeNode,
};

/// Printer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    pub indent: Indent,
    /// Print type literals and tuples on one line.
    pub single_line: bool,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }
}

/// Trait for nodes the [`Printer`] can emit.
pub trait Renderable {
    fn print_to(&self, printer: &mut Printer);
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn print_to(&self, printer: &mut Printer) {
        (*self).print_to(printer)
    }
}

/// Prints type nodes with the layout of the TypeScript compiler's printer:
/// type literals and tuples span multiple lines, nested unions and
/// intersections are parenthesized.
#[derive(Debug, Clone)]
pub struct Printer {
    emitter: Emitter,
    single_line: bool,
}

impl Printer {
    pub fn new(options: &PrintOptions) -> Self {
        Self {
            emitter: Emitter::new(options.indent),
            single_line: options.single_line,
        }
    }

    /// Emit a renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        node.print_to(self);
        self
    }

    /// Separate the next declaration with an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.emitter.push_blank();
        self
    }

    /// Consume the printer and return the printed text.
    pub fn finish(self) -> String {
        self.emitter.build()
    }

    pub fn print_type(&mut self, node: &TypeNode) {
        match node {
            TypeNode::Keyword(keyword) => {
                self.emitter.push_raw(keyword.as_str());
            }
            TypeNode::Literal(literal) => self.print_literal(literal),
            TypeNode::Reference { name, args } => {
                self.emitter.push_raw(name);
                if !args.is_empty() {
                    self.emitter.push_raw("<");
                    self.print_separated(args, ", ", false);
                    self.emitter.push_raw(">");
                }
            }
            TypeNode::Array(element) => {
                let parenthesize =
                    element.is_compound() || matches!(**element, TypeNode::Readonly(_));
                self.print_wrapped(element, parenthesize);
                self.emitter.push_raw("[]");
            }
            TypeNode::Tuple(elements) => self.print_tuple(elements),
            TypeNode::Union(types) => {
                if types.is_empty() {
                    self.emitter.push_raw("never");
                } else {
                    self.print_separated(types, " | ", true);
                }
            }
            TypeNode::Intersection(types) => {
                if types.is_empty() {
                    self.emitter.push_raw("unknown");
                } else {
                    self.print_separated(types, " & ", true);
                }
            }
            TypeNode::TypeLiteral(members) => self.print_type_literal(members),
            TypeNode::Readonly(inner) => {
                self.emitter.push_raw("readonly ");
                self.print_wrapped(inner, inner.is_compound());
            }
            TypeNode::TemplateLiteral { head, spans } => {
                self.emitter.push_raw("`");
                self.emitter.push_raw(&escape_template(head));
                for span in spans {
                    self.emitter.push_raw("${");
                    self.print_type(&span.ty);
                    self.emitter.push_raw("}");
                    self.emitter.push_raw(&escape_template(&span.text));
                }
                self.emitter.push_raw("`");
            }
        }
    }

    fn print_literal(&mut self, literal: &LiteralType) {
        let text = match literal {
            LiteralType::String(value) => quote_string(value),
            LiteralType::Number(value) => format_number(*value),
            LiteralType::BigInt(value) => format!("{}n", value),
            LiteralType::Boolean(value) => value.to_string(),
            LiteralType::Null => "null".to_string(),
        };
        self.emitter.push_raw(&text);
    }

    fn print_wrapped(&mut self, node: &TypeNode, parenthesize: bool) {
        if parenthesize {
            self.emitter.push_raw("(");
            self.print_type(node);
            self.emitter.push_raw(")");
        } else {
            self.print_type(node);
        }
    }

    fn print_separated(&mut self, nodes: &[TypeNode], separator: &str, constituents: bool) {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                self.emitter.push_raw(separator);
            }
            self.print_wrapped(node, constituents && node.is_compound());
        }
    }

    fn print_tuple(&mut self, elements: &[TypeNode]) {
        if elements.is_empty() {
            self.emitter.push_raw("[]");
            return;
        }
        if self.single_line {
            self.emitter.push_raw("[");
            self.print_separated(elements, ", ", false);
            self.emitter.push_raw("]");
            return;
        }

        self.emitter.push_raw("[").push_indent();
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                self.emitter.push_raw(",");
            }
            self.emitter.push_newline();
            self.print_type(element);
        }
        self.emitter.push_dedent().push_newline().push_raw("]");
    }

    fn print_type_literal(&mut self, members: &[PropertySignature]) {
        if members.is_empty() {
            self.emitter.push_raw("{}");
            return;
        }
        if self.single_line {
            self.emitter.push_raw("{ ");
            for member in members {
                if let Some(doc) = &member.doc {
                    self.emitter.push_inline_jsdoc(doc);
                }
                self.print_property(member);
                self.emitter.push_raw(" ");
            }
            self.emitter.push_raw("}");
            return;
        }

        self.emitter.push_raw("{").push_indent();
        for member in members {
            self.emitter.push_newline();
            if let Some(doc) = &member.doc {
                self.emitter.push_jsdoc(doc);
            }
            self.print_property(member);
        }
        self.emitter.push_dedent().push_newline().push_raw("}");
    }

    fn print_property(&mut self, member: &PropertySignature) {
        if member.readonly {
            self.emitter.push_raw("readonly ");
        }
        match &member.name {
            PropertyName::Identifier(name) => self.emitter.push_raw(name),
            PropertyName::StringLiteral(name) => self.emitter.push_raw(&quote_string(name)),
        };
        if member.optional {
            self.emitter.push_raw("?");
        }
        self.emitter.push_raw(": ");
        self.print_type(&member.ty);
        self.emitter.push_raw(";");
    }

    fn print_alias(&mut self, alias: &TypeAlias) {
        if let Some(doc) = &alias.doc {
            self.emitter.push_jsdoc(doc);
        }
        if alias.exported {
            self.emitter.push_raw("export ");
        }
        self.emitter.push_raw("type ");
        self.emitter.push_raw(&alias.name);
        self.emitter.push_raw(" = ");
        self.print_type(&alias.ty);
        self.emitter.push_raw(";");
    }
}

impl Renderable for TypeNode {
    fn print_to(&self, printer: &mut Printer) {
        printer.print_type(self);
    }
}

impl Renderable for TypeAlias {
    fn print_to(&self, printer: &mut Printer) {
        printer.print_alias(self);
    }
}

impl Renderable for Declaration {
    fn print_to(&self, printer: &mut Printer) {
        match self {
            Self::Type(node) => printer.print_type(node),
            Self::Alias(alias) => printer.print_alias(alias),
        }
    }
}

/// Render a node with the default options.
pub fn render(node: &impl Renderable) -> String {
    render_with(node, &PrintOptions::default())
}

/// Render a node with explicit options.
pub fn render_with(node: &impl Renderable, options: &PrintOptions) -> String {
    let mut printer = Printer::new(options);
    printer.emit(node);
    printer.finish()
}

/// Render declarations separated by blank lines.
pub fn render_all<'a, I>(declarations: I, options: &PrintOptions) -> String
where
    I: IntoIterator<Item = &'a Declaration>,
{
    let mut printer = Printer::new(options);
    for (index, declaration) in declarations.into_iter().enumerate() {
        if index > 0 {
            printer.blank();
        }
        printer.emit(declaration);
    }
    printer.finish()
}
