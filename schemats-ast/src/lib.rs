//! TypeScript type-node model and printer.
//!
//! The generator builds [`TypeNode`] trees through a [`NodeBuilder`] and
//! renders them with [`render`], producing the same text the TypeScript
//! compiler's printer produces for synthesized nodes.
//!
//! ```
//! use schemats_ast::{Keyword, NodeBuilder, render};
//!
//! let f = NodeBuilder;
//! let node = f.union(vec![f.keyword(Keyword::String), f.null_literal()]);
//! assert_eq!(render(&node), "string | null");
//! ```

mod builder;
mod emitter;
mod escape;
mod indent;
mod node;
mod printer;

pub use builder::NodeBuilder;
pub use emitter::Emitter;
pub use escape::{format_number, is_identifier, quote_string};
pub use indent::Indent;
pub use node::{
    Declaration, Keyword, LiteralType, PropertyName, PropertySignature, TemplateSpan, TypeAlias,
    TypeNode,
};
pub use printer::{PrintOptions, Printer, Renderable, render, render_all, render_with};
